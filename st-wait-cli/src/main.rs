fn main() {
    if let Err(err) = st_wait_client::app::run() {
        eprintln!("st_wait failed: {err}");
        std::process::exit(1);
    }
}
