use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};

/// In-process HTTP backend bound to an ephemeral localhost port.
pub struct MockBackend {
    pub base_url: String,
    handle: ServerHandle,
}

impl MockBackend {
    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// Starts a backend serving the routes registered by `configure`. Must be
/// called from inside an actix runtime, e.g. an `#[actix_web::test]`.
pub fn start_mock_backend<F>(configure: F) -> MockBackend
where
    F: Fn(&mut web::ServiceConfig) + Clone + Send + 'static,
{
    let server = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("mock backend should bind");
    let addr = *server
        .addrs()
        .first()
        .expect("mock backend should expose an address");

    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    MockBackend {
        base_url: format!("http://{addr}"),
        handle,
    }
}
