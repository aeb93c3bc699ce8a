pub mod wait_api;
