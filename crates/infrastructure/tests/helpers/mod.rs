#![allow(dead_code)]
pub mod dns_server_mock;
pub mod http_server;

pub use dns_server_mock::MockDnsServer;
pub use http_server::TestHttpServer;
