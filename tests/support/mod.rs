// Per-test QR server on an ephemeral port, gated by a fixed nonce so the
// tests never depend on the process environment.
use qr_field_server::{build_state, serve};

pub const TEST_NONCE: &str = "integration-nonce";

pub struct TestServer {
    pub base_url: String,
    pub nonce: &'static str,
}

impl TestServer {
    pub fn refresh_url(&self) -> String {
        format!("{}/fields/qrcode/refresh", self.base_url)
    }
}

// The listener is bound before the task starts, so connections are accepted
// as soon as this returns. The server stops with the test's runtime.
pub async fn spawn_server() -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    tokio::spawn(serve(listener, build_state(Some(TEST_NONCE.to_string()))));

    TestServer {
        base_url: format!("http://{addr}"),
        nonce: TEST_NONCE,
    }
}
