// Framework bootstrap for the QR preview service.

use crate::domain::Authorizer;
use crate::frameworks::config;
use crate::interface_adapters::encoder::QrcodeEncoder;
use crate::interface_adapters::routes::{self, REFRESH_PATH};
use crate::interface_adapters::state::{AllowAllAuthorizer, AppState, SharedNonceAuthorizer};
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    serve(listener, build_state(config::refresh_nonce())).await
}

// Serve prepared state on an already bound listener.
pub async fn serve(listener: tokio::net::TcpListener, state: Arc<AppState>) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::new(config::http_host(), config::http_port());

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

/// Production wiring: real encoder, and a shared-nonce gate when `nonce` is set.
pub fn build_state(nonce: Option<String>) -> Arc<AppState> {
    let authorizer: Arc<dyn Authorizer> = match &nonce {
        Some(nonce) => Arc::new(SharedNonceAuthorizer::new(nonce.clone())),
        None => {
            tracing::warn!("no refresh nonce configured; every caller is treated as authorized");
            Arc::new(AllowAllAuthorizer)
        }
    };

    Arc::new(AppState {
        encoder: Arc::new(QrcodeEncoder),
        authorizer,
        refresh_url: Arc::from(REFRESH_PATH),
        widget_nonce: nonce.map(Arc::from),
    })
}
