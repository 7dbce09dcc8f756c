use crate::interface_adapters::handlers::{refresh_preview, render_field};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::post};
use std::sync::Arc;

pub const REFRESH_PATH: &str = "/fields/qrcode/refresh";
pub const RENDER_PATH: &str = "/fields/qrcode/render";

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(REFRESH_PATH, post(refresh_preview))
        .route(RENDER_PATH, post(render_field))
        .with_state(state)
}
