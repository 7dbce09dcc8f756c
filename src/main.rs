use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Startup and serve errors are already logged by the server.
    match qr_field_server::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
