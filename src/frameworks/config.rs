use std::{env, net::IpAddr};

// Runtime/server settings, read from the environment (and `.env` locally).

pub fn http_host() -> IpAddr {
    env::var("QR_SERVER_HOST")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(IpAddr::from([127, 0, 0, 1]))
}

pub fn http_port() -> u16 {
    env::var("QR_SERVER_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3004)
}

// Shared nonce callers must present. Unset or blank disables the check.
pub fn refresh_nonce() -> Option<String> {
    env::var("QR_REFRESH_NONCE")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
