use std::fmt;

use url::Url;

use crate::domain::errors::UrlRejection;

pub const MIN_SIZE: u32 = 50;
pub const MAX_SIZE: u32 = 1000;
pub const DEFAULT_SIZE: u32 = 200;
pub const MIN_MARGIN: u32 = 0;
pub const MAX_MARGIN: u32 = 10;
pub const DEFAULT_MARGIN: u32 = 4;

/// QR error-correction tier. Higher tiers tolerate more damage at the cost of
/// a denser symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// ~7% recovery.
    #[default]
    L,
    /// ~15% recovery.
    M,
    /// ~25% recovery.
    Q,
    /// ~30% recovery.
    H,
}

impl ErrorCorrection {
    /// Lenient mapping: trims, uppercases, and falls back to `L` for anything
    /// that is not one of the four symbols.
    pub fn from_loose(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_ascii_uppercase()).as_deref() {
            Some("M") => ErrorCorrection::M,
            Some("Q") => ErrorCorrection::Q,
            Some("H") => ErrorCorrection::H,
            _ => ErrorCorrection::L,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An absolute `http`/`https` URL that passed the scheme allowlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetUrl(String);

impl TargetUrl {
    pub fn parse(raw: &str) -> Result<Self, UrlRejection> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UrlRejection::Missing);
        }

        let parsed = Url::parse(trimmed).map_err(|_| UrlRejection::Malformed)?;

        // Allowlist, not blocklist: every other scheme is refused.
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(UrlRejection::DisallowedScheme);
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(UrlRejection::Malformed);
        }

        // Keep what the user typed when the parser agrees with it, so
        // `http://example.com` is not rewritten to `http://example.com/`.
        let serialized = parsed.as_str();
        let value = if serialized == trimmed
            || serialized.strip_suffix('/') == Some(trimmed)
        {
            trimmed.to_string()
        } else {
            serialized.to_string()
        };

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TargetUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated parameters for one QR render. Every field is inside its bounds
/// from the moment the value exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    url: TargetUrl,
    size: u32,
    error_correction: ErrorCorrection,
    margin: u32,
}

impl QrRequest {
    pub fn new(
        url: TargetUrl,
        size: Option<i64>,
        error_correction: Option<&str>,
        margin: Option<i64>,
    ) -> Self {
        Self {
            url,
            size: sanitize_size(size),
            error_correction: ErrorCorrection::from_loose(error_correction),
            margin: sanitize_margin(margin),
        }
    }

    pub fn url(&self) -> &TargetUrl {
        &self.url
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn error_correction(&self) -> ErrorCorrection {
        self.error_correction
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    /// Per-module pixel scale handed to the encoder: `round(size / 25)`
    /// bounded to 1..=10.
    pub fn module_multiplier(&self) -> u32 {
        let scaled = (f64::from(self.size) / 25.0).round() as u32;
        scaled.clamp(1, 10)
    }
}

pub fn sanitize_size(size: Option<i64>) -> u32 {
    clamp_to(size, DEFAULT_SIZE, MIN_SIZE, MAX_SIZE)
}

pub fn sanitize_margin(margin: Option<i64>) -> u32 {
    clamp_to(margin, DEFAULT_MARGIN, MIN_MARGIN, MAX_MARGIN)
}

fn clamp_to(value: Option<i64>, default: u32, min: u32, max: u32) -> u32 {
    match value {
        Some(value) => value.clamp(i64::from(min), i64::from(max)) as u32,
        None => default,
    }
}
