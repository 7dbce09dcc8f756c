use std::fmt;

// Why a raw URL was refused by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlRejection {
    Missing,
    Malformed,
    DisallowedScheme,
}

// Domain-level errors for the QR generation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    InvalidUrl(UrlRejection),
    EncodingFailure,
    Unauthorized,
}

impl fmt::Display for QrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QrError::InvalidUrl(UrlRejection::Missing) => write!(f, "url is required"),
            QrError::InvalidUrl(UrlRejection::Malformed) => write!(f, "url could not be parsed"),
            QrError::InvalidUrl(UrlRejection::DisallowedScheme) => {
                write!(f, "url scheme must be http or https")
            }
            QrError::EncodingFailure => write!(f, "qr encoding failed"),
            QrError::Unauthorized => write!(f, "caller is not authorized"),
        }
    }
}

impl std::error::Error for QrError {}

// Failure reported by an encoder adapter. The detail is for operators only.
#[derive(Debug)]
pub enum EncodeError {
    // The symbol could not be built (e.g. data too long for the level).
    Symbol(String),
    // The module matrix could not be rasterized or written as PNG.
    Raster(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Symbol(detail) => write!(f, "qr symbol error: {detail}"),
            EncodeError::Raster(detail) => write!(f, "qr raster error: {detail}"),
        }
    }
}

impl std::error::Error for EncodeError {}
