use std::sync::Arc;

use crate::domain::errors::EncodeError;
use crate::domain::request::ErrorCorrection;

// Everything an encoder needs for one symbol, in its native units.
#[derive(Debug, Clone, Copy)]
pub struct EncodeSpec<'a> {
    pub data: &'a str,
    pub level: ErrorCorrection,
    // Pixels per module edge.
    pub multiplier: u32,
    // Quiet zone, in modules.
    pub margin: u32,
}

// Raw encoder output captured in memory.
#[derive(Debug, Clone)]
pub struct EncodedSymbol {
    pub png: Vec<u8>,
    pub edge_px: u32,
}

// Port for the external QR encoder. Adapters must be deterministic: equal
// specs produce byte-identical PNGs.
pub trait QrEncoder: Send + Sync {
    fn encode_png(&self, spec: EncodeSpec<'_>) -> Result<EncodedSymbol, EncodeError>;
}

impl<T: QrEncoder + ?Sized> QrEncoder for &T {
    fn encode_png(&self, spec: EncodeSpec<'_>) -> Result<EncodedSymbol, EncodeError> {
        (**self).encode_png(spec)
    }
}

impl<T: QrEncoder + ?Sized> QrEncoder for Arc<T> {
    fn encode_png(&self, spec: EncodeSpec<'_>) -> Result<EncodedSymbol, EncodeError> {
        (**self).encode_png(spec)
    }
}

// Port for the host's session/anti-forgery check. The core only needs a yes/no.
pub trait Authorizer: Send + Sync {
    fn is_authorized(&self, nonce: Option<&str>) -> bool;
}

impl<T: Authorizer + ?Sized> Authorizer for Arc<T> {
    fn is_authorized(&self, nonce: Option<&str>) -> bool {
        (**self).is_authorized(nonce)
    }
}
