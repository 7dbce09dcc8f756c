// Domain layer: QR request value objects, errors, and ports.

pub mod errors;
pub mod image;
pub mod ports;
pub mod request;
pub mod settings;

pub use errors::{EncodeError, QrError, UrlRejection};
pub use image::QrImage;
pub use ports::{Authorizer, EncodeSpec, EncodedSymbol, QrEncoder};
pub use request::{ErrorCorrection, QrRequest, TargetUrl};
pub use settings::FieldSettings;
