use crate::domain::{Authorizer, QrEncoder, QrError, QrImage};
use crate::use_cases::generate::GenerateQrUseCase;
use crate::use_cases::validate::validate;

// Raw preview-refresh input after wire decoding, before any validation.
#[derive(Debug, Clone, Default)]
pub struct RefreshInput {
    pub url: Option<String>,
    pub size: Option<i64>,
    pub error_correction: Option<String>,
    pub margin: Option<i64>,
    pub nonce: Option<String>,
}

// Preview refresh: authorize, validate, then generate.
pub struct RefreshPreviewUseCase<A, E> {
    pub authorizer: A,
    pub encoder: E,
}

impl<A, E> RefreshPreviewUseCase<A, E>
where
    A: Authorizer,
    E: QrEncoder,
{
    pub fn execute(&self, input: RefreshInput) -> Result<QrImage, QrError> {
        if !self.authorizer.is_authorized(input.nonce.as_deref()) {
            return Err(QrError::Unauthorized);
        }

        let request = validate(
            input.url.as_deref(),
            input.size,
            input.error_correction.as_deref(),
            input.margin,
        )?;

        GenerateQrUseCase {
            encoder: &self.encoder,
        }
        .execute(&request)
    }
}
