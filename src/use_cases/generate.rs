use crate::domain::{EncodeSpec, QrEncoder, QrError, QrImage, QrRequest};

// Image generation use case with an injected encoder.
pub struct GenerateQrUseCase<E> {
    pub encoder: E,
}

impl<E> GenerateQrUseCase<E>
where
    E: QrEncoder,
{
    pub fn execute(&self, request: &QrRequest) -> Result<QrImage, QrError> {
        let multiplier = request.module_multiplier();
        let spec = EncodeSpec {
            data: request.url().as_str(),
            level: request.error_correction(),
            multiplier,
            margin: request.margin(),
        };

        // Encoder detail stays in the logs; callers only see EncodingFailure.
        let symbol = self.encoder.encode_png(spec).map_err(|err| {
            tracing::error!(
                error = %err,
                url = %request.url(),
                level = %request.error_correction(),
                multiplier,
                "qr encoding failed"
            );
            QrError::EncodingFailure
        })?;

        if symbol.png.is_empty() {
            tracing::error!(url = %request.url(), "qr encoder returned empty output");
            return Err(QrError::EncodingFailure);
        }

        // Declared width/height stay at the requested size; the encoder
        // scales by whole modules so the bitmap is usually a little off.
        if symbol.edge_px != request.size() {
            tracing::debug!(
                requested_px = request.size(),
                rendered_px = symbol.edge_px,
                multiplier,
                "rendered qr edge differs from declared size"
            );
        }

        Ok(QrImage::new(symbol.png, request.size(), symbol.edge_px))
    }
}
