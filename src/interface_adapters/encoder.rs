use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::{Color, EcLevel, QrCode};
use std::io::Cursor;

use crate::domain::{EncodeError, EncodeSpec, EncodedSymbol, ErrorCorrection, QrEncoder};

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

// Encoder adapter backed by the `qrcode` crate, rasterized with `image`.
// Output goes straight into a Vec; nothing touches the filesystem.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrcodeEncoder;

impl QrEncoder for QrcodeEncoder {
    fn encode_png(&self, spec: EncodeSpec<'_>) -> Result<EncodedSymbol, EncodeError> {
        let code = QrCode::with_error_correction_level(spec.data.as_bytes(), ec_level(spec.level))
            .map_err(|err| EncodeError::Symbol(err.to_string()))?;

        let raster = rasterize(&code, spec.multiplier.max(1), spec.margin);
        let edge_px = raster.width();

        let mut png = Vec::new();
        DynamicImage::ImageLuma8(raster)
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|err| EncodeError::Raster(err.to_string()))?;

        Ok(EncodedSymbol { png, edge_px })
    }
}

fn ec_level(level: ErrorCorrection) -> EcLevel {
    match level {
        ErrorCorrection::L => EcLevel::L,
        ErrorCorrection::M => EcLevel::M,
        ErrorCorrection::Q => EcLevel::Q,
        ErrorCorrection::H => EcLevel::H,
    }
}

// Paint each module as a multiplier x multiplier block inside a light quiet
// zone `margin` modules wide.
fn rasterize(code: &QrCode, multiplier: u32, margin: u32) -> GrayImage {
    let modules = code.to_colors();
    let module_count = code.width() as u32;
    let edge_modules = module_count + 2 * margin;
    let edge_px = edge_modules * multiplier;

    GrayImage::from_fn(edge_px, edge_px, |x, y| {
        let (mx, my) = (x / multiplier, y / multiplier);
        let inside = (margin..margin + module_count).contains(&mx)
            && (margin..margin + module_count).contains(&my);
        if !inside {
            return LIGHT;
        }

        let index = ((my - margin) * module_count + (mx - margin)) as usize;
        match modules[index] {
            Color::Dark => DARK,
            Color::Light => LIGHT,
        }
    })
}
