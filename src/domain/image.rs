use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

// Successful render: PNG bytes plus the dimensions reported to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    png: Vec<u8>,
    // Requested edge length; this is what width/height attributes declare.
    size: u32,
    // True bitmap edge: (modules + 2 * margin) * multiplier.
    rendered_px: u32,
}

impl QrImage {
    pub fn new(png: Vec<u8>, size: u32, rendered_px: u32) -> Self {
        Self {
            png,
            size,
            rendered_px,
        }
    }

    pub fn png(&self) -> &[u8] {
        &self.png
    }

    pub fn width_px(&self) -> u32 {
        self.size
    }

    pub fn height_px(&self) -> u32 {
        self.size
    }

    pub fn rendered_px(&self) -> u32 {
        self.rendered_px
    }

    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", BASE64.encode(&self.png))
    }
}
