use serde::{Deserialize, Serialize};

use crate::domain::request::{
    DEFAULT_MARGIN, DEFAULT_SIZE, ErrorCorrection, QrRequest, TargetUrl,
};

/// Per-field configuration as stored by the host. Values are raw and may be
/// out of range; they are only trusted after passing through [`QrRequest`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSettings {
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub error_correction: Option<String>,
    #[serde(default)]
    pub margin: Option<i64>,
}

impl FieldSettings {
    /// Settings a freshly created field starts with.
    pub fn defaults() -> Self {
        Self {
            size: Some(i64::from(DEFAULT_SIZE)),
            error_correction: Some(ErrorCorrection::L.as_str().to_string()),
            margin: Some(i64::from(DEFAULT_MARGIN)),
        }
    }

    pub fn request_for(&self, url: TargetUrl) -> QrRequest {
        QrRequest::new(
            url,
            self.size,
            self.error_correction.as_deref(),
            self.margin,
        )
    }
}
