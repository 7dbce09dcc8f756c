use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::FieldSettings;
use crate::use_cases::{RefreshInput, coerce_int};

// Integer parameter that tolerates whatever a browser form or a sloppy JSON
// client sends: numbers, floats (truncated), or text with leading digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LooseInt(pub i64);

impl<'de> Deserialize<'de> for LooseInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(LooseInt(match Raw::deserialize(deserializer)? {
            Raw::Int(value) => value,
            Raw::Float(value) => value as i64,
            Raw::Text(value) => coerce_int(&value),
        }))
    }
}

// Request payload for a preview refresh (form-encoded or JSON).
#[derive(Debug, Default, Deserialize)]
pub struct RefreshRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub size: Option<LooseInt>,
    #[serde(default)]
    pub error_correction: Option<String>,
    #[serde(default)]
    pub margin: Option<LooseInt>,
    #[serde(default)]
    pub nonce: Option<String>,
}

impl RefreshRequest {
    pub fn into_input(self, header_nonce: Option<String>) -> RefreshInput {
        RefreshInput {
            url: self.url,
            size: self.size.map(|value| value.0),
            error_correction: self.error_correction,
            margin: self.margin.map(|value| value.0),
            // Body nonce wins over the header.
            nonce: self.nonce.or(header_nonce),
        }
    }
}

// JSON envelope for refresh responses; `data` is either the image fragment
// or a human-readable error message.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefreshResponse {
    pub success: bool,
    pub data: String,
}

impl RefreshResponse {
    pub fn ok(html: String) -> Self {
        Self {
            success: true,
            data: html,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            success: false,
            data: message.to_string(),
        }
    }
}

// Request payload for rendering the editor widget server-side.
#[derive(Debug, Deserialize)]
pub struct RenderFieldRequest {
    pub name: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub settings: Option<FieldSettingsPayload>,
}

// Field settings as the host stores them. Numbers often arrive as text, so
// they go through the same coercion as refresh parameters.
#[derive(Debug, Default, Deserialize)]
pub struct FieldSettingsPayload {
    #[serde(default)]
    pub size: Option<LooseInt>,
    #[serde(default)]
    pub error_correction: Option<String>,
    #[serde(default)]
    pub margin: Option<LooseInt>,
}

impl FieldSettingsPayload {
    pub fn into_settings(self) -> FieldSettings {
        FieldSettings {
            size: self.size.map(|value| value.0),
            error_correction: self.error_correction,
            margin: self.margin.map(|value| value.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_json_params_are_numbers_or_text_then_they_coerce_to_integers() {
        let request: RefreshRequest = serde_json::from_str(
            r#"{"url":"https://example.com","size":"200abc","margin":3.7,"error_correction":"q"}"#,
        )
        .expect("expected json to decode");

        let input = request.into_input(None);

        assert_eq!(input.size, Some(200));
        assert_eq!(input.margin, Some(3));
        assert_eq!(input.error_correction.as_deref(), Some("q"));
    }

    #[test]
    fn when_json_params_are_null_then_they_are_absent() {
        let request: RefreshRequest =
            serde_json::from_str(r#"{"url":"https://example.com","size":null}"#)
                .expect("expected json to decode");

        assert_eq!(request.into_input(None).size, None);
    }

    #[test]
    fn when_nonce_is_in_body_and_header_then_body_wins() {
        let request = RefreshRequest {
            nonce: Some("body".to_string()),
            ..Default::default()
        };

        let input = request.into_input(Some("header".to_string()));

        assert_eq!(input.nonce.as_deref(), Some("body"));
    }

    #[test]
    fn when_field_settings_are_text_then_they_coerce_to_integers() {
        let request: RenderFieldRequest = serde_json::from_str(
            r#"{"name":"qr","settings":{"size":"300","error_correction":"M","margin":"2"}}"#,
        )
        .expect("expected json to decode");

        let settings = request
            .settings
            .expect("expected settings")
            .into_settings();

        assert_eq!(settings.size, Some(300));
        assert_eq!(settings.error_correction.as_deref(), Some("M"));
        assert_eq!(settings.margin, Some(2));
    }

    #[test]
    fn when_nonce_is_only_in_header_then_header_is_used() {
        let input = RefreshRequest::default().into_input(Some("header".to_string()));

        assert_eq!(input.nonce.as_deref(), Some("header"));
    }
}
