use crate::domain::request::{sanitize_margin, sanitize_size};
use crate::domain::{ErrorCorrection, FieldSettings, QrEncoder, TargetUrl};
use crate::interface_adapters::html::{GENERIC_ERROR_MESSAGE, error_paragraph, escape_html, img_tag};
use crate::use_cases::GenerateQrUseCase;

const INPUT_PLACEHOLDER: &str = "Enter URL to generate QR Code";

// Everything the editor widget needs for one field instance.
pub struct FieldContext<'a> {
    pub name: &'a str,
    pub key: &'a str,
    pub value: Option<&'a str>,
    pub settings: &'a FieldSettings,
    pub nonce: Option<&'a str>,
    pub refresh_url: &'a str,
}

/// Contract a host CMS expects from a custom field type.
pub trait FieldType {
    fn name(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn category(&self) -> &'static str;
    fn defaults(&self) -> FieldSettings;

    /// Editor markup for the field.
    fn render_field(&self, ctx: &FieldContext<'_>) -> String;
    /// Value to persist for raw editor input.
    fn update_value(&self, raw: Option<&str>) -> String;
    /// Value handed back to the editor from storage.
    fn load_value(&self, stored: Option<&str>) -> String;
    /// Front-end markup for a stored value. Implementations build it from
    /// escaped parts, so callers need no separate output filtering pass.
    fn format_value(&self, stored: Option<&str>, settings: &FieldSettings) -> String;
}

// QR code field: a URL input with a generated image preview.
pub struct QrCodeField<E> {
    pub encoder: E,
}

impl<E> QrCodeField<E>
where
    E: QrEncoder,
{
    /// Image fragment for `url`, or the generic error paragraph. Never fails.
    pub fn image_html(&self, url: &str, settings: &FieldSettings) -> String {
        let target = match TargetUrl::parse(url) {
            Ok(target) => target,
            Err(rejection) => {
                tracing::debug!(?rejection, "stored qr url rejected");
                return error_paragraph(GENERIC_ERROR_MESSAGE);
            }
        };

        let use_case = GenerateQrUseCase {
            encoder: &self.encoder,
        };
        match use_case.execute(&settings.request_for(target)) {
            Ok(image) => img_tag(&image),
            Err(_) => error_paragraph(GENERIC_ERROR_MESSAGE),
        }
    }
}

impl<E> FieldType for QrCodeField<E>
where
    E: QrEncoder,
{
    fn name(&self) -> &'static str {
        "qrcode"
    }

    fn label(&self) -> &'static str {
        "QR Code"
    }

    fn category(&self) -> &'static str {
        "formatting"
    }

    fn defaults(&self) -> FieldSettings {
        FieldSettings::defaults()
    }

    fn render_field(&self, ctx: &FieldContext<'_>) -> String {
        let size = sanitize_size(ctx.settings.size);
        let level = ErrorCorrection::from_loose(ctx.settings.error_correction.as_deref());
        let margin = sanitize_margin(ctx.settings.margin);
        let value = ctx.value.unwrap_or_default();

        let preview = if value.is_empty() {
            String::new()
        } else {
            self.image_html(value, ctx.settings)
        };

        format!(
            concat!(
                r#"<div class="acf-qr-code-field" data-field-key="{key}" data-size="{size}" "#,
                r#"data-error-correction="{level}" data-margin="{margin}" data-nonce="{nonce}" "#,
                r#"data-refresh-url="{refresh_url}">"#,
                r#"<input type="url" class="widefat acf-qrcode-input" name="{name}" value="{value}" "#,
                r#"placeholder="{placeholder}" />"#,
                r#"<div class="acf-qrcode-preview">{preview}</div>"#,
                "</div>"
            ),
            key = escape_html(ctx.key),
            size = size,
            level = level,
            margin = margin,
            nonce = escape_html(ctx.nonce.unwrap_or_default()),
            refresh_url = escape_html(ctx.refresh_url),
            name = escape_html(ctx.name),
            value = escape_html(value),
            placeholder = INPUT_PLACEHOLDER,
            preview = preview,
        )
    }

    fn update_value(&self, raw: Option<&str>) -> String {
        match raw {
            None => String::new(),
            Some(raw) if raw.trim().is_empty() => String::new(),
            Some(raw) => TargetUrl::parse(raw)
                .map(TargetUrl::into_string)
                .unwrap_or_default(),
        }
    }

    fn load_value(&self, stored: Option<&str>) -> String {
        stored.unwrap_or_default().to_string()
    }

    fn format_value(&self, stored: Option<&str>, settings: &FieldSettings) -> String {
        match stored {
            Some(url) if !url.is_empty() => self.image_html(url, settings),
            _ => String::new(),
        }
    }
}
