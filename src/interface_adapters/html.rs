// HTML fragments handed back to the editor and to front-end templates.

use crate::domain::QrImage;

pub const IMAGE_ALT: &str = "QR Code";
pub const GENERIC_ERROR_MESSAGE: &str = "Error generating QR code.";
const ERROR_COLOR: &str = "#d63638";
const DISPLAY_CLASS: &str = "acf-qr-code";

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Preview tag. `width`/`height` declare the requested size, not the true
/// bitmap edge; the inline style lets browsers scale the image to fit.
pub fn img_tag(image: &QrImage) -> String {
    format!(
        r#"<img src="{}" alt="{}" width="{}" height="{}" style="max-width:100%;height:auto;" />"#,
        escape_html(&image.data_uri()),
        IMAGE_ALT,
        image.width_px(),
        image.height_px(),
    )
}

pub fn error_paragraph(message: &str) -> String {
    format!(
        r#"<p style="color:{ERROR_COLOR};">{}</p>"#,
        escape_html(message)
    )
}

/// Front-end display tag: default `src`, `width`, `height`, `alt`, and `class`
/// attributes, with caller attributes replacing or extending them in order.
/// Attribute names outside `[A-Za-z0-9_:-]` are dropped.
pub fn img_tag_with_attrs(image: &QrImage, overrides: &[(&str, &str)]) -> String {
    let mut attrs: Vec<(String, String)> = vec![
        ("src".to_string(), image.data_uri()),
        ("width".to_string(), image.width_px().to_string()),
        ("height".to_string(), image.height_px().to_string()),
        ("alt".to_string(), IMAGE_ALT.to_string()),
        ("class".to_string(), DISPLAY_CLASS.to_string()),
    ];

    for (name, value) in overrides {
        if !is_attr_name(name) {
            tracing::debug!(attr = %name, "dropping invalid attribute name");
            continue;
        }
        match attrs.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => attrs.push((name.to_string(), value.to_string())),
        }
    }

    let rendered = attrs
        .iter()
        .map(|(name, value)| format!(r#"{name}="{}""#, escape_html(value)))
        .collect::<Vec<_>>()
        .join(" ");

    format!("<img {rendered} />")
}

fn is_attr_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':'))
}
