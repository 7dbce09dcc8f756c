use crate::domain::{QrError, QrRequest, TargetUrl, UrlRejection};

/// Builds a bounded [`QrRequest`] from raw caller input.
///
/// Only the URL can fail the request. Numeric input is clamped and an unknown
/// error-correction level becomes `L`.
pub fn validate(
    raw_url: Option<&str>,
    raw_size: Option<i64>,
    raw_error_correction: Option<&str>,
    raw_margin: Option<i64>,
) -> Result<QrRequest, QrError> {
    let raw_url = raw_url.ok_or(QrError::InvalidUrl(UrlRejection::Missing))?;
    let url = TargetUrl::parse(raw_url).map_err(QrError::InvalidUrl)?;

    Ok(QrRequest::new(url, raw_size, raw_error_correction, raw_margin))
}

/// Integer coercion for text parameters. The leading numeric prefix is read
/// (sign, digits, optional fraction and exponent) and truncated toward zero:
/// `"200abc"` is 200, `"abc"` is 0, `"3.9"` is 3, `"1e3"` is 1000.
pub fn coerce_int(raw: &str) -> i64 {
    let numeric = numeric_prefix(raw.trim_start());

    if numeric.contains(['.', 'e', 'E']) {
        if let Ok(value) = numeric.parse::<f64>() {
            // `as` saturates, so huge exponents land on the i64 bounds.
            return value as i64;
        }
    }

    leading_integer(numeric)
}

// Longest prefix shaped like `[+-]digits[.digits][(e|E)[+-]digits]`.
fn numeric_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let digits_at = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
    let whole = digits_at(end);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_at(end + 1);
        if whole + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole + fraction == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'-' | b'+')) {
            exponent += 1;
        }
        let digits = digits_at(exponent);
        if digits > 0 {
            end = exponent + digits;
        }
    }

    &text[..end]
}

fn leading_integer(text: &str) -> i64 {
    let (sign, digits) = match text.as_bytes().first() {
        Some(b'-') => (-1, &text[1..]),
        Some(b'+') => (1, &text[1..]),
        _ => (1, text),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    sign * magnitude
}
