/// Largest integer a JSON consumer can hold without losing precision.
pub const JS_SAFE_INT_MAX_U64: u64 = (1u64 << 53) - 1;

/// Converts text to a number the way a JavaScript `Number(text)` call does.
///
/// Surrounding whitespace is ignored, empty text is `0`, `0x`/`0o`/`0b`
/// prefixes select a radix, and anything unparsable is `NaN`.
pub fn parse_js_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        // `from_str_radix` tolerates a sign here; `Number("0x+1")` does not.
        if digits.starts_with(['+', '-']) {
            return f64::NAN;
        }
        return u64::from_str_radix(digits, radix)
            .map(|value| value as f64)
            .unwrap_or(f64::NAN);
    }

    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" && trimmed.len() - unsigned.len() <= 1 {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    // Rust also accepts "inf" and "nan" spellings; JavaScript does not.
    if unsigned
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Accepts `value` as an id when it is a whole number in `1..=JS_SAFE_INT_MAX_U64`.
pub fn positive_id(value: f64) -> Option<u64> {
    whole_number(value).filter(|id| (1..=JS_SAFE_INT_MAX_U64).contains(id))
}

/// Accepts `value` when it is a finite, non-negative whole number. Values past
/// `u64::MAX` saturate; no stored id is that large, so lookups simply miss.
pub fn whole_number(value: f64) -> Option<u64> {
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 {
        return None;
    }
    Some(value as u64)
}
