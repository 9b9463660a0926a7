//! Number and date formatting shared by the pricing widget and the
//! `window.LocalLink` helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_DISPLAY: &str = "%B %-d, %Y";

/// Enough fractional digits to print any `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// Render `value` with exactly `digits` fractional digits, as
/// `Number.prototype.toFixed` does.
///
/// Rounding looks at the exact binary value, so `0.015` (stored just under
/// the half) gives `0.01` while a true tie such as `0.125` rounds away from
/// zero to `0.13`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let body = round_half_up(&exact, digits);
    // Negative zero prints as plain zero.
    if value < 0.0 { format!("-{body}") } else { body }
}

/// Format `amount` as US dollars with thousands separators (`-$1,234.56`).
///
/// Like `Intl.NumberFormat`, cents are rounded half away from zero on the
/// shortest decimal that reads back as `amount`, so `1.005` gives `$1.01`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_owned();
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}$∞");
    }
    let fixed = round_half_up(&amount.abs().to_string(), 2);
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Round an unsigned plain decimal string to `digits` fractional digits,
/// half away from zero.
fn round_half_up(decimal: &str, digits: usize) -> String {
    let (whole, frac) = decimal.split_once('.').unwrap_or((decimal, ""));
    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    if frac.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let (int_digits, frac_digits) = kept.split_at(kept.len() - digits);
    let mut out: String = int_digits.iter().map(|b| char::from(*b)).collect();
    if digits > 0 {
        out.push('.');
        out.extend(frac_digits.iter().map(|b| char::from(*b)));
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a date string as `Month D, YYYY`.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, a naive `YYYY-MM-DDTHH:MM[:SS]`
/// timestamp, or one with an offset (`Z`, `+02:00`), seconds optional.
/// Offsets are not shifted; the calendar date as written is used.
pub fn format_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let date = ["%Y-%m-%d", "%Y/%m/%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%#z")
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })?;
    Some(date.format(DATE_DISPLAY).to_string())
}

/// Format milliseconds since the Unix epoch (UTC) as `Month D, YYYY`.
pub fn format_timestamp_ms(millis: f64) -> Option<String> {
    if !millis.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let dt = DateTime::from_timestamp_millis(millis.trunc() as i64)?;
    Some(dt.date_naive().format(DATE_DISPLAY).to_string())
}
