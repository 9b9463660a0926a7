//! Booking price calculator: total = hourly rate × duration in hours.
//!
//! The inputs are free text, so parsing follows what a browser's
//! `parseFloat` / `parseInt` accept: the longest numeric prefix wins and
//! anything unparsable counts as zero.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use crate::format::to_fixed;

/// Hourly rate from raw input; non-numeric input is zero.
pub fn parse_rate(raw: &str) -> f64 {
    zero_if_nan(parse_float_prefix(raw))
}

/// Duration in whole hours from raw input; non-numeric input is zero.
pub fn parse_duration(raw: &str) -> f64 {
    zero_if_nan(parse_int_prefix(raw))
}

pub fn total(rate_raw: &str, duration_raw: &str) -> f64 {
    parse_rate(rate_raw) * parse_duration(duration_raw)
}

/// Display text for a total, e.g. `$37.50`.
pub fn total_label(total: f64) -> String {
    format!("${}", to_fixed(total, 2))
}

fn zero_if_nan(value: f64) -> f64 {
    if value.is_nan() || value == 0.0 { 0.0 } else { value }
}

fn skip_digits(bytes: &[u8], mut at: usize) -> usize {
    while at < bytes.len() && bytes[at].is_ascii_digit() {
        at += 1;
    }
    at
}

/// Longest decimal prefix of `raw` as a float, `NaN` if there is none.
pub fn parse_float_prefix(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        let frac = frac_end - (end + 1);
        if digits + frac > 0 {
            digits += frac;
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    s[..end].parse().unwrap_or(f64::NAN)
}

/// Leading integer of `raw` (decimal or `0x` hex), `NaN` if there is none.
pub fn parse_int_prefix(raw: &str) -> f64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value = 0.0_f64;
    let mut seen = false;
    for ch in digits.chars() {
        let Some(d) = ch.to_digit(radix) else {
            break;
        };
        value = value * f64::from(radix) + f64::from(d);
        seen = true;
    }
    if !seen {
        return f64::NAN;
    }
    if negative { -value } else { value }
}

#[cfg(feature = "browser")]
pub fn install(
    doc: &web_sys::Document,
    config: &crate::config::PageConfig,
) -> Result<(), crate::error::PageError> {
    use crate::dom;

    let (Some(rate), Some(duration), Some(display)) = (
        dom::select_one(doc, &config.hourly_rate_selector)?,
        dom::select_one(doc, &config.duration_selector)?,
        dom::select_one(doc, &config.total_cost_selector)?,
    ) else {
        log::debug!("pricing calculator not on this page");
        return Ok(());
    };

    let recalculate = {
        let rate = rate.clone();
        let duration = duration.clone();
        move || {
            let rate_raw = dom::string_property(&rate, "value").unwrap_or_default();
            let duration_raw = dom::string_property(&duration, "value").unwrap_or_default();
            let label = total_label(total(&rate_raw, &duration_raw));
            display.set_text_content(Some(&label));
        }
    };
    let on_rate = recalculate.clone();
    dom::listen(&rate, "input", move |_| on_rate())?;
    dom::listen(&duration, "change", move |_| recalculate())?;
    Ok(())
}
