use super::*;

#[test]
fn to_fixed_pads_and_rounds() {
    assert_eq!(to_fixed(0.0, 2), "0.00");
    assert_eq!(to_fixed(-0.0, 2), "0.00");
    assert_eq!(to_fixed(37.5, 2), "37.50");
    assert_eq!(to_fixed(1.0 / 3.0, 2), "0.33");
    assert_eq!(to_fixed(2.0 / 3.0, 2), "0.67");
}

#[test]
fn to_fixed_rounds_exact_ties_away_from_zero() {
    assert_eq!(to_fixed(0.125, 2), "0.13");
    assert_eq!(to_fixed(0.375, 2), "0.38");
    assert_eq!(to_fixed(-0.125, 2), "-0.13");
    assert_eq!(to_fixed(2.5, 0), "3");
}

#[test]
fn to_fixed_keeps_inexact_near_ties_below() {
    // Each is stored slightly under the half.
    assert_eq!(to_fixed(1.005, 2), "1.00");
    assert_eq!(to_fixed(0.015, 2), "0.01");
    assert_eq!(to_fixed(21_747.765, 2), "21747.76");
}

#[test]
fn to_fixed_carries_through_nines() {
    assert_eq!(to_fixed(9.999, 2), "10.00");
    assert_eq!(to_fixed(0.996, 2), "1.00");
    assert_eq!(to_fixed(99.5, 0), "100");
}

#[test]
fn to_fixed_reports_non_finite_values() {
    assert_eq!(to_fixed(f64::NAN, 2), "NaN");
    assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
    assert_eq!(to_fixed(f64::NEG_INFINITY, 2), "-Infinity");
}

#[test]
fn format_currency_groups_thousands() {
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(5.0), "$5.00");
    assert_eq!(format_currency(999.999), "$1,000.00");
    assert_eq!(format_currency(1234.5), "$1,234.50");
    assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
}

#[test]
fn format_currency_rounds_shortest_decimal_half_up() {
    assert_eq!(format_currency(1.005), "$1.01");
    assert_eq!(format_currency(0.145), "$0.15");
    assert_eq!(format_currency(0.285), "$0.29");
    assert_eq!(format_currency(0.015), "$0.02");
    assert_eq!(format_currency(-1.005), "-$1.01");
}

#[test]
fn format_currency_prefixes_sign_before_symbol() {
    assert_eq!(format_currency(-5.0), "-$5.00");
    assert_eq!(format_currency(-12_345.0), "-$12,345.00");
}

#[test]
fn format_currency_handles_non_finite() {
    assert_eq!(format_currency(f64::NAN), "$NaN");
    assert_eq!(format_currency(f64::INFINITY), "$∞");
    assert_eq!(format_currency(f64::NEG_INFINITY), "-$∞");
}

#[test]
fn format_date_accepts_plain_dates() {
    assert_eq!(format_date("2024-01-05").as_deref(), Some("January 5, 2024"));
    assert_eq!(format_date(" 2023-12-31 ").as_deref(), Some("December 31, 2023"));
}

#[test]
fn format_date_accepts_timestamps() {
    assert_eq!(
        format_date("2024-03-09T14:30").as_deref(),
        Some("March 9, 2024")
    );
    assert_eq!(
        format_date("2024-03-09T14:30:15.250").as_deref(),
        Some("March 9, 2024")
    );
    assert_eq!(
        format_date("2024-07-04T23:00:00-05:00").as_deref(),
        Some("July 4, 2024")
    );
}

#[test]
fn format_date_accepts_offsets_without_seconds_and_slashes() {
    assert_eq!(format_date("2024-03-09T14:30Z").as_deref(), Some("March 9, 2024"));
    assert_eq!(
        format_date("2024-03-09T14:30+02:00").as_deref(),
        Some("March 9, 2024")
    );
    assert_eq!(format_date("2024/01/05").as_deref(), Some("January 5, 2024"));
}

#[test]
fn format_date_rejects_garbage() {
    assert_eq!(format_date("next tuesday"), None);
    assert_eq!(format_date("2024-02-30"), None);
    assert_eq!(format_date(""), None);
}

#[test]
fn format_timestamp_ms_uses_utc_calendar_date() {
    assert_eq!(format_timestamp_ms(0.0).as_deref(), Some("January 1, 1970"));
    assert_eq!(
        format_timestamp_ms(1_704_412_800_000.0).as_deref(),
        Some("January 5, 2024")
    );
    assert_eq!(format_timestamp_ms(f64::NAN), None);
}
