use super::*;

#[test]
fn total_is_rate_times_duration_with_two_decimals() {
    assert_eq!(total_label(total("25", "3")), "$75.00");
    assert_eq!(total_label(total("12.5", "3")), "$37.50");
    assert_eq!(total_label(total("19.99", "2")), "$39.98");
    assert_eq!(total_label(total("0", "8")), "$0.00");
}

#[test]
fn non_numeric_inputs_count_as_zero() {
    assert_eq!(total_label(total("", "3")), "$0.00");
    assert_eq!(total_label(total("abc", "3")), "$0.00");
    assert_eq!(total_label(total("20", "")), "$0.00");
    assert_eq!(total_label(total("20", "hours")), "$0.00");
}

#[test]
fn rate_uses_longest_numeric_prefix() {
    assert_eq!(parse_rate("  15.75 per hour"), 15.75);
    assert_eq!(parse_rate("15."), 15.0);
    assert_eq!(parse_rate(".5"), 0.5);
    assert_eq!(parse_rate("2e2"), 200.0);
    assert_eq!(parse_rate("2e"), 2.0);
    assert_eq!(parse_rate("1.2.3"), 1.2);
    assert_eq!(parse_rate("-4"), -4.0);
}

#[test]
fn rate_without_digits_is_zero() {
    assert_eq!(parse_rate("."), 0.0);
    assert_eq!(parse_rate("-"), 0.0);
    assert_eq!(parse_rate("$20"), 0.0);
}

#[test]
fn duration_takes_leading_integer() {
    assert_eq!(parse_duration("4"), 4.0);
    assert_eq!(parse_duration("2.5"), 2.0);
    assert_eq!(parse_duration(" 3 hours"), 3.0);
    assert_eq!(parse_duration("0x10"), 16.0);
    assert_eq!(parse_duration("x"), 0.0);
}

#[test]
fn float_prefix_recognises_infinity() {
    assert!(parse_float_prefix("Infinity").is_infinite());
    assert_eq!(parse_float_prefix("-Infinity"), f64::NEG_INFINITY);
    assert!(parse_float_prefix("inf").is_nan());
}

#[test]
fn fractional_totals_round_to_cents() {
    assert_eq!(total_label(total("10.333", "3")), "$31.00");
    assert_eq!(total_label(total("0.125", "1")), "$0.13");
    assert_eq!(total_label(total("0.015", "1")), "$0.01");
}
