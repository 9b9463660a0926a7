use super::*;

#[test]
fn describe_lists_latitude_then_longitude() {
    assert_eq!(describe(51.5072, -0.1276), "Current location: 51.5072 -0.1276");
}

#[test]
fn describe_keeps_full_precision() {
    assert_eq!(
        describe(-33.868_820, 151.209_295),
        "Current location: -33.86882 151.209295"
    );
}
