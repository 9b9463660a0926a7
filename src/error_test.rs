use super::*;

#[test]
fn display_names_the_failure() {
    assert_eq!(PageError::MissingWindow.to_string(), "no global window");
    assert_eq!(
        PageError::Js("boom".to_owned()).to_string(),
        "javascript error: boom"
    );
    assert_eq!(
        PageError::Config("bad field".to_owned()).to_string(),
        "invalid config: bad field"
    );
}

#[test]
fn json_errors_convert_into_draft_errors() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let page: PageError = err.into();
    assert!(matches!(page, PageError::Draft(_)));
    assert!(page.to_string().starts_with("draft encoding failed"));
}
