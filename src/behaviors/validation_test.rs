use super::*;

#[test]
fn auth_forms_are_excluded() {
    assert!(is_excluded_action(Some("/login")));
    assert!(is_excluded_action(Some("/register")));
    assert!(is_excluded_action(Some("https://locallink.example/register?next=/")));
}

#[test]
fn other_forms_are_validated() {
    assert!(!is_excluded_action(Some("/book-session/4")));
    assert!(!is_excluded_action(Some("/become-local")));
    assert!(!is_excluded_action(Some("")));
}

#[test]
fn forms_without_action_are_validated() {
    assert!(!is_excluded_action(None));
}
