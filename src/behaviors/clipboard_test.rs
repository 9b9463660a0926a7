use super::*;

const ORIGINAL: &str = r#"<i class="fas fa-copy"></i> Copy link"#;

#[test]
fn confirm_parks_label_and_shows_copied() {
    let mut label = ButtonLabel::new(ORIGINAL);
    label.confirm();
    assert_eq!(label.html, COPIED_LABEL);
    assert_eq!(label.parked.as_deref(), Some(ORIGINAL));
    assert!(label.success);
}

#[test]
fn revert_restores_original_text() {
    let mut label = ButtonLabel::new(ORIGINAL);
    label.confirm();
    label.revert();
    assert_eq!(label, ButtonLabel::new(ORIGINAL));
}

#[test]
fn second_click_inside_window_keeps_first_parked_label() {
    let mut label = ButtonLabel::new(ORIGINAL);
    label.confirm();
    label.confirm();
    assert_eq!(label.parked.as_deref(), Some(ORIGINAL));

    // First timer restores, the second finds nothing parked.
    label.revert();
    assert_eq!(label.html, ORIGINAL);
    label.revert();
    assert_eq!(label, ButtonLabel::new(ORIGINAL));
}

#[test]
fn click_after_revert_starts_a_fresh_cycle() {
    let mut label = ButtonLabel::new(ORIGINAL);
    label.confirm();
    label.revert();
    label.confirm();
    assert_eq!(label.html, COPIED_LABEL);
    label.revert();
    assert_eq!(label.html, ORIGINAL);
    assert!(!label.success);
}

#[test]
fn revert_without_confirm_is_a_no_op() {
    let mut label = ButtonLabel::new(ORIGINAL);
    label.revert();
    assert_eq!(label, ButtonLabel::new(ORIGINAL));
}
