use super::*;

#[test]
fn target_id_strips_the_hash() {
    assert_eq!(target_id("#pricing"), Some("pricing"));
    assert_eq!(target_id("#how-it-works"), Some("how-it-works"));
}

#[test]
fn bare_hash_has_no_target() {
    assert_eq!(target_id("#"), None);
}

#[test]
fn non_fragment_links_have_no_target() {
    assert_eq!(target_id("/find-locals"), None);
    assert_eq!(target_id(""), None);
}
