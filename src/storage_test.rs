use super::*;

fn autosave() -> AutoSave<MemoryStore> {
    AutoSave::new(MemoryStore::new(), "form_")
}

#[test]
fn draft_keeps_last_value_for_repeated_names() {
    let draft = Draft::from_entries([("city", "Lisbon"), ("city", "Porto"), ("bio", "")]);
    assert_eq!(draft.len(), 2);
    assert_eq!(draft.get("city"), Some("Porto"));
    assert_eq!(draft.get("bio"), Some(""));
}

#[test]
fn draft_serializes_as_flat_object_in_form_order() {
    let draft = Draft::from_entries([("name", "Ana"), ("hours", "3")]);
    let json = draft.to_json().unwrap();
    assert_eq!(json, r#"{"name":"Ana","hours":"3"}"#);
    assert_eq!(Draft::parse(&json).unwrap(), draft);
}

#[test]
fn repeated_name_updates_value_in_its_first_position() {
    let draft = Draft::from_entries([("a", "1"), ("b", "2"), ("a", "3")]);
    assert_eq!(draft.to_json().unwrap(), r#"{"a":"3","b":"2"}"#);
}

#[test]
fn parse_keeps_stored_key_order() {
    let draft = Draft::parse(r#"{"zip":"1000","city":"Lisbon"}"#).unwrap();
    let names: Vec<&str> = draft.iter().map(|(k, _)| k).collect();
    assert_eq!(names, ["zip", "city"]);
}

#[test]
fn parse_rejects_non_string_values() {
    assert!(Draft::parse(r#"{"hours":3}"#).is_err());
}

#[test]
fn draft_parse_rejects_non_object_json() {
    assert!(Draft::parse("[1,2]").is_err());
    assert!(Draft::parse("not json").is_err());
}

#[test]
fn restore_returns_what_was_saved() {
    let autosave = autosave();
    let draft = Draft::from_entries([("name", "Ana"), ("notes", "Near the station")]);
    autosave.save("booking", &draft).unwrap();

    assert_eq!(autosave.restore("booking"), Some(draft));
    assert!(autosave.store().get("form_booking").is_some());
}

#[test]
fn later_saves_overwrite_earlier_ones() {
    let autosave = autosave();
    autosave
        .save("booking", &Draft::from_entries([("name", "A")]))
        .unwrap();
    autosave
        .save("booking", &Draft::from_entries([("name", "Ana")]))
        .unwrap();
    assert_eq!(
        autosave.restore("booking").unwrap().get("name"),
        Some("Ana")
    );
    assert_eq!(autosave.store().len(), 1);
}

#[test]
fn discard_removes_the_draft() {
    let autosave = autosave();
    autosave
        .save("booking", &Draft::from_entries([("name", "Ana")]))
        .unwrap();
    autosave.discard("booking");

    assert_eq!(autosave.restore("booking"), None);
    assert!(autosave.store().is_empty());
}

#[test]
fn drafts_are_isolated_per_form() {
    let autosave = autosave();
    autosave
        .save("a", &Draft::from_entries([("x", "1")]))
        .unwrap();
    autosave
        .save("b", &Draft::from_entries([("x", "2")]))
        .unwrap();
    autosave.discard("a");
    assert_eq!(autosave.restore("a"), None);
    assert_eq!(autosave.restore("b").unwrap().get("x"), Some("2"));
}

#[test]
fn corrupt_draft_is_treated_as_missing() {
    let autosave = autosave();
    autosave.store().set("form_booking", "{broken").unwrap();
    assert_eq!(autosave.restore("booking"), None);
}

#[test]
fn tracked_tags_are_form_controls_only() {
    assert!(is_tracked_tag("INPUT"));
    assert!(is_tracked_tag("textarea"));
    assert!(is_tracked_tag("SELECT"));
    assert!(!is_tracked_tag("DIV"));
    assert!(!is_tracked_tag("BUTTON"));
}

#[test]
fn name_selector_quotes_special_characters() {
    assert_eq!(name_selector("city"), r#"[name="city"]"#);
    assert_eq!(name_selector(r#"a"b"#), r#"[name="a\"b"]"#);
    assert_eq!(name_selector(r"a\b"), r#"[name="a\\b"]"#);
}

#[test]
fn key_appends_form_id_to_prefix() {
    let autosave = autosave();
    assert_eq!(autosave.key("booking"), "form_booking");
    assert_eq!(autosave.key(""), "form_");
}

#[test]
fn boxed_store_drives_the_same_lifecycle() {
    let store: Box<dyn DraftStore> = Box::new(MemoryStore::new());
    let autosave = AutoSave::new(store, "draft:");
    autosave
        .save("profile", &Draft::from_entries([("bio", "Hi")]))
        .unwrap();
    assert!(autosave.store().get("draft:profile").is_some());
    autosave.discard("profile");
    assert_eq!(autosave.restore("profile"), None);
}
