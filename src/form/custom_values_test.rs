use super::*;

#[test]
fn parent_id_strips_container_prefix() {
    assert_eq!(parent_field_id("div_id_custom-10"), Some("id_10".to_owned()));
}

#[test]
fn unrelated_container_has_no_parent() {
    assert_eq!(parent_field_id("div_id_10"), None);
}

#[test]
fn only_sentinel_reveals() {
    assert!(reveals_custom_input("custom-value-input-field"));
    assert!(!reveals_custom_input("google"));
    assert!(!reveals_custom_input(""));
}

#[test]
fn radio_selector_requires_member_separator() {
    assert_eq!(radio_members_selector("id_1"), "[id^=\"id_1_\"]");
}
