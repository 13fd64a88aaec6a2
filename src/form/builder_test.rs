use super::*;
use serde_json::json;

#[test]
fn excludes_csrf_and_build_entries() {
    let request = BuilderRequest::from_entries([
        ("csrfmiddlewaretoken", "tok"),
        ("form_id", "4"),
        ("url", "https://example.com"),
        ("10", "google"),
        ("build", ""),
    ]);
    assert_eq!(request.form_id, json!(4));
    assert_eq!(request.form_data.len(), 2);
    assert!(!request.form_data.contains_key("csrfmiddlewaretoken"));
    assert!(!request.form_data.contains_key("build"));
    assert!(!request.form_data.contains_key("form_id"));
    assert_eq!(request.form_data.get("10").map(String::as_str), Some("google"));
}

#[test]
fn missing_form_id_defaults_to_zero() {
    let request = BuilderRequest::from_entries([("url", "x")]);
    assert_eq!(request.form_id, json!(0));
}

#[test]
fn non_numeric_form_id_is_kept_as_text() {
    let request = BuilderRequest::from_entries([("form_id", "draft")]);
    assert_eq!(request.form_id, json!("draft"));
}

#[test]
fn serialized_payload_has_form_id_and_flat_form_data() {
    let request = BuilderRequest::from_entries(vec![
        ("form_id".to_owned(), "2".to_owned()),
        ("11".to_owned(), "on".to_owned()),
    ]);
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"form_id": 2, "form_data": {"11": "on"}})
    );
}

#[test]
fn later_duplicate_entry_wins() {
    let request = BuilderRequest::from_entries([("12", "a"), ("12", "b")]);
    assert_eq!(request.form_data.get("12").map(String::as_str), Some("b"));
}
