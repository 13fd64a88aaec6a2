use super::*;
use serde_json::json;

#[test]
fn checkbox_serializes_to_bool() {
    let fields = [
        FieldSnapshot::new("is_required", FieldKind::Checkbox, "on").checked(true),
        FieldSnapshot::new("is_hidden", FieldKind::Checkbox, "on"),
    ];
    let out = extract_payload(&fields);
    assert_eq!(out.payload.get("is_required"), Some(&json!(true)));
    assert_eq!(out.payload.get("is_hidden"), Some(&json!(false)));
}

#[test]
fn empty_number_serializes_to_null() {
    let fields = [
        FieldSnapshot::new("max_length", FieldKind::Number, ""),
        FieldSnapshot::new("min_length", FieldKind::Number, "3"),
    ];
    let out = extract_payload(&fields);
    assert_eq!(out.payload.get("max_length"), Some(&Value::Null));
    assert_eq!(out.payload.get("min_length"), Some(&json!("3")));
}

#[test]
fn hidden_and_submit_are_skipped() {
    let fields = [
        FieldSnapshot::new("csrfmiddlewaretoken", FieldKind::Hidden, "tok"),
        FieldSnapshot::new("save", FieldKind::Submit, "Сохранить"),
        FieldSnapshot::new("title", FieldKind::Text, "Источник"),
    ];
    let out = extract_payload(&fields);
    assert_eq!(out.payload.len(), 1);
    assert_eq!(out.payload.get("title"), Some(&json!("Источник")));
}

#[test]
fn json_fields_are_decoded_across_line_breaks() {
    let fields = [FieldSnapshot::new(
        "choices",
        FieldKind::TextArea,
        "{\"google\":\r\n \"Google\"}",
    )];
    let out = extract_payload(&fields);
    assert!(out.is_valid());
    assert_eq!(out.payload.get("choices"), Some(&json!({"google": "Google"})));
}

#[test]
fn malformed_json_field_is_reported_and_not_sent() {
    let fields = [
        FieldSnapshot::new("values", FieldKind::TextArea, "{\"on\": ["),
        FieldSnapshot::new("title", FieldKind::Text, "x"),
    ];
    let out = extract_payload(&fields);
    assert!(!out.is_valid());
    assert_eq!(out.errors.get("values").map(String::as_str), Some(INVALID_JSON_MESSAGE));
    assert!(!out.payload.contains_key("values"));
}

#[test]
fn only_checked_radio_contributes() {
    let fields = [
        FieldSnapshot::new("mode", FieldKind::Radio, "a").checked(true),
        FieldSnapshot::new("mode", FieldKind::Radio, "b"),
    ];
    let out = extract_payload(&fields);
    assert_eq!(out.payload.get("mode"), Some(&json!("a")));
}

#[test]
fn nameless_controls_are_skipped() {
    let fields = [FieldSnapshot::new("", FieldKind::Other("fieldset".to_owned()), "")];
    assert!(extract_payload(&fields).payload.is_empty());
}
