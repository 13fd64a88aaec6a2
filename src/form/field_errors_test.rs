use super::*;
use serde_json::json;

#[test]
fn matched_fields_go_inline_and_rest_to_alert() {
    let data = json!({
        "title": ["Обязательное поле."],
        "non_field_errors": ["Такое поле уже существует.", "Повторите попытку."],
        "max_length": "Введите целое число."
    });
    let known = ["title", "max_length"];
    let plan = ErrorPlan::from_response(&data, |field| known.contains(&field));

    assert_eq!(plan.inline.len(), 2);
    let title = plan.inline.iter().find(|e| e.field == "title").unwrap();
    assert_eq!(title.messages, vec!["Обязательное поле."]);
    let max_length = plan.inline.iter().find(|e| e.field == "max_length").unwrap();
    assert_eq!(max_length.messages, vec!["Введите целое число."]);

    assert!(plan.shows_alert());
    assert_eq!(plan.alert, vec!["Такое поле уже существует.", "Повторите попытку."]);
}

#[test]
fn all_matched_means_no_alert() {
    let data = json!({"title": "bad"});
    let plan = ErrorPlan::from_response(&data, |_| true);
    assert!(!plan.shows_alert());
}

#[test]
fn non_object_body_is_alerted_whole() {
    let plan = ErrorPlan::from_response(&json!("Доступ запрещён."), |_| true);
    assert!(plan.inline.is_empty());
    assert_eq!(plan.alert, vec!["Доступ запрещён."]);
}

#[test]
fn null_body_produces_nothing() {
    let plan = ErrorPlan::from_response(&Value::Null, |_| true);
    assert_eq!(plan, ErrorPlan::default());
}

#[test]
fn ids_and_classes_are_form_scoped() {
    assert_eq!(field_element_id("patch-7-form", "title"), "patch-7-form-title");
    assert_eq!(error_div_class("patch-7-form"), "patch-7-form-error-div");
}

#[test]
fn messages_of_stringifies_non_text_entries() {
    assert_eq!(messages_of(&json!(["a", 2])), vec!["a", "2"]);
}

#[test]
fn alert_keeps_server_field_order() {
    let data = json!({"title": "first", "non_field_errors": "second"});
    let plan = ErrorPlan::from_response(&data, |_| false);
    assert_eq!(plan.alert, vec!["first", "second"]);
}
