use super::*;
use serde_json::json;

#[test]
fn parser_response_decodes_form_data() {
    let raw = json!({"form_id": 3, "form_data": {"12": "google", "custom-12": ""}});
    let parsed: ParserResponse = serde_json::from_value(raw).unwrap();
    let ParserResponse::Data { form_id, form_data } = parsed else {
        panic!("expected data variant");
    };
    assert_eq!(form_id, json!(3));
    assert_eq!(form_data.get("12"), Some(&json!("google")));
}

#[test]
fn parser_response_decodes_error() {
    let parsed: ParserResponse = serde_json::from_value(json!({"error": "Код не найден."})).unwrap();
    assert_eq!(
        parsed,
        ParserResponse::Error {
            error: "Код не найден.".to_owned()
        }
    );
}

#[test]
fn unavailable_uses_fixed_message() {
    assert_eq!(
        ParserResponse::unavailable(),
        ParserResponse::Error {
            error: "Сервис временно недоступен 😔".to_owned()
        }
    );
}

#[test]
fn value_text_stringifies_scalars() {
    assert_eq!(value_text(&json!("abc")), "abc");
    assert_eq!(value_text(&json!(7)), "7");
    assert_eq!(value_text(&json!(true)), "true");
    assert_eq!(value_text(&Value::Null), "");
}

#[test]
fn builder_request_serializes_flat_form_data() {
    let mut form_data = BTreeMap::new();
    form_data.insert("url".to_owned(), "https://example.com".to_owned());
    let request = BuilderRequest {
        form_id: json!(5),
        form_data,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"form_id": 5, "form_data": {"url": "https://example.com"}})
    );
}

#[test]
fn patch_route_radio_button_uses_router_segment() {
    assert_eq!(PatchRoute::RadioButton.form_class(), "radio-button-patch-form");
    assert_eq!(PatchRoute::RadioButton.endpoint("42"), "/settings/api/v1/radiobutton/42/");
}

#[test]
fn patch_route_endpoints_cover_every_entity() {
    let endpoints: Vec<String> = PatchRoute::ALL.iter().map(|r| r.endpoint("1")).collect();
    assert_eq!(
        endpoints,
        vec![
            "/settings/api/v1/input-text/1/",
            "/settings/api/v1/input-int/1/",
            "/settings/api/v1/checkbox/1/",
            "/settings/api/v1/radiobutton/1/",
            "/settings/api/v1/select/1/",
            "/settings/api/v1/select-deps/1/",
        ]
    );
}

#[test]
fn patch_outcome_success_only_on_200() {
    let ok = PatchOutcome {
        status_code: 200,
        data: json!({}),
    };
    let created = PatchOutcome {
        status_code: 201,
        data: json!({}),
    };
    assert!(ok.is_success());
    assert!(!created.is_success());
}
