use super::*;

fn rule() -> DependencyRule {
    parse_rules(
        r#"[{
            "parent_field": 7,
            "child_field": 9,
            "values": {
                "cpc": ["Яндекс Директ", "Google Ads"],
                "on": ["Рассылка"]
            }
        }]"#,
    )
    .unwrap()
    .remove(0)
}

fn child_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("---------", ""),
        SelectOption::new("Google Ads", "google"),
        SelectOption::new("Яндекс Директ", "yandex"),
        SelectOption::new("Рассылка", "email"),
    ]
}

#[test]
fn rules_accept_integer_and_string_keys() {
    let rule = rule();
    assert_eq!(rule.parent_field, "7");
    assert_eq!(rule.child_id(), "id_9");

    let rules = parse_rules(r#"[{"parent_field": "utm_medium", "child_field": "12", "values": {}}]"#).unwrap();
    assert_eq!(rules[0].parent_field, "utm_medium");
}

#[test]
fn rules_reject_non_key_values() {
    assert!(parse_rules(r#"[{"parent_field": 1.5, "child_field": 2, "values": {}}]"#).is_err());
}

#[test]
fn matching_value_restricts_to_configured_labels_in_order() {
    let mut deps = DependentOptions::new(&rule(), child_options(), Some("google".to_owned()));
    assert_eq!(
        deps.apply("cpc"),
        Some(OptionsUpdate::Restrict(vec![
            SelectOption::new("Яндекс Директ", "yandex"),
            SelectOption::new("Google Ads", "google"),
        ]))
    );
    assert!(!deps.is_initial());
}

#[test]
fn unmatched_value_restores_original_options_and_selection() {
    let mut deps = DependentOptions::new(&rule(), child_options(), Some("google".to_owned()));
    deps.apply("cpc");
    assert_eq!(
        deps.apply("banner"),
        Some(OptionsUpdate::Restore {
            options: child_options(),
            selected: Some("google".to_owned()),
        })
    );
    assert!(deps.is_initial());
}

#[test]
fn unmatched_value_in_initial_state_is_noop() {
    let mut deps = DependentOptions::new(&rule(), child_options(), None);
    assert_eq!(deps.apply("banner"), None);
    assert_eq!(deps.apply(""), None);
}

#[test]
fn unknown_label_uses_label_as_value() {
    let rule = parse_rules(r#"[{"parent_field": 1, "child_field": 2, "values": {"x": ["Новый"]}}]"#)
        .unwrap()
        .remove(0);
    let mut deps = DependentOptions::new(&rule, child_options(), None);
    assert_eq!(
        deps.apply("x"),
        Some(OptionsUpdate::Restrict(vec![SelectOption::new("Новый", "Новый")]))
    );
}

#[test]
fn checkbox_parent_maps_to_on_off() {
    let mut deps = DependentOptions::new(&rule(), child_options(), None);
    assert_eq!(
        deps.apply(checkbox_value(true)),
        Some(OptionsUpdate::Restrict(vec![SelectOption::new("Рассылка", "email")]))
    );
    assert!(matches!(deps.apply(checkbox_value(false)), Some(OptionsUpdate::Restore { .. })));
}

#[test]
fn parent_kind_classification() {
    assert_eq!(ParentKind::classify(3, &FieldKind::Radio), Some(ParentKind::RadioGroup));
    assert_eq!(ParentKind::classify(1, &FieldKind::SelectOne), Some(ParentKind::Select));
    assert_eq!(ParentKind::classify(1, &FieldKind::Number), Some(ParentKind::TextInput));
    assert_eq!(ParentKind::classify(1, &FieldKind::Checkbox), Some(ParentKind::Checkbox));
    assert_eq!(ParentKind::classify(1, &FieldKind::TextArea), None);
    assert_eq!(ParentKind::classify(0, &FieldKind::Text), None);
}
