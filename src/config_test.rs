use super::*;

#[test]
fn defaults_match_django_conventions() {
    let config = ClientConfig::default();
    assert_eq!(config.csrf_cookie, "csrftoken");
    assert_eq!(config.csrf_header, "X-CSRFToken");
    assert_eq!(config.blink_ms, 100);
    assert_eq!(config.validation_delay_ms, 100);
    assert_eq!(config.level(), log::Level::Info);
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let config = ClientConfig::from_json(r#"{"log_level": "debug", "blink_ms": 250}"#).unwrap();
    assert_eq!(config.level(), log::Level::Debug);
    assert_eq!(config.blink_ms, 250);
    assert_eq!(config.csrf_cookie, "csrftoken");
}

#[test]
fn empty_object_is_default() {
    assert_eq!(ClientConfig::from_json("{}").unwrap(), ClientConfig::default());
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    let config = ClientConfig::from_json(r#"{"log_level": "loud"}"#).unwrap();
    assert_eq!(config.level(), log::Level::Info);
}

#[test]
fn malformed_json_is_an_error() {
    let err = ClientConfig::from_json("{log_level:").unwrap_err();
    assert!(err.to_string().starts_with("invalid client config json"));
}
