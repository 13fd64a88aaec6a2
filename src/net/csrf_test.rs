use super::*;

#[test]
fn finds_token_among_other_cookies() {
    let cookies = "sessionid=abc; csrftoken=Zt9kQ2; theme=dark";
    assert_eq!(token_from_cookies(cookies, "csrftoken"), Some("Zt9kQ2".to_owned()));
}

#[test]
fn missing_cookie_is_none() {
    assert_eq!(token_from_cookies("sessionid=abc", "csrftoken"), None);
    assert_eq!(token_from_cookies("", "csrftoken"), None);
}

#[test]
fn name_must_match_exactly() {
    assert_eq!(token_from_cookies("xcsrftoken=nope", "csrftoken"), None);
}

#[test]
fn empty_value_is_none() {
    assert_eq!(token_from_cookies("csrftoken=", "csrftoken"), None);
}
