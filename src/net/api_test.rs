use super::*;

#[test]
fn routes_match_backend_urls() {
    assert_eq!(FORM_HTML_ROUTE, "/core/api/form_html");
    assert_eq!(RESULT_BLOCKS_HTML_ROUTE, "/core/api/result_blocks_html");
    assert_eq!(PARSER_ROUTE, "/core/api/parser");
}

#[test]
fn only_http_500_means_parser_unavailable() {
    assert!(parser_unavailable(500));
    assert!(!parser_unavailable(502));
    assert!(!parser_unavailable(200));
    assert!(!parser_unavailable(404));
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Request("offline".to_owned()).to_string(), "request failed: offline");
    assert_eq!(
        ApiError::Decode("expected value".to_owned()).to_string(),
        "response decode failed: expected value"
    );
    assert_eq!(ApiError::Unsupported.to_string(), "not available outside the browser");
}
