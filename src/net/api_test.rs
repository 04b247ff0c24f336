use super::*;

// =============================================================
// Rejection message extraction
// =============================================================

#[test]
fn rejection_message_uses_the_server_error_field() {
    assert_eq!(
        rejection_message(r#"{ "error": "invalid condition" }"#),
        "invalid condition"
    );
}

#[test]
fn rejection_message_falls_back_on_unparseable_bodies() {
    assert_eq!(rejection_message("<html>Bad Gateway</html>"), "Unknown error");
    assert_eq!(rejection_message(""), "Unknown error");
}

#[test]
fn rejection_message_falls_back_when_the_field_is_missing_or_empty() {
    assert_eq!(rejection_message(r#"{ "detail": "nope" }"#), "Unknown error");
    assert_eq!(rejection_message(r#"{ "error": "" }"#), "Unknown error");
    assert_eq!(rejection_message(r#"{ "error": 42 }"#), "Unknown error");
}

#[test]
fn server_error_display_is_exactly_the_message() {
    let err = ApiError::Server {
        status: 400,
        message: "invalid condition".to_owned(),
    };
    assert_eq!(err.to_string(), "invalid condition");
}

#[test]
fn network_error_display_names_the_failure() {
    let err = ApiError::Network("timeout".to_owned());
    assert_eq!(err.to_string(), "network error: timeout");
}

// =============================================================
// Asset list envelope
// =============================================================

#[test]
fn parse_asset_list_accepts_the_wrapped_shape() {
    let value = serde_json::json!({ "assets": [{ "id": "a-1" }, { "id": "a-2" }] });
    let assets = parse_asset_list(value);
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].id, "a-1");
}

#[test]
fn parse_asset_list_accepts_a_bare_array() {
    let value = serde_json::json!([{ "id": "a-1" }]);
    let assets = parse_asset_list(value);
    assert_eq!(assets.len(), 1);
}

#[test]
fn parse_asset_list_degrades_to_empty_on_junk() {
    assert!(parse_asset_list(serde_json::json!("nope")).is_empty());
    assert!(parse_asset_list(serde_json::json!({ "data": [] })).is_empty());
    assert!(parse_asset_list(serde_json::json!(null)).is_empty());
}
