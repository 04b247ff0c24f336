use super::*;
use crate::net::types::UserInfo;

fn authenticated() -> Session {
    let mut s = Session::default();
    s.set_user(UserInfo {
        email: "pat@example.com".to_owned(),
        name: "Pat".to_owned(),
        role: "viewer".to_owned(),
        location: serde_json::Value::Null,
    });
    s
}

#[test]
fn authenticated_session_is_authorized_everywhere() {
    assert_eq!(decide(&authenticated(), true), GuardDecision::Authorized);
    assert_eq!(decide(&authenticated(), false), GuardDecision::Authorized);
}

#[test]
fn unauthenticated_browser_visit_redirects() {
    assert_eq!(decide(&Session::default(), true), GuardDecision::Redirecting);
}

#[test]
fn unauthenticated_pre_render_skips_navigation() {
    assert_eq!(decide(&Session::default(), false), GuardDecision::Skipped);
}

#[test]
fn cleared_session_is_caught_on_the_next_check() {
    let mut s = authenticated();
    assert_eq!(decide(&s, true), GuardDecision::Authorized);
    s.clear_user();
    assert_eq!(decide(&s, true), GuardDecision::Redirecting);
}
