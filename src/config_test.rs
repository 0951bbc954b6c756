use super::*;

#[test]
fn resolve_base_url_defaults_when_unset() {
    assert_eq!(resolve_base_url(None), "http://localhost:8000");
}

#[test]
fn resolve_base_url_defaults_when_blank() {
    assert_eq!(resolve_base_url(Some("   ")), DEFAULT_API_URL);
}

#[test]
fn resolve_base_url_strips_trailing_slashes() {
    assert_eq!(
        resolve_base_url(Some("https://api.example.com//")),
        "https://api.example.com"
    );
}

#[test]
fn join_url_inserts_single_separator() {
    assert_eq!(join_url("http://a", "api/x"), "http://a/api/x");
    assert_eq!(join_url("http://a/", "/api/x"), "http://a/api/x");
}

#[test]
fn endpoint_uses_configured_origin() {
    let url = endpoint("/api/auth/profile");
    assert!(url.starts_with(api_base_url()));
    assert!(url.ends_with("/api/auth/profile"));
}
