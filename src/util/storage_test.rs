#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn load_token_empty_by_default() {
    clear_token();
    assert_eq!(load_token(), None);
}

#[test]
fn save_then_load_token() {
    save_token("tok-1");
    assert_eq!(load_token().as_deref(), Some("tok-1"));
    save_token("tok-2");
    assert_eq!(load_token().as_deref(), Some("tok-2"));
    clear_token();
}

#[test]
fn clear_token_removes_value() {
    save_token("tok-1");
    clear_token();
    assert_eq!(load_token(), None);
}

#[test]
fn blank_token_counts_as_absent() {
    save_token("   ");
    assert_eq!(load_token(), None);
    clear_token();
}
