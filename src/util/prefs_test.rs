#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn get_returns_none_without_a_browser() {
    assert_eq!(get("theme"), None);
}

#[test]
fn set_is_noop_but_callable() {
    set("theme", "dark");
    assert_eq!(get("theme"), None);
}
