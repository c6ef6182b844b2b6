#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_returns_defaults_outside_the_browser() {
    let cfg = read();
    assert_eq!(cfg, PageConfig::default());
    assert!(cfg.session().is_none());
}
