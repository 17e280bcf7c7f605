#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn preload_issues_nothing_without_a_browser() {
    assert_eq!(preload_panel_images(), 0);
}
