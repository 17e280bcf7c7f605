#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn locked_hides_overflow() {
    assert_eq!(overflow_value(true), "hidden");
}

#[test]
fn unlocked_restores_auto() {
    assert_eq!(overflow_value(false), "auto");
}

#[test]
fn set_locked_is_noop_but_callable() {
    set_locked(true);
    set_locked(false);
}
