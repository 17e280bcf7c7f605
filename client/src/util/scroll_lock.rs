//! Background page scroll locking while the modal is open.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

/// `overflow` value for the `<body>` element.
#[must_use]
pub fn overflow_value(locked: bool) -> &'static str {
    if locked { "hidden" } else { "auto" }
}

/// Lock or restore scrolling of the page behind the modal.
pub fn set_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            log::warn!("scroll lock: no document body");
            return;
        };
        if let Err(e) = body.style().set_property("overflow", overflow_value(locked)) {
            log::warn!("scroll lock: set overflow failed: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
