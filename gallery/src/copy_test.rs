use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::consts::CONTACT_EMAIL;

// =============================================================
// Test doubles
// =============================================================

struct FakeClipboard {
    reject: bool,
    written: RefCell<Vec<String>>,
}

impl FakeClipboard {
    fn accepting() -> Self {
        Self { reject: false, written: RefCell::new(Vec::new()) }
    }

    fn rejecting() -> Self {
        Self { reject: true, written: RefCell::new(Vec::new()) }
    }
}

impl AsyncClipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CopyError> {
        if self.reject {
            return Err(CopyError::ClipboardRejected("NotAllowedError".into()));
        }
        self.written.borrow_mut().push(text.to_owned());
        Ok(())
    }
}

#[derive(Default)]
struct FakeSurface {
    fail_mount: bool,
    fail_copy: bool,
    mounted: Cell<usize>,
    removed: Cell<usize>,
    copied: RefCell<Vec<String>>,
}

impl SelectionSurface for FakeSurface {
    type Region = String;

    fn mount(&self, text: &str) -> Result<String, CopyError> {
        if self.fail_mount {
            return Err(CopyError::RegionUnavailable("no document".into()));
        }
        self.mounted.set(self.mounted.get() + 1);
        Ok(text.to_owned())
    }

    fn select_and_copy(&self, region: &String) -> Result<(), CopyError> {
        if self.fail_copy {
            return Err(CopyError::CopyCommandFailed("SecurityError".into()));
        }
        self.copied.borrow_mut().push(region.clone());
        Ok(())
    }

    fn remove(&self, _region: &String) {
        self.removed.set(self.removed.get() + 1);
    }
}

fn failing_surface() -> FakeSurface {
    FakeSurface { fail_copy: true, ..FakeSurface::default() }
}

// =============================================================
// Strategy selection
// =============================================================

#[test]
fn async_clipboard_needs_clipboard_and_secure_context() {
    let caps = Capabilities { clipboard: true, secure_context: true };
    assert_eq!(CopyStrategy::select(caps), CopyStrategy::AsyncClipboard);
}

#[test]
fn insecure_context_uses_fallback() {
    let caps = Capabilities { clipboard: true, secure_context: false };
    assert_eq!(CopyStrategy::select(caps), CopyStrategy::SelectionFallback);
}

#[test]
fn missing_clipboard_uses_fallback() {
    assert_eq!(CopyStrategy::select(Capabilities::default()), CopyStrategy::SelectionFallback);
    let caps = Capabilities { clipboard: false, secure_context: true };
    assert_eq!(CopyStrategy::select(caps), CopyStrategy::SelectionFallback);
}

// =============================================================
// Outcome messages
// =============================================================

#[test]
fn copied_message() {
    assert_eq!(CopyOutcome::Copied.message(), "Email copied to clipboard!");
}

#[test]
fn manual_message_contains_email() {
    let outcome = CopyOutcome::Manual { text: CONTACT_EMAIL.to_owned() };
    assert_eq!(
        outcome.message(),
        "Failed to copy email. Please copy manually: andrej.krmpotic@gmail.com"
    );
}

// =============================================================
// Fallback scoping
// =============================================================

#[test]
fn fallback_success_removes_region() {
    let surface = FakeSurface::default();
    assert_eq!(fallback_copy(&surface, CONTACT_EMAIL), CopyOutcome::Copied);
    assert_eq!(surface.mounted.get(), 1);
    assert_eq!(surface.removed.get(), 1);
    assert_eq!(surface.copied.borrow().as_slice(), &[CONTACT_EMAIL.to_owned()]);
}

#[test]
fn fallback_failure_removes_region_and_asks_manual_copy() {
    let surface = failing_surface();
    let outcome = fallback_copy(&surface, CONTACT_EMAIL);
    assert_eq!(outcome, CopyOutcome::Manual { text: CONTACT_EMAIL.to_owned() });
    assert_eq!(surface.mounted.get(), 1);
    assert_eq!(surface.removed.get(), 1);
}

#[test]
fn fallback_mount_failure_asks_manual_copy() {
    let surface = FakeSurface { fail_mount: true, ..FakeSurface::default() };
    let outcome = fallback_copy(&surface, CONTACT_EMAIL);
    assert!(outcome.message().contains(CONTACT_EMAIL));
    assert_eq!(surface.removed.get(), 0);
}

#[test]
fn mounted_region_removes_on_drop() {
    let surface = FakeSurface::default();
    {
        let region = MountedRegion::mount(&surface, "x");
        assert!(region.is_ok());
        assert_eq!(surface.removed.get(), 0);
    }
    assert_eq!(surface.removed.get(), 1);
}

// =============================================================
// copy_text
// =============================================================

#[test]
fn copy_text_uses_async_clipboard_when_available() {
    let clipboard = FakeClipboard::accepting();
    let surface = FakeSurface::default();
    let outcome = block_on(copy_text(Some(&clipboard), true, &surface, CONTACT_EMAIL));
    assert_eq!(outcome, CopyOutcome::Copied);
    assert_eq!(clipboard.written.borrow().as_slice(), &[CONTACT_EMAIL.to_owned()]);
    assert_eq!(surface.mounted.get(), 0);
}

#[test]
fn copy_text_falls_back_on_rejection() {
    let clipboard = FakeClipboard::rejecting();
    let surface = FakeSurface::default();
    let outcome = block_on(copy_text(Some(&clipboard), true, &surface, CONTACT_EMAIL));
    assert_eq!(outcome, CopyOutcome::Copied);
    assert_eq!(surface.mounted.get(), 1);
    assert_eq!(surface.removed.get(), 1);
}

#[test]
fn copy_text_skips_clipboard_in_insecure_context() {
    let clipboard = FakeClipboard::accepting();
    let surface = FakeSurface::default();
    let outcome = block_on(copy_text(Some(&clipboard), false, &surface, CONTACT_EMAIL));
    assert_eq!(outcome, CopyOutcome::Copied);
    assert!(clipboard.written.borrow().is_empty());
    assert_eq!(surface.mounted.get(), 1);
}

#[test]
fn copy_text_without_clipboard_is_never_silent() {
    for surface in [FakeSurface::default(), failing_surface()] {
        let outcome = block_on(copy_text(None::<&FakeClipboard>, true, &surface, CONTACT_EMAIL));
        match outcome {
            CopyOutcome::Copied => {}
            CopyOutcome::Manual { text } => assert_eq!(text, CONTACT_EMAIL),
        }
        assert_eq!(surface.removed.get(), surface.mounted.get());
    }
}

#[test]
fn copy_text_rejected_then_failed_fallback_is_manual() {
    let clipboard = FakeClipboard::rejecting();
    let surface = failing_surface();
    let outcome = block_on(copy_text(Some(&clipboard), true, &surface, CONTACT_EMAIL));
    assert_eq!(outcome, CopyOutcome::Manual { text: CONTACT_EMAIL.to_owned() });
}
