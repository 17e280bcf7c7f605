//! Toast notification state.
//!
//! A toast is a single message slot. `show` overwrites whatever is there and
//! the host schedules a `hide` after [`TOAST_DURATION_MS`]. Hides are not
//! tied to the show that scheduled them, so an earlier timer can dismiss a
//! later message.
//!
//! [`TOAST_DURATION_MS`]: crate::consts::TOAST_DURATION_MS

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    message: String,
    visible: bool,
}

impl ToastState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.visible = true;
    }

    /// Hide the toast. The message text is kept so the fade-out still reads.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
