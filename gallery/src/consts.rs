//! Shared constants for the gallery crate.

// ── Catalog ─────────────────────────────────────────────────────

/// Number of panels in the catalog.
pub const PANEL_COUNT: u8 = 6;

/// Directory panel images are served from, relative to the page.
pub const IMAGES_DIR: &str = "images";

// ── Input ───────────────────────────────────────────────────────

/// Minimum horizontal travel, in CSS pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Viewports at or below this width get the collapsible details section.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// ── Details toggle ──────────────────────────────────────────────

pub const DETAILS_VIEW_LABEL: &str = "📋 View Details";
pub const DETAILS_HIDE_LABEL: &str = "📋 Hide Details";

// ── Contact ─────────────────────────────────────────────────────

/// Address copied by the contact button.
pub const CONTACT_EMAIL: &str = "andrej.krmpotic@gmail.com";

pub const COPY_SUCCESS_MESSAGE: &str = "Email copied to clipboard!";

/// Prefix of the manual-copy toast; the email is appended.
pub const COPY_MANUAL_PREFIX: &str = "Failed to copy email. Please copy manually: ";

/// How long a toast stays visible, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 3000;
