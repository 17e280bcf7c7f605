//! Panel viewer core for the portfolio gallery.
//!
//! This crate holds everything about the panel modal that does not need a
//! browser: the static panel catalog, the viewer state machine, translation
//! of raw touch/keyboard input into navigation, the clipboard copy strategy,
//! and toast state. The `client` crate owns the DOM and applies the
//! [`viewer::Action`]s this crate hands back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`viewer`] | `ViewerCore` state machine and the `render` projection |
//! | [`catalog`] | Static panel data and asset path helpers |
//! | [`input`] | Touch gesture tracking and key commands |
//! | [`copy`] | Copy strategy selection and the selection-copy fallback |
//! | [`toast`] | Transient notification state |
//! | [`consts`] | Shared constants (panel count, thresholds, strings) |

pub mod catalog;
pub mod consts;
pub mod copy;
pub mod input;
pub mod toast;
pub mod viewer;
