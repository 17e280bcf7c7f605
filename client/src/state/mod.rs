//! Reactive state glue.
//!
//! DESIGN
//! ======
//! The state types themselves (`ViewerCore`, `ToastState`) live in the
//! `gallery` crate. This module holds the signal-side helpers: running a
//! viewer operation and applying the actions it returns, and showing a
//! toast with its timed dismissal.

pub mod toast;
pub mod viewer;
