//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the gallery page and the panel modal while reading and
//! writing the viewer/toast signals provided by `App` as context.

pub mod contact_card;
pub mod panel_details;
pub mod panel_grid;
pub mod panel_modal;
pub mod toast;
