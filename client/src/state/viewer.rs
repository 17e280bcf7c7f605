//! Dispatch viewer operations and apply their host actions.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use gallery::catalog::PanelId;
use gallery::viewer::{Action, ViewerCore};
use leptos::prelude::*;

use crate::util::scroll_lock;

/// Host-side effects collected from a batch of viewer actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostEffects {
    /// `Some(true)` to lock page scrolling, `Some(false)` to restore it.
    pub scroll_locked: Option<bool>,
    /// The triggering event's default action must be suppressed.
    pub prevent_default: bool,
    /// Last panel the batch asked to render.
    pub rendered: Option<PanelId>,
}

/// Fold actions into the effects the host must apply. Later actions win.
#[must_use]
pub fn host_effects(actions: &[Action]) -> HostEffects {
    actions.iter().fold(HostEffects::default(), |mut fx, action| {
        match action {
            Action::Render(id) => fx.rendered = Some(*id),
            Action::LockScroll => fx.scroll_locked = Some(true),
            Action::UnlockScroll => fx.scroll_locked = Some(false),
            Action::PreventDefault => fx.prevent_default = true,
        }
        fx
    })
}

/// Run `op` against the viewer signal and apply the resulting effects.
///
/// Re-rendering is implicit: components read the projection from the
/// signal, so updating it is enough. Returns the effects so event handlers
/// can suppress defaults.
pub fn dispatch(viewer: RwSignal<ViewerCore>, op: impl FnOnce(&mut ViewerCore) -> Vec<Action>) -> HostEffects {
    let actions = viewer.try_update(op).unwrap_or_default();
    let effects = host_effects(&actions);
    if let Some(locked) = effects.scroll_locked {
        scroll_lock::set_locked(locked);
    }
    if let Some(id) = effects.rendered {
        log::debug!("panel {id} rendered");
    }
    effects
}
