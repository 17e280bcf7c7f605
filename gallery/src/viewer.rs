//! Panel viewer state machine.
//!
//! `ViewerCore` owns the only mutable state of the widget: which panel is
//! current, whether the modal is open, and the mobile details toggle. Every
//! transition returns the [`Action`]s the host must apply (scroll locking,
//! default suppression, re-render). What the modal shows is never written
//! piecemeal; [`render`] projects the whole state into a [`ModalView`] after
//! each transition.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::catalog::{self, PanelId};
use crate::consts::{DETAILS_HIDE_LABEL, DETAILS_VIEW_LABEL, MOBILE_BREAKPOINT_PX, PANEL_COUNT};
use crate::input::{InputState, KeyCommand, Point, Swipe};

/// Actions returned from viewer operations for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The modal content changed; re-project with [`render`].
    Render(PanelId),
    /// Disable background page scrolling.
    LockScroll,
    /// Restore background page scrolling.
    UnlockScroll,
    /// Suppress the browser's default handling of the current event.
    PreventDefault,
}

/// Collapsible details section shown on narrow viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetailsState {
    /// Whether the toggle button is shown at all.
    pub toggle_visible: bool,
    /// Whether the details section is expanded.
    pub expanded: bool,
}

impl DetailsState {
    #[must_use]
    pub fn label(self) -> &'static str {
        if self.expanded { DETAILS_HIDE_LABEL } else { DETAILS_VIEW_LABEL }
    }
}

/// Viewer state. One instance per page, owned by the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerCore {
    current: PanelId,
    open: bool,
    details: DetailsState,
    viewport_width: f64,
    input: InputState,
}

impl Default for ViewerCore {
    fn default() -> Self {
        Self {
            current: PanelId::FIRST,
            open: false,
            details: DetailsState::default(),
            viewport_width: f64::INFINITY,
            input: InputState::Idle,
        }
    }
}

impl ViewerCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    #[must_use]
    pub fn current(&self) -> PanelId {
        self.current
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn details(&self) -> DetailsState {
        self.details
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= MOBILE_BREAKPOINT_PX
    }

    // --- Modal lifecycle ---

    /// Show the modal on `id`. On narrow viewports the details toggle is
    /// shown and the details section starts collapsed.
    pub fn open(&mut self, id: PanelId) -> Vec<Action> {
        self.current = id;
        self.open = true;
        if self.is_mobile() {
            self.details = DetailsState { toggle_visible: true, expanded: false };
        } else {
            self.details.toggle_visible = false;
        }
        vec![Action::LockScroll, Action::Render(id)]
    }

    /// Hide the modal. Closing a closed modal does nothing.
    pub fn close(&mut self) -> Vec<Action> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        self.input = InputState::Idle;
        vec![Action::UnlockScroll]
    }

    // --- Navigation ---

    /// Advance one panel; a no-op on the last panel.
    pub fn next(&mut self) -> Vec<Action> {
        self.step(self.current.next())
    }

    /// Go back one panel; a no-op on the first panel.
    pub fn previous(&mut self) -> Vec<Action> {
        self.step(self.current.previous())
    }

    fn step(&mut self, target: Option<PanelId>) -> Vec<Action> {
        match target {
            Some(id) => {
                self.current = id;
                vec![Action::Render(id)]
            }
            None => Vec::new(),
        }
    }

    // --- Input events ---

    /// Handle a key press. Only arrows and Escape are handled, and only
    /// while the modal is open.
    pub fn on_key_down(&mut self, key: &str) -> Vec<Action> {
        if !self.open {
            return Vec::new();
        }
        let Some(command) = KeyCommand::from_key(key) else {
            return Vec::new();
        };
        let mut actions = vec![Action::PreventDefault];
        actions.extend(match command {
            KeyCommand::Previous => self.previous(),
            KeyCommand::Next => self.next(),
            KeyCommand::Close => self.close(),
        });
        actions
    }

    pub fn on_touch_start(&mut self, at: Point) {
        self.input.touch_start(at);
    }

    /// Finish a touch; a horizontal swipe navigates.
    pub fn on_touch_end(&mut self, at: Point) -> Vec<Action> {
        match self.input.touch_end(at) {
            Some(Swipe::Previous) => self.previous(),
            Some(Swipe::Next) => self.next(),
            None => Vec::new(),
        }
    }

    /// Handle a click on the modal. Only clicks on the backdrop itself close it.
    pub fn on_backdrop_click(&mut self, target_is_backdrop: bool) -> Vec<Action> {
        if target_is_backdrop { self.close() } else { Vec::new() }
    }

    /// Record the viewport width, reported on load and on every resize.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Flip the mobile details section.
    pub fn toggle_details(&mut self) -> Vec<Action> {
        self.details.expanded = !self.details.expanded;
        vec![Action::Render(self.current)]
    }
}

/// Everything the modal displays, projected from [`ViewerCore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub panel: PanelId,
    pub image_src: String,
    pub image_alt: String,
    pub counter: String,
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: Vec<&'static str>,
    pub skills: Vec<&'static str>,
    pub details: DetailsState,
    pub details_label: &'static str,
}

/// Project viewer state into modal content. `None` while the modal is closed.
#[must_use]
pub fn render(state: &ViewerCore) -> Option<ModalView> {
    if !state.open {
        return None;
    }
    let id = state.current;
    let data = catalog::panel(id);
    Some(ModalView {
        panel: id,
        image_src: catalog::image_path(id),
        image_alt: catalog::image_alt(id),
        counter: format!("{id} / {PANEL_COUNT}"),
        title: data.title,
        company: data.company,
        period: data.period,
        description: data.description,
        achievements: data.achievements.to_vec(),
        skills: data.skills.to_vec(),
        details: state.details,
        details_label: state.details.label(),
    })
}
