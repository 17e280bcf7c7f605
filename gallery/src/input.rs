//! Input model: touch points, swipe classification, and key commands.
//!
//! `InputState` is the touch gesture being tracked between touch-start and
//! touch-end. On release the displacement is classified into a [`Swipe`]
//! or discarded as scrolling. Keys are mapped to [`KeyCommand`]s by the
//! browser key name.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::SWIPE_THRESHOLD_PX;

/// A point in client (CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A recognized horizontal swipe, named by the navigation it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right: go back one panel.
    Previous,
    /// Finger moved left: advance one panel.
    Next,
}

/// Classify a touch displacement.
///
/// A swipe needs horizontal travel that dominates vertical travel and
/// exceeds [`SWIPE_THRESHOLD_PX`]. Anything else is treated as scrolling.
#[must_use]
pub fn classify_swipe(dx: f64, dy: f64) -> Option<Swipe> {
    if dx.abs() > dy.abs() && dx.abs() > SWIPE_THRESHOLD_PX {
        if dx > 0.0 { Some(Swipe::Previous) } else { Some(Swipe::Next) }
    } else {
        None
    }
}

/// Touch gesture state between touch-start and touch-end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No touch in progress.
    #[default]
    Idle,
    /// A finger is down; `start` is where it landed.
    Touching { start: Point },
}

impl InputState {
    /// Record the start of a touch. A new start replaces any unfinished one.
    pub fn touch_start(&mut self, at: Point) {
        *self = Self::Touching { start: at };
    }

    /// Finish the touch and classify it. Always returns to `Idle`.
    pub fn touch_end(&mut self, at: Point) -> Option<Swipe> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Touching { start } => classify_swipe(at.x - start.x, at.y - start.y),
        }
    }
}

/// Keyboard commands understood while the modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Previous,
    Next,
    Close,
}

impl KeyCommand {
    /// Map a browser `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}
