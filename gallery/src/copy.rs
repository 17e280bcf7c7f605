//! Copy-to-clipboard with a selection fallback.
//!
//! DESIGN
//! ======
//! Two strategies, chosen per call from the browser's capabilities:
//!
//! - `AsyncClipboard`: the async Clipboard API, only offered in secure
//!   contexts. A rejected write drops through to the fallback.
//! - `SelectionFallback`: mount an off-screen text region, select it, and
//!   run the legacy copy command. The region is a scoped resource: it is
//!   removed when the guard drops, whether the copy succeeded or not.
//!
//! Browser specifics live behind [`AsyncClipboard`] and [`SelectionSurface`]
//! so the flow runs natively in tests.

#[cfg(test)]
#[path = "copy_test.rs"]
mod copy_test;

use std::future::Future;

use crate::consts::{COPY_MANUAL_PREFIX, COPY_SUCCESS_MESSAGE};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CopyError {
    #[error("clipboard write rejected: {0}")]
    ClipboardRejected(String),
    #[error("selection region unavailable: {0}")]
    RegionUnavailable(String),
    #[error("copy command failed: {0}")]
    CopyCommandFailed(String),
}

/// What the browser offers at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// `navigator.clipboard` is present.
    pub clipboard: bool,
    /// The page runs in a secure context.
    pub secure_context: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStrategy {
    AsyncClipboard,
    SelectionFallback,
}

impl CopyStrategy {
    #[must_use]
    pub fn select(caps: Capabilities) -> Self {
        if caps.clipboard && caps.secure_context { Self::AsyncClipboard } else { Self::SelectionFallback }
    }
}

/// Terminal result of a copy, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Nothing worked; the user has to copy `text` by hand.
    Manual { text: String },
}

impl CopyOutcome {
    /// Toast text for this outcome.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Copied => COPY_SUCCESS_MESSAGE.to_owned(),
            Self::Manual { text } => format!("{COPY_MANUAL_PREFIX}{text}"),
        }
    }
}

/// Async clipboard write (`navigator.clipboard.writeText`).
pub trait AsyncClipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), CopyError>>;
}

/// Host for temporary selectable text regions (`<textarea>` + `execCommand`).
pub trait SelectionSurface {
    type Region;

    /// Create an off-screen region holding `text`.
    fn mount(&self, text: &str) -> Result<Self::Region, CopyError>;

    /// Focus and select the region, then run the copy command.
    fn select_and_copy(&self, region: &Self::Region) -> Result<(), CopyError>;

    /// Detach the region. Must be safe to call after a failed copy.
    fn remove(&self, region: &Self::Region);
}

/// A mounted region that is removed from its surface on drop.
pub struct MountedRegion<'a, S: SelectionSurface> {
    surface: &'a S,
    region: S::Region,
}

impl<'a, S: SelectionSurface> MountedRegion<'a, S> {
    /// Mount `text` on `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError::RegionUnavailable`] when the surface cannot
    /// create the region.
    pub fn mount(surface: &'a S, text: &str) -> Result<Self, CopyError> {
        let region = surface.mount(text)?;
        Ok(Self { surface, region })
    }

    /// Select the region's text and copy it.
    ///
    /// # Errors
    ///
    /// Returns [`CopyError::CopyCommandFailed`] when the copy command throws.
    pub fn copy(&self) -> Result<(), CopyError> {
        self.surface.select_and_copy(&self.region)
    }
}

impl<S: SelectionSurface> Drop for MountedRegion<'_, S> {
    fn drop(&mut self) {
        self.surface.remove(&self.region);
    }
}

/// Copy via a temporary selection region.
pub fn fallback_copy<S: SelectionSurface>(surface: &S, text: &str) -> CopyOutcome {
    let result = MountedRegion::mount(surface, text).and_then(|region| region.copy());
    match result {
        Ok(()) => CopyOutcome::Copied,
        Err(err) => {
            log::warn!("selection copy failed: {err}");
            CopyOutcome::Manual { text: text.to_owned() }
        }
    }
}

/// Copy `text`, choosing the strategy from what the browser offers.
///
/// Never fails silently: the outcome is either `Copied` or `Manual` with
/// the text to copy by hand.
pub async fn copy_text<C, S>(clipboard: Option<&C>, secure_context: bool, surface: &S, text: &str) -> CopyOutcome
where
    C: AsyncClipboard,
    S: SelectionSurface,
{
    let caps = Capabilities { clipboard: clipboard.is_some(), secure_context };
    match (CopyStrategy::select(caps), clipboard) {
        (CopyStrategy::AsyncClipboard, Some(clipboard)) => match clipboard.write_text(text).await {
            Ok(()) => CopyOutcome::Copied,
            Err(err) => {
                log::debug!("async clipboard unavailable, using selection copy: {err}");
                fallback_copy(surface, text)
            }
        },
        _ => fallback_copy(surface, text),
    }
}
