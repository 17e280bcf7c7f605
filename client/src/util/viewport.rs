//! Viewport width, used for the mobile details layout.

/// Current `window.innerWidth` in CSS pixels.
///
/// Returns `f64::INFINITY` when there is no window, which reads as a
/// desktop-sized viewport.
pub fn width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::INFINITY)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        f64::INFINITY
    }
}
