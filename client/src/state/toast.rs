//! Show a toast and schedule its dismissal.

use gallery::toast::ToastState;
use leptos::prelude::*;

/// Show `message` and hide the toast after the standard delay.
///
/// The hide timer is fire-and-forget. A timer from an earlier call can hide
/// a message shown by a later one.
pub fn notify(toast: RwSignal<ToastState>, message: String) {
    log::info!("toast: {message}");
    toast.update(|t| t.show(message));
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(gallery::consts::TOAST_DURATION_MS, move || {
            toast.update(ToastState::hide);
        })
        .forget();
    }
}
