//! Toast notification surface.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use gallery::toast::ToastState;
use leptos::prelude::*;

/// CSS class for the toast element.
#[must_use]
pub fn toast_class(visible: bool) -> &'static str {
    if visible { "toast show" } else { "toast" }
}

#[component]
pub fn Toast() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    let class = move || toast.with(|t| toast_class(t.is_visible()));
    let message = move || toast.with(|t| t.message().to_owned());

    view! {
        <div id="toast" class=class role="status" aria-live="polite">
            {message}
        </div>
    }
}
