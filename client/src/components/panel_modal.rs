//! Panel modal: image, counter, navigation, and the details section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything shown here is read from `gallery::viewer::render` over the
//! viewer signal. Event handlers only dispatch viewer operations; they never
//! touch the displayed content directly.

#[cfg(test)]
#[path = "panel_modal_test.rs"]
mod panel_modal_test;

use gallery::viewer::{ModalView, ViewerCore, render};
use leptos::prelude::*;

use crate::components::panel_details::PanelDetails;
use crate::state::viewer::dispatch;
use crate::util::{preload, touch, viewport};

/// `display` value for the modal container.
#[must_use]
pub fn modal_display(open: bool) -> &'static str {
    if open { "block" } else { "none" }
}

/// `display` value for the mobile details toggle.
#[must_use]
pub fn toggle_display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

/// Read one field of the projected view, or an empty string while closed.
fn field(view: Memo<Option<ModalView>>, get: fn(&ModalView) -> String) -> impl Fn() -> String + Copy {
    move || view.with(|v| v.as_ref().map(get).unwrap_or_default())
}

#[component]
pub fn PanelModal() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerCore>>();
    let view = Memo::new(move |_| viewer.with(render));

    Effect::new(move || {
        viewer.update_untracked(|v| v.set_viewport_width(viewport::width()));
        preload::preload_panel_images();
    });

    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        let key = ev.key();
        if dispatch(viewer, |v| v.on_key_down(&key)).prevent_default {
            ev.prevent_default();
        }
    });
    let resize = window_event_listener(leptos::ev::resize, move |_| {
        viewer.update_untracked(|v| v.set_viewport_width(viewport::width()));
    });
    on_cleanup(move || {
        keydown.remove();
        resize.remove();
    });

    let on_backdrop_click = move |ev: leptos::ev::MouseEvent| {
        let on_backdrop = ev.target() == ev.current_target();
        dispatch(viewer, |v| v.on_backdrop_click(on_backdrop));
    };
    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        if let Some(at) = touch::first_touch(&ev) {
            viewer.update_untracked(|v| v.on_touch_start(at));
        }
    };
    let on_touch_end = move |ev: leptos::ev::TouchEvent| {
        if let Some(at) = touch::first_changed_touch(&ev) {
            dispatch(viewer, |v| v.on_touch_end(at));
        }
    };
    let on_close = move |_| {
        dispatch(viewer, ViewerCore::close);
    };
    let on_prev = move |_| {
        dispatch(viewer, ViewerCore::previous);
    };
    let on_next = move |_| {
        dispatch(viewer, ViewerCore::next);
    };
    let on_toggle = move |_| {
        dispatch(viewer, ViewerCore::toggle_details);
    };

    let display = move || modal_display(view.with(Option::is_some));
    let image_src = field(view, |v| v.image_src.clone());
    let image_alt = field(view, |v| v.image_alt.clone());
    let counter = field(view, |v| v.counter.clone());
    let toggle_label = field(view, |v| v.details_label.to_owned());
    let toggle_style =
        move || toggle_display(view.with(|v| v.as_ref().is_some_and(|v| v.details.toggle_visible)));

    view! {
        <div
            id="modal"
            class="modal"
            style:display=display
            on:click=on_backdrop_click
            on:touchstart=on_touch_start
            on:touchend=on_touch_end
        >
            <div class="modal-content">
                <button class="close" on:click=on_close title="Close">"×"</button>
                <div class="modal-image-section">
                    <button class="nav-btn prev-btn" on:click=on_prev title="Previous panel">"‹"</button>
                    <img id="modalImage" src=image_src alt=image_alt/>
                    <button class="nav-btn next-btn" on:click=on_next title="Next panel">"›"</button>
                    <div id="panelCounter" class="panel-counter">{counter}</div>
                </div>
                <button
                    id="toggleDetails"
                    class="toggle-details-btn"
                    style:display=toggle_style
                    on:click=on_toggle
                >
                    {toggle_label}
                </button>
                <PanelDetails view=view/>
            </div>
        </div>
    }
}
