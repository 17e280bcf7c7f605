//! Grid of panel thumbnails; clicking one opens the modal on that panel.

use gallery::catalog::{self, PanelId};
use gallery::viewer::ViewerCore;
use leptos::prelude::*;

use crate::state::viewer::dispatch;

#[component]
pub fn PanelGrid() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerCore>>();

    view! {
        <section class="comic-grid">
            {PanelId::all()
                .map(|id| {
                    let title = catalog::panel(id).title;
                    view! {
                        <button
                            class="comic-panel"
                            title=title
                            on:click=move |_| {
                                dispatch(viewer, |v| v.open(id));
                            }
                        >
                            <img src=catalog::image_path(id) alt=catalog::image_alt(id) loading="lazy"/>
                        </button>
                    }
                })
                .collect_view()}
        </section>
    }
}
