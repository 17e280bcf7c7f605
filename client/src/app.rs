//! Root application component and the SSR HTML shell.

use gallery::toast::ToastState;
use gallery::viewer::ViewerCore;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};

use crate::components::{
    contact_card::ContactCard, panel_grid::PanelGrid, panel_modal::PanelModal, toast::Toast,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the viewer and toast state as context; every component reads
/// them from there instead of from page-global variables.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let viewer = RwSignal::new(ViewerCore::new());
    let toast = RwSignal::new(ToastState::new());

    provide_context(viewer);
    provide_context(toast);

    view! {
        <Title text="Career Comic"/>

        <main class="gallery">
            <PanelGrid/>
            <ContactCard/>
        </main>
        <PanelModal/>
        <Toast/>
    }
}
