//! Contact card with the copy-email button.

use gallery::consts::CONTACT_EMAIL;
use gallery::toast::ToastState;
use leptos::prelude::*;

use crate::util::clipboard::copy_email;

#[component]
pub fn ContactCard() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    view! {
        <section class="contact">
            <h2>"Get in touch"</h2>
            <p class="contact__email">{CONTACT_EMAIL}</p>
            <button class="contact__copy" on:click=move |_| copy_email(toast)>
                "Copy Email"
            </button>
        </section>
    }
}
