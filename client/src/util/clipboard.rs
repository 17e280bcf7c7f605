//! Browser bindings for the contact copy utility.
//!
//! `BrowserClipboard` wraps `navigator.clipboard`; `TextareaSurface` mounts
//! a hidden `<textarea>` and runs `document.execCommand("copy")`. Strategy
//! selection and region cleanup live in `gallery::copy`.

use gallery::consts::CONTACT_EMAIL;
use gallery::toast::ToastState;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use gallery::copy::{AsyncClipboard, CopyError, CopyOutcome, SelectionSurface};
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Copy the contact email and report the outcome as a toast.
pub fn copy_email(toast: RwSignal<ToastState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let outcome = copy_with_browser(CONTACT_EMAIL).await;
            crate::state::toast::notify(toast, outcome.message());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toast, CONTACT_EMAIL);
    }
}

#[cfg(feature = "hydrate")]
async fn copy_with_browser(text: &str) -> CopyOutcome {
    let Some(window) = web_sys::window() else {
        log::warn!("copy: no window");
        return CopyOutcome::Manual { text: text.to_owned() };
    };
    let secure_context = window.is_secure_context();
    let clipboard = window.navigator().clipboard().map(BrowserClipboard);
    let surface = TextareaSurface::new(&window);
    gallery::copy::copy_text(clipboard.as_ref(), secure_context, &surface, text).await
}

#[cfg(feature = "hydrate")]
struct BrowserClipboard(web_sys::Clipboard);

#[cfg(feature = "hydrate")]
impl AsyncClipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), CopyError> {
        wasm_bindgen_futures::JsFuture::from(self.0.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| CopyError::ClipboardRejected(format!("{e:?}")))
    }
}

#[cfg(feature = "hydrate")]
struct TextareaSurface {
    document: Option<web_sys::HtmlDocument>,
}

#[cfg(feature = "hydrate")]
impl TextareaSurface {
    fn new(window: &web_sys::Window) -> Self {
        let document = window.document().and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok());
        Self { document }
    }

    fn document(&self) -> Result<&web_sys::HtmlDocument, CopyError> {
        self.document
            .as_ref()
            .ok_or_else(|| CopyError::RegionUnavailable("no html document".into()))
    }
}

#[cfg(feature = "hydrate")]
impl SelectionSurface for TextareaSurface {
    type Region = web_sys::HtmlTextAreaElement;

    fn mount(&self, text: &str) -> Result<Self::Region, CopyError> {
        let unavailable = |e: wasm_bindgen::JsValue| CopyError::RegionUnavailable(format!("{e:?}"));
        let document = self.document()?;
        let body = document
            .body()
            .ok_or_else(|| CopyError::RegionUnavailable("no body".into()))?;
        let area = document
            .create_element("textarea")
            .map_err(unavailable)?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| CopyError::RegionUnavailable("created element is not a textarea".into()))?;
        area.set_value(text);
        let style = area.style();
        style.set_property("position", "fixed").map_err(unavailable)?;
        style.set_property("left", "-999999px").map_err(unavailable)?;
        style.set_property("top", "-999999px").map_err(unavailable)?;
        body.append_child(&area).map_err(unavailable)?;
        Ok(area)
    }

    fn select_and_copy(&self, region: &Self::Region) -> Result<(), CopyError> {
        let failed = |e: wasm_bindgen::JsValue| CopyError::CopyCommandFailed(format!("{e:?}"));
        region.focus().map_err(failed)?;
        region.select();
        // execCommand reports `false` on some browsers even when the copy
        // went through; only a thrown exception counts as failure.
        self.document()?.exec_command("copy").map(|_| ()).map_err(failed)
    }

    fn remove(&self, region: &Self::Region) {
        region.remove();
    }
}
