//! Warm the browser cache with every panel image.

#[cfg(test)]
#[path = "preload_test.rs"]
mod preload_test;

/// Start fetching every panel image. Returns how many requests were issued.
pub fn preload_panel_images() -> usize {
    let paths = gallery::catalog::image_paths();
    #[cfg(feature = "hydrate")]
    {
        let mut issued = 0;
        for path in &paths {
            match web_sys::HtmlImageElement::new() {
                Ok(img) => {
                    img.set_src(path);
                    issued += 1;
                }
                Err(e) => log::warn!("preload {path}: {e:?}"),
            }
        }
        log::debug!("preloading {issued} panel images");
        issued
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = paths;
        0
    }
}
