//! Browser helpers shared across client components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper isolates one browser capability behind a plain function so
//! components stay declarative. Outside the `hydrate` build (SSR, native
//! tests) every helper degrades to a no-op or a neutral value.

pub mod clipboard;
pub mod preload;
pub mod scroll_lock;
pub mod touch;
pub mod viewport;
