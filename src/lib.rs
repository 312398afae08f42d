//! # quiz-header
//!
//! WASM glue for the quiz site's server-rendered pages. Reflects the session
//! stored by the login flow into the header and hero, binds navigation on the
//! call-to-action buttons, builds the user dropdown and shows toasts.
//!
//! All page logic is written against the `dom::View`, `util` and
//! `state::session` boundaries; the `hydrate` feature supplies browser
//! implementations and the `run` entry point.

pub mod app;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

pub use app::{HeaderContext, on_page_load};
pub use config::HeaderConfig;
pub use error::HeaderError;

/// Browser entry point, run when the module is instantiated.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run() {
    app::browser::start();
}
