//! scatter3d-viewer - interactive 3-D scatter of precomputed embeddings
//!
//! Loads `[{x, y, z, name}, ...]` from a static JSON file and:
//! - renders it as an orbitable 3-D scatter (color = depth)
//! - shows the point label on hover
//! - opens the point's image when it is clicked
//!
//! `core` and `scatter` are platform-agnostic. The browser app is built with
//! `--features wasm`, the `scatter-cli` binary with `--features cli`.

pub mod core;
pub mod load_state;
pub mod scatter;
pub mod session;

#[cfg(feature = "wasm")]
mod theme;

#[cfg(all(feature = "cli", not(target_arch = "wasm32")))]
pub mod transport_native;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod app;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod detail_wasm;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod transport_wasm;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
use wasm_bindgen::prelude::*;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
#[wasm_bindgen(start)]
pub fn main() {
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
            .get_element_by_id("canvas")
            .expect("no canvas element")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("not a canvas element");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    Ok(Box::new(app::ViewerApp::new(
                        cc,
                        crate::core::ViewerConfig::default(),
                    )))
                }),
            )
            .await
            .expect("Failed to start eframe");
    });
}
