//! Popup image viewer for clicked points

use tracing::{error, info};
use wasm_bindgen::JsValue;

use crate::core::{DetailRequest, DetailView};

const POPUP_NAME: &str = "Image";
const POPUP_SIZE: u32 = 300;

/// Opens (or reuses) a small window showing the point's image
pub struct PopupDetailView;

impl PopupDetailView {
    fn open(request: &DetailRequest) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let features = format!("width={POPUP_SIZE},height={POPUP_SIZE}");
        let popup = window
            .open_with_url_and_target_and_features("", POPUP_NAME, &features)?
            .ok_or_else(|| JsValue::from_str("popup blocked"))?;

        let document = popup
            .document()
            .ok_or_else(|| JsValue::from_str("popup has no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("popup has no body"))?;

        let size = POPUP_SIZE.to_string();
        let img = document.create_element("img")?;
        img.set_attribute("src", &request.asset)?;
        img.set_attribute("alt", &request.label)?;
        img.set_attribute("width", &size)?;
        img.set_attribute("height", &size)?;
        img.set_attribute(
            "onerror",
            &format!(
                "console.error('Failed to load image: ' + {})",
                js_string_literal(&request.label)
            ),
        )?;

        // a reused popup keeps its previous image otherwise
        body.set_inner_html("");
        body.append_child(&img)?;
        Ok(())
    }
}

impl DetailView for PopupDetailView {
    fn show_detail(&mut self, request: &DetailRequest) {
        info!(label = %request.label, asset = %request.asset, "Opening image popup");
        if let Err(e) = Self::open(request) {
            error!(?e, label = %request.label, "Failed to open image popup");
        }
    }
}

/// Quote `s` as a JS string literal
fn js_string_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}
