// ============================================================================
// DETECTION PANEL VIEW - Resultado de la detección y preview de imagen
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;
use crate::dom::{append_child, clear_children, get_element_by_id, set_visible, ElementBuilder};
use crate::viewmodels::DetectionDisplay;
use crate::viewmodels::detection_viewmodel::DETECTION_PENDING_NOTICE;

pub const DETECT_RESULT_ID: &str = "detect-result";
pub const PREVIEW_ID: &str = "preview";

fn result_box() -> Option<web_sys::Element> {
    let element = get_element_by_id(DETECT_RESULT_ID)?;
    if let Err(e) = set_visible(&element, true) {
        log::warn!("⚠️ No se pudo mostrar #{}: {:?}", DETECT_RESULT_ID, e);
    }
    Some(element)
}

fn render_text(text: &str) -> Result<(), JsValue> {
    if let Some(element) = result_box() {
        clear_children(&element);
        crate::dom::set_text_content(&element, text);
    }
    Ok(())
}

pub fn render_detection_pending() -> Result<(), JsValue> {
    render_text(DETECTION_PENDING_NOTICE)
}

pub fn render_detection_error(message: &str) -> Result<(), JsValue> {
    render_text(message)
}

pub fn render_detection_result(display: &DetectionDisplay) -> Result<(), JsValue> {
    let Some(element) = result_box() else {
        return Ok(());
    };
    clear_children(&element);

    let status = ElementBuilder::new("div")?
        .style(&format!("color:{}", display.color))?
        .text(&display.status)
        .build();
    let fill = ElementBuilder::new("div")?
        .style("font-size:18px;font-weight:bold;margin:5px 0;")?
        .text(&display.fill_text)
        .build();
    let action = ElementBuilder::new("div")?
        .style("color:#9ca3af;")?
        .text(&display.action)
        .build();

    append_child(&element, &status)?;
    append_child(&element, &fill)?;
    append_child(&element, &action)
}

/// Muestra la imagen leída localmente
pub fn render_preview(data_url: &str) -> Result<(), JsValue> {
    let Some(element) = get_element_by_id(PREVIEW_ID) else {
        return Ok(());
    };
    let image: HtmlImageElement = element
        .dyn_into()
        .map_err(|_| JsValue::from_str("#preview is not an <img>"))?;
    image.set_src(data_url);
    set_visible(&image, true)
}
