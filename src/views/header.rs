// ============================================================================
// HEADER VIEW - Contador de alertas, hora de refresco y badge del pipeline
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{get_element_by_id, set_attribute, set_text_by_id, set_text_content};
use crate::models::PipelineStatus;

pub fn render_alert_count(total: u64) {
    set_text_by_id("alerts-sent", &total.to_string());
}

pub fn render_last_updated(text: &str) {
    set_text_by_id("last-updated", text);
}

pub fn render_pipeline_status(status: &PipelineStatus) -> Result<(), JsValue> {
    let Some(badge) = get_element_by_id("pipeline-status") else {
        return Ok(());
    };
    set_text_content(&badge, &status.badge_text());
    if let Some(message) = &status.message {
        set_attribute(&badge, "title", message)?;
    }
    badge.set_class_name(if status.is_running() {
        "pipeline-badge pipeline-badge--live"
    } else {
        "pipeline-badge pipeline-badge--idle"
    });
    Ok(())
}
