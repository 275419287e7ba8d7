// ============================================================================
// DOM DASHBOARD VIEW - Implementación de DashboardView sobre la plantilla HTML
// ============================================================================
// Un fallo de renderizado se registra y no interrumpe el flujo del ViewModel
// ============================================================================

use wasm_bindgen::JsValue;
use crate::dom::alert;
use crate::models::PipelineStatus;
use crate::viewmodels::{BinListModel, DashboardView, DetectionDisplay, PredictionRow, RouteListModel};
use super::*;

pub struct DomDashboardView;

fn report(what: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::error!("❌ Error renderizando {}: {:?}", what, e);
    }
}

impl DashboardView for DomDashboardView {
    fn render_bin_list(&self, model: &BinListModel) {
        report("lista de contenedores", render_bin_list(model));
    }

    fn render_last_updated(&self, time: &str) {
        render_last_updated(time);
    }

    fn show_notice(&self, message: &str) {
        alert(message);
    }

    fn show_detection_pending(&self) {
        report("detección pendiente", render_detection_pending());
    }

    fn show_detection_result(&self, display: &DetectionDisplay) {
        report("resultado de detección", render_detection_result(display));
    }

    fn show_detection_error(&self, message: &str) {
        report("error de detección", render_detection_error(message));
    }

    fn render_alert_count(&self, total: u64) {
        render_alert_count(total);
    }

    fn show_route_pending(&self) {
        report("ruta pendiente", render_route_pending());
    }

    fn render_route(&self, model: &RouteListModel) {
        report("lista de paradas", render_route_list(model));
    }

    fn render_predictions(&self, rows: &[PredictionRow]) {
        report("predicciones", render_predictions(rows));
    }

    fn render_pipeline_status(&self, status: &PipelineStatus) {
        report("estado del pipeline", render_pipeline_status(status));
    }
}
