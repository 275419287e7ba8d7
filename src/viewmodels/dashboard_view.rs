use crate::models::PipelineStatus;
use super::{BinListModel, DetectionDisplay, PredictionRow, RouteListModel};

/// Superficies de texto del panel. La implementación web escribe en el DOM;
/// los tests graban las llamadas.
pub trait DashboardView {
    /// Tarjetas + estadísticas + opciones del selector (reemplazo completo)
    fn render_bin_list(&self, model: &BinListModel);

    fn render_last_updated(&self, time: &str);

    /// Aviso bloqueante (window.alert en web)
    fn show_notice(&self, message: &str);

    fn show_detection_pending(&self);

    fn show_detection_result(&self, display: &DetectionDisplay);

    fn show_detection_error(&self, message: &str);

    fn render_alert_count(&self, total: u64);

    fn show_route_pending(&self);

    fn render_route(&self, model: &RouteListModel);

    fn render_predictions(&self, rows: &[PredictionRow]);

    fn render_pipeline_status(&self, status: &PipelineStatus);
}
