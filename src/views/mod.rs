// ============================================================================
// VIEWS - Funciones de renderizado DOM (sin lógica)
// ============================================================================

pub mod bin_card;
pub mod bin_list;
pub mod route_list;
pub mod detection_panel;
pub mod predictions;
pub mod header;
pub mod dom_view;

pub use bin_card::render_bin_card;
pub use bin_list::render_bin_list;
pub use route_list::{render_route_list, render_route_pending};
pub use detection_panel::{render_detection_error, render_detection_pending, render_detection_result, render_preview};
pub use predictions::render_predictions;
pub use header::{render_alert_count, render_last_updated, render_pipeline_status};
pub use dom_view::DomDashboardView;
