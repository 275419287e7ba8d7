pub mod bin_list_viewmodel;
pub mod map_viewmodel;
pub mod route_viewmodel;
pub mod detection_viewmodel;
pub mod prediction_viewmodel;
pub mod dashboard_view;
pub mod dashboard_viewmodel;

pub use bin_list_viewmodel::{BinCard, BinListModel, BinListViewModel, BinOption, BinStats};
pub use map_viewmodel::{MapViewModel, RouteOverlay};
pub use route_viewmodel::{RouteListModel, RouteStopRow, RouteViewModel};
pub use detection_viewmodel::{DetectionDisplay, DetectionViewModel, PreconditionError};
pub use prediction_viewmodel::{PredictionRow, PredictionViewModel};
pub use dashboard_view::DashboardView;
pub use dashboard_viewmodel::{DashboardError, DashboardViewModel, PollOutcome};
