pub mod bin;
pub mod severity;
pub mod detection;
pub mod alert;
pub mod route;
pub mod prediction;
pub mod pipeline;

pub use bin::{Bin, BinId, Coordinates};
pub use severity::SeverityTier;
pub use detection::{DetectionResult, ManualUpdateRequest, ManualUpdateResponse};
pub use alert::{AlertDetail, AlertResponse, DeliveryResult};
pub use route::{OptimizedRoute, RouteResponse, RouteStop, StopKind};
pub use prediction::{OverflowPrediction, Urgency};
pub use pipeline::PipelineStatus;
