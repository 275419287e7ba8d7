// ============================================================================
// DASHBOARD API - Contrato con el backend (request/response)
// ============================================================================

use async_trait::async_trait;
use crate::models::{
    AlertResponse, Bin, BinId, DetectionResult, ManualUpdateRequest, ManualUpdateResponse,
    OverflowPrediction, PipelineStatus, RouteResponse,
};

/// Colaborador remoto del panel. La lógica de cada endpoint queda en el servidor.
#[async_trait(?Send)]
pub trait DashboardApi {
    /// Imagen adjunta para la detección (`web_sys::File` en el navegador)
    type Image;

    /// GET /api/bins
    async fn fetch_bins(&self) -> Result<Vec<Bin>, ApiError>;

    /// POST /api/detect (multipart `bin_id` + `image`)
    async fn submit_detection(&self, bin_id: BinId, image: &Self::Image) -> Result<DetectionResult, ApiError>;

    /// POST /api/alert
    async fn trigger_alert(&self) -> Result<AlertResponse, ApiError>;

    /// GET /api/optimize
    async fn request_route(&self) -> Result<RouteResponse, ApiError>;

    /// GET /api/predict
    async fn fetch_predictions(&self) -> Result<Vec<OverflowPrediction>, ApiError>;

    /// GET /api/pipeline/status
    async fn fetch_pipeline_status(&self) -> Result<PipelineStatus, ApiError>;

    /// POST /api/update
    async fn update_fill_level(&self, request: &ManualUpdateRequest) -> Result<ManualUpdateResponse, ApiError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Construcción de la petición (FormData, serialización)
    Request(String),
    Network(String),
    Http { status: u16, message: String },
    Parse(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Request(msg) => write!(f, "Request build error: {}", msg),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
