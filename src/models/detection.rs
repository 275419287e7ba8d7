use serde::{Deserialize, Serialize};
use super::BinId;

/// Respuesta de POST /api/detect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// El backend reenvía el `bin_id` del formulario como texto
    #[serde(default)]
    pub bin_id: Option<serde_json::Value>,
    pub fill_level: f64,
    pub status: String,
    pub color: String,
    pub action: String,
}

/// Cuerpo de POST /api/update (ajuste manual del llenado)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManualUpdateRequest {
    pub bin_id: BinId,
    pub fill_level: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManualUpdateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
