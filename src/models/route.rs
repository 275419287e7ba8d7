// ============================================================================
// ROUTE - Respuesta de GET /api/optimize
// ============================================================================

use serde::{Deserialize, Serialize};
use super::{BinId, Coordinates};

/// Resultado de la optimización, discriminado por el campo `status`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteResponse {
    Success(OptimizedRoute),
    NoCollectionNeeded {
        #[serde(default)]
        message: Option<String>,
    },
    /// El optimizador no encontró solución
    NoSolution {
        #[serde(default)]
        message: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptimizedRoute {
    #[serde(default)]
    pub message: Option<String>,
    pub route: Vec<RouteStop>,
    pub total_distance_km: f64,
    pub total_bins_in_route: u32,
}

/// Parada de la ruta: el depósito no trae nivel de llenado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    #[serde(default, alias = "bin_id")]
    pub id: Option<BinId>,
    pub name: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub fill_level: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopKind {
    Depot,
    Bin { fill_level: f64 },
}

impl RouteStop {
    pub fn kind(&self) -> StopKind {
        match self.fill_level {
            Some(fill_level) => StopKind::Bin { fill_level },
            None => StopKind::Depot,
        }
    }
}
