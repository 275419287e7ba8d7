// ============================================================================
// BIN - Registro de contenedor tal como lo devuelve GET /api/bins
// ============================================================================

use serde::{Deserialize, Serialize};
use super::SeverityTier;

/// Identificador estable de un contenedor (clave primaria en el backend)
pub type BinId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Par `[lat, lng]` en el orden que espera Leaflet
    pub fn as_lat_lng(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

/// Contenedor monitorizado. El cliente nunca modifica estos campos:
/// cada poll sustituye el snapshot completo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub id: BinId,
    pub name: String,
    pub location: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
    /// Porcentaje de llenado (0-100), REAL en el backend
    pub fill_level: f64,
    /// Marca `YYYY-MM-DD HH:MM:SS` del backend; ausente = desconocida
    #[serde(default)]
    pub last_updated: Option<String>,
}

impl Bin {
    pub fn severity(&self) -> SeverityTier {
        SeverityTier::classify(self.fill_level)
    }

    /// Texto de la opción del selector: "Bin A — Sector 18 Market"
    pub fn option_label(&self) -> String {
        format!("{} — {}", self.name, self.location)
    }
}
