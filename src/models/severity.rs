// ============================================================================
// SEVERITY - Clasificación NORMAL / HIGH / CRITICAL por nivel de llenado
// ============================================================================
// Única fuente de los umbrales: la lista, los marcadores y los popups del mapa
// consultan siempre este tipo.
// ============================================================================

use serde::Serialize;

pub const HIGH_THRESHOLD: f64 = 60.0;
pub const CRITICAL_THRESHOLD: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityTier {
    Normal,
    High,
    Critical,
}

impl SeverityTier {
    /// Total: cualquier valor (incluso fuera de 0-100) cae en exactamente un nivel
    pub fn classify(fill_level: f64) -> Self {
        if fill_level >= CRITICAL_THRESHOLD {
            SeverityTier::Critical
        } else if fill_level >= HIGH_THRESHOLD {
            SeverityTier::High
        } else {
            SeverityTier::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::Normal => "NORMAL",
            SeverityTier::High => "HIGH",
            SeverityTier::Critical => "CRITICAL",
        }
    }

    /// Color de barra, marcador y porcentaje
    pub fn color(&self) -> &'static str {
        match self {
            SeverityTier::Normal => "#10b981",
            SeverityTier::High => "#f59e0b",
            SeverityTier::Critical => "#ef4444",
        }
    }

    /// Texto de estado para tarjetas y popups
    pub fn status_text(&self) -> &'static str {
        match self {
            SeverityTier::Normal => "🟢 NORMAL",
            SeverityTier::High => "🟡 HIGH",
            SeverityTier::Critical => "🔴 CRITICAL",
        }
    }

    /// Modificador CSS de `.bin-card`
    pub fn card_class(&self) -> &'static str {
        match self {
            SeverityTier::Normal => "",
            SeverityTier::High => "high",
            SeverityTier::Critical => "critical",
        }
    }
}
