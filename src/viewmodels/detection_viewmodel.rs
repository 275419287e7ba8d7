// ============================================================================
// DETECTION VIEWMODEL - Precondiciones y presentación de la detección
// ============================================================================

use crate::models::{BinId, DetectionResult, ManualUpdateRequest};
use crate::utils::format_fill;

pub const DETECTION_PENDING_NOTICE: &str = "⏳ Analyzing image...";

/// Fallos detectados antes de enviar nada al backend
#[derive(Debug, Clone, PartialEq)]
pub enum PreconditionError {
    NoBinSelected,
    NoImageAttached,
    InvalidFillLevel(String),
}

impl PreconditionError {
    /// Aviso bloqueante mostrado al usuario
    pub fn notice(&self) -> String {
        match self {
            PreconditionError::NoBinSelected => "Please select a bin".to_string(),
            PreconditionError::NoImageAttached => "Please upload an image".to_string(),
            PreconditionError::InvalidFillLevel(raw) => {
                format!("Fill level must be a number between 0 and 100 (got \"{}\")", raw)
            }
        }
    }
}

impl std::fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notice())
    }
}

impl std::error::Error for PreconditionError {}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectionDisplay {
    pub color: String,
    pub status: String,
    pub fill_text: String,
    pub action: String,
}

pub struct DetectionViewModel;

impl DetectionViewModel {
    /// Valor del `<select>`: vacío o no numérico = sin selección
    pub fn parse_selection(value: &str) -> Result<BinId, PreconditionError> {
        value
            .trim()
            .parse::<BinId>()
            .map_err(|_| PreconditionError::NoBinSelected)
    }

    /// Primero el contenedor, luego la imagen (mismo orden que los avisos)
    pub fn validate<I>(selection: &str, image: Option<I>) -> Result<(BinId, I), PreconditionError> {
        let bin_id = Self::parse_selection(selection)?;
        let image = image.ok_or(PreconditionError::NoImageAttached)?;
        Ok((bin_id, image))
    }

    pub fn validate_manual_update(
        selection: &str,
        raw_fill: &str,
    ) -> Result<ManualUpdateRequest, PreconditionError> {
        let bin_id = Self::parse_selection(selection)?;
        let fill_level = raw_fill
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|fill| (0.0..=100.0).contains(fill))
            .ok_or_else(|| PreconditionError::InvalidFillLevel(raw_fill.trim().to_string()))?;
        Ok(ManualUpdateRequest { bin_id, fill_level })
    }

    pub fn display(result: &DetectionResult) -> DetectionDisplay {
        DetectionDisplay {
            color: result.color.clone(),
            status: format!("● {}", result.status),
            fill_text: format!("{}% Full", format_fill(result.fill_level)),
            action: result.action.clone(),
        }
    }
}
