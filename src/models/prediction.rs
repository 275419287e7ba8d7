use serde::Deserialize;
use super::BinId;

/// Urgencia de desbordamiento calculada por el backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
    #[serde(other)]
    Unknown,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Critical => "CRITICAL",
            Urgency::High => "HIGH",
            Urgency::Medium => "MEDIUM",
            Urgency::Low => "LOW",
            Urgency::Unknown => "UNKNOWN",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Urgency::Critical => "urgency-critical",
            Urgency::High => "urgency-high",
            Urgency::Medium => "urgency-medium",
            Urgency::Low => "urgency-low",
            Urgency::Unknown => "urgency-unknown",
        }
    }
}

/// Elemento de GET /api/predict
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OverflowPrediction {
    pub bin_id: BinId,
    pub prediction: String,
    #[serde(default)]
    pub hours_to_overflow: Option<f64>,
    pub urgency: Urgency,
    #[serde(default)]
    pub current_fill: Option<f64>,
    #[serde(default)]
    pub fill_rate_per_hour: Option<f64>,
}
