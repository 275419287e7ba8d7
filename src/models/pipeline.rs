use serde::Deserialize;

/// Estado del pipeline en tiempo real (GET /api/pipeline/status)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PipelineStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub update_interval: Option<String>,
    #[serde(default)]
    pub bins_monitored: Option<u32>,
}

impl PipelineStatus {
    pub fn is_running(&self) -> bool {
        self.status.eq_ignore_ascii_case("RUNNING")
    }

    /// Texto del badge de cabecera
    pub fn badge_text(&self) -> String {
        let mut text = if self.is_running() {
            "🟢 Live pipeline".to_string()
        } else {
            format!("⚪ Pipeline {}", self.status.to_lowercase())
        };
        if let Some(interval) = &self.update_interval {
            text.push_str(&format!(" · every {}", interval));
        }
        text
    }
}
