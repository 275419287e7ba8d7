use serde::Deserialize;

/// Respuesta de POST /api/alert
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlertResponse {
    #[serde(default)]
    pub success: bool,
    pub alerts_sent: u32,
    #[serde(default)]
    pub details: Vec<AlertDetail>,
}

/// Detalle por contenedor alertado
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlertDetail {
    #[serde(rename = "bin")]
    pub bin_name: String,
    pub fill_level: f64,
    #[serde(default)]
    pub alert_result: Option<DeliveryResult>,
}

/// Resultado del envío por WhatsApp (opaco para el cliente salvo el flag)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeliveryResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AlertResponse {
    /// Entregas que el proveedor rechazó
    pub fn failed_deliveries(&self) -> usize {
        self.details
            .iter()
            .filter(|d| matches!(&d.alert_result, Some(r) if !r.success))
            .count()
    }
}
