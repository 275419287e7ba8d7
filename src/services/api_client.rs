// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};
use crate::config::CONFIG;
use crate::models::{
    AlertResponse, Bin, BinId, DetectionResult, ManualUpdateRequest, ManualUpdateResponse,
    OverflowPrediction, PipelineStatus, RouteResponse,
};
use super::{ApiError, DashboardApi};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient;

impl ApiClient {
    pub fn new() -> Self {
        log::debug!("🌐 Backend: {}", CONFIG.endpoint("/api"));
        Self
    }

    fn url(&self, path: &str) -> String {
        CONFIG.endpoint(path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::post(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Comprueba el status y deserializa el cuerpo
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| response.status_text());
        return Err(ApiError::Http { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

fn js_error(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Request(format!("{:?}", e))
}

#[async_trait(?Send)]
impl DashboardApi for ApiClient {
    type Image = File;

    async fn fetch_bins(&self) -> Result<Vec<Bin>, ApiError> {
        let bins: Vec<Bin> = self.get_json("/api/bins").await?;
        log::debug!("📦 {} contenedores recibidos", bins.len());
        Ok(bins)
    }

    async fn submit_detection(&self, bin_id: BinId, image: &File) -> Result<DetectionResult, ApiError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_str("bin_id", &bin_id.to_string())
            .map_err(js_error)?;
        form.append_with_blob_and_filename("image", image, &image.name())
            .map_err(js_error)?;

        log::info!("📷 Enviando imagen {} ({} bytes) para contenedor {}", image.name(), image.size(), bin_id);

        let response = Request::post(&self.url("/api/detect"))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response).await
    }

    async fn trigger_alert(&self) -> Result<AlertResponse, ApiError> {
        self.post_empty("/api/alert").await
    }

    async fn request_route(&self) -> Result<RouteResponse, ApiError> {
        self.get_json("/api/optimize").await
    }

    async fn fetch_predictions(&self) -> Result<Vec<OverflowPrediction>, ApiError> {
        self.get_json("/api/predict").await
    }

    async fn fetch_pipeline_status(&self) -> Result<PipelineStatus, ApiError> {
        self.get_json("/api/pipeline/status").await
    }

    async fn update_fill_level(&self, request: &ManualUpdateRequest) -> Result<ManualUpdateResponse, ApiError> {
        let response = Request::post(&self.url("/api/update"))
            .json(request)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // El backend responde 400 con {"error": ...} si faltan campos
        if response.status() == 400 {
            return response
                .json::<ManualUpdateResponse>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()));
        }
        read_json(response).await
    }
}
