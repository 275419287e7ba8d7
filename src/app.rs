// ============================================================================
// APP - Montaje del panel sobre la plantilla HTML
// ============================================================================
// Crea el ViewModel, conecta los botones y arranca el polling.
// La sesión termina con `pagehide` (salvo back/forward cache): se cancela el
// intervalo y se limpia el mapa.
// ============================================================================

use std::rc::Rc;
use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::config::CONFIG;
use crate::dom::{input_value, on_change, on_click_id, require_element, select_value, selected_file};
use crate::maps::web::LeafletMapSurface;
use crate::services::ApiClient;
use crate::services::image_preview::read_as_data_url;
use crate::viewmodels::{DashboardViewModel, MapViewModel};
use crate::views::{render_preview, DomDashboardView};
use crate::views::bin_list::BIN_SELECT_ID;

pub type WebDashboard = DashboardViewModel<ApiClient, LeafletMapSurface, DomDashboardView>;

const MAP_CONTAINER_ID: &str = "map";
const IMAGE_INPUT_ID: &str = "image-upload";
const MANUAL_FILL_ID: &str = "manual-fill";

/// Aplicación principal
pub struct App {
    dashboard: Rc<WebDashboard>,
    poller: Option<Interval>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let surface = LeafletMapSurface::initialize(MAP_CONTAINER_ID, &CONFIG.map_config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let map = MapViewModel::new(surface, CONFIG.ui_config.clone());

        let dashboard = Rc::new(DashboardViewModel::new(
            ApiClient::new(),
            map,
            DomDashboardView,
            CONFIG.consistency_mode,
        ));

        Ok(Self { dashboard, poller: None })
    }

    /// Listeners + carga inicial + timer de polling
    pub fn start(&mut self) -> Result<(), JsValue> {
        self.bind_actions()?;
        self.bind_preview()?;

        let dashboard = self.dashboard.clone();
        spawn_local(async move {
            if let Err(e) = dashboard.poll().await {
                log::debug!("Carga inicial sin contenedores: {}", e);
            }
            if let Err(e) = dashboard.refresh_predictions().await {
                log::debug!("Carga inicial sin predicciones: {}", e);
            }
            if let Err(e) = dashboard.load_pipeline_status().await {
                log::warn!("⚠️ Estado del pipeline no disponible: {}", e);
            }
        });

        let interval_ms = CONFIG.poll_interval_ms();
        let dashboard = self.dashboard.clone();
        self.poller = Some(Interval::new(interval_ms, move || {
            let dashboard = dashboard.clone();
            spawn_local(async move {
                if let Err(e) = dashboard.poll().await {
                    log::debug!("Poll programado fallido: {}", e);
                }
            });
        }));
        log::info!("⏱️ Polling cada {} ms", interval_ms);
        Ok(())
    }

    fn bind_actions(&self) -> Result<(), JsValue> {
        let dashboard = self.dashboard.clone();
        on_click_id("detect-btn", move |_| {
            let dashboard = dashboard.clone();
            let selection = select_value(BIN_SELECT_ID);
            let image = selected_file(IMAGE_INPUT_ID);
            spawn_local(async move {
                if let Err(e) = dashboard.detect(&selection, image).await {
                    log::debug!("Detección sin resultado: {}", e);
                }
            });
        })?;

        let dashboard = self.dashboard.clone();
        on_click_id("alert-btn", move |_| {
            let dashboard = dashboard.clone();
            spawn_local(async move {
                if let Err(e) = dashboard.send_alert().await {
                    log::debug!("Alerta no enviada: {}", e);
                }
            });
        })?;

        let dashboard = self.dashboard.clone();
        on_click_id("optimize-btn", move |_| {
            let dashboard = dashboard.clone();
            spawn_local(async move {
                if let Err(e) = dashboard.optimize_route().await {
                    log::warn!("⚠️ Ruta no aplicada: {}", e);
                }
            });
        })?;

        let dashboard = self.dashboard.clone();
        on_click_id("refresh-btn", move |_| {
            let dashboard = dashboard.clone();
            spawn_local(async move {
                if let Err(e) = dashboard.poll().await {
                    log::debug!("Refresco manual fallido: {}", e);
                }
            });
        })?;

        let dashboard = self.dashboard.clone();
        on_click_id("predict-btn", move |_| {
            let dashboard = dashboard.clone();
            spawn_local(async move {
                if let Err(e) = dashboard.refresh_predictions().await {
                    log::debug!("Predicciones no actualizadas: {}", e);
                }
            });
        })?;

        let dashboard = self.dashboard.clone();
        on_click_id("manual-update-btn", move |_| {
            let dashboard = dashboard.clone();
            let selection = select_value(BIN_SELECT_ID);
            let raw_fill = input_value(MANUAL_FILL_ID);
            spawn_local(async move {
                if let Err(e) = dashboard.manual_update(&selection, &raw_fill).await {
                    log::warn!("⚠️ Actualización manual fallida: {}", e);
                }
            });
        })
    }

    /// Preview local de la imagen elegida (sin red)
    fn bind_preview(&self) -> Result<(), JsValue> {
        let input = require_element(IMAGE_INPUT_ID)?;
        on_change(&input, move |_| {
            let Some(file) = selected_file(IMAGE_INPUT_ID) else {
                return;
            };
            spawn_local(async move {
                let shown = match read_as_data_url(&file).await {
                    Ok(data_url) => render_preview(&data_url),
                    Err(e) => Err(e),
                };
                if let Err(e) = shown {
                    log::error!("❌ No se pudo mostrar la imagen: {:?}", e);
                }
            });
        })
    }

    /// `pagehide`: con `persisted` la página queda en el back/forward cache y
    /// todo se conserva. Si no, cancela el polling y destruye el mapa.
    /// Devuelve `true` si la App quedó cerrada.
    pub fn page_hidden(&mut self, persisted: bool) -> bool {
        if !self.dashboard.page_hidden(persisted) {
            return false;
        }
        if let Some(poller) = self.poller.take() {
            poller.cancel();
        }
        self.dashboard.with_map(|map| map.surface().destroy());
        true
    }
}
