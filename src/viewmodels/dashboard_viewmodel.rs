// ============================================================================
// DASHBOARD VIEWMODEL - Controlador de la sesión del panel
// ============================================================================
// Un objeto por carga de página: se crea al montar la vista y se destruye con
// `teardown()`. Todo ocurre en el hilo único del navegador; los `RefCell`
// nunca se mantienen prestados a través de un `.await`.
//
// Orden dentro de cada flujo:
// - poll: fetch → reemplazo del snapshot → lista → marcadores → hora
// - detect: precondiciones → pendiente → request → resultado → poll
// - alert: request → contador → aviso
// - route: pendiente → request → (Idle | ruta dibujada) → lista de paradas
// ============================================================================

use std::cell::RefCell;
use crate::config::ConsistencyMode;
use crate::maps::{MapError, MapSurface};
use crate::models::{Bin, DetectionResult, RouteResponse};
use crate::services::{ApiError, DashboardApi};
use crate::state::DashboardState;
use super::{
    BinListViewModel, DashboardView, DetectionViewModel, MapViewModel, PreconditionError,
    PredictionViewModel, RouteListModel, RouteOverlay, RouteViewModel,
};

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardError {
    Precondition(PreconditionError),
    Api(ApiError),
    Map(MapError),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::Precondition(e) => write!(f, "{}", e),
            DashboardError::Api(e) => write!(f, "{}", e),
            DashboardError::Map(e) => write!(f, "Map error: {}", e),
        }
    }
}

impl std::error::Error for DashboardError {}

impl From<PreconditionError> for DashboardError {
    fn from(e: PreconditionError) -> Self {
        DashboardError::Precondition(e)
    }
}

impl From<ApiError> for DashboardError {
    fn from(e: ApiError) -> Self {
        DashboardError::Api(e)
    }
}

impl From<MapError> for DashboardError {
    fn from(e: MapError) -> Self {
        DashboardError::Map(e)
    }
}

/// Resultado de aplicar una respuesta de polling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Applied { bins: usize },
    /// Respuesta más antigua que la última aplicada (solo en `DiscardStale`)
    Discarded,
}

pub struct DashboardViewModel<A, S, V>
where
    A: DashboardApi,
    S: MapSurface,
    V: DashboardView,
{
    api: A,
    view: V,
    map: RefCell<MapViewModel<S>>,
    state: DashboardState,
    mode: ConsistencyMode,
}

impl<A, S, V> DashboardViewModel<A, S, V>
where
    A: DashboardApi,
    S: MapSurface,
    V: DashboardView,
{
    pub fn new(api: A, map: MapViewModel<S>, view: V, mode: ConsistencyMode) -> Self {
        Self {
            api,
            view,
            map: RefCell::new(map),
            state: DashboardState::new(),
            mode,
        }
    }

    // ------------------------------------------------------------------
    // Polling
    // ------------------------------------------------------------------

    /// Un ciclo de polling. Si falla, lo pintado se queda como estaba.
    pub async fn poll(&self) -> Result<PollOutcome, DashboardError> {
        let seq = self.state.next_poll_seq();

        match self.api.fetch_bins().await {
            Ok(bins) => Ok(self.apply_poll(seq, bins)),
            Err(e) => {
                log::warn!("⚠️ Poll #{} fallido, se mantiene el último snapshot: {}", seq, e);
                Err(e.into())
            }
        }
    }

    /// Aplica la respuesta del poll `seq` según el modo de consistencia
    pub fn apply_poll(&self, seq: u64, bins: Vec<Bin>) -> PollOutcome {
        if !self.state.accept_poll(seq, self.mode) {
            log::info!("⏭️ Poll #{} descartado (llegó después de uno más reciente)", seq);
            return PollOutcome::Discarded;
        }

        let count = bins.len();
        self.apply_snapshot(bins);
        log::info!("✅ Poll #{} aplicado: {} contenedores", seq, count);
        PollOutcome::Applied { bins: count }
    }

    /// Reemplazo completo del snapshot y render síncrono de lista y mapa
    pub fn apply_snapshot(&self, bins: Vec<Bin>) {
        self.state.replace_snapshot(bins);
        {
            let snapshot = self.state.snapshot.borrow();
            self.view.render_bin_list(&BinListViewModel::prepare(&snapshot));
            self.map.borrow_mut().refresh_markers(&snapshot);
        }

        let now = chrono::Local::now().format("%H:%M:%S").to_string();
        self.view.render_last_updated(&format!("Updated: {}", now));
        self.state.set_last_render(now);
    }

    // ------------------------------------------------------------------
    // Detección
    // ------------------------------------------------------------------

    /// `selection` es el valor crudo del selector de contenedor
    pub async fn detect(
        &self,
        selection: &str,
        image: Option<A::Image>,
    ) -> Result<DetectionResult, DashboardError> {
        let (bin_id, image) = match DetectionViewModel::validate(selection, image) {
            Ok(valid) => valid,
            Err(e) => {
                log::info!("🚫 Detección cancelada: {}", e);
                self.view.show_notice(&e.notice());
                return Err(e.into());
            }
        };

        self.view.show_detection_pending();
        let result = self.api.submit_detection(bin_id, &image).await;

        match &result {
            Ok(detection) => {
                log::info!("🔍 Contenedor {} detectado al {}%", bin_id, detection.fill_level);
                self.view.show_detection_result(&DetectionViewModel::display(detection));
            }
            Err(e) => {
                log::error!("❌ Error en detección para contenedor {}: {}", bin_id, e);
                self.view.show_detection_error(&format!("❌ {}", e));
            }
        }

        // Refresco incondicional para que lista y mapa reflejen el nuevo nivel
        let _ = self.poll().await;
        if result.is_ok() {
            let _ = self.refresh_predictions().await;
        }

        result.map_err(DashboardError::from)
    }

    /// Ajuste manual del nivel de llenado
    pub async fn manual_update(&self, selection: &str, raw_fill: &str) -> Result<(), DashboardError> {
        let request = match DetectionViewModel::validate_manual_update(selection, raw_fill) {
            Ok(request) => request,
            Err(e) => {
                self.view.show_notice(&e.notice());
                return Err(e.into());
            }
        };

        let response = self.api.update_fill_level(&request).await?;
        if response.success {
            let message = response
                .message
                .unwrap_or_else(|| format!("Bin {} updated", request.bin_id));
            self.view.show_notice(&format!("✅ {}", message));
        } else {
            let error = response.error.unwrap_or_else(|| "Update rejected".to_string());
            log::warn!("⚠️ Actualización manual rechazada: {}", error);
            self.view.show_notice(&format!("❌ {}", error));
        }

        let _ = self.poll().await;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Alertas
    // ------------------------------------------------------------------

    /// Devuelve el total acumulado de alertas
    pub async fn send_alert(&self) -> Result<u64, DashboardError> {
        let response = match self.api.trigger_alert().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ Error enviando alerta: {}", e);
                return Err(e.into());
            }
        };

        let total = self.state.add_alerts(response.alerts_sent);
        self.view.render_alert_count(total);

        let failed = response.failed_deliveries();
        if failed > 0 {
            log::warn!("⚠️ {} alertas no se entregaron", failed);
        }
        self.view.show_notice(&format!(
            "✅ {} WhatsApp alert(s) sent to driver!",
            response.alerts_sent
        ));

        let _ = self.refresh_predictions().await;
        Ok(total)
    }

    // ------------------------------------------------------------------
    // Ruta
    // ------------------------------------------------------------------

    pub async fn optimize_route(&self) -> Result<RouteOverlay, DashboardError> {
        self.view.show_route_pending();

        let response = match self.api.request_route().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ Error optimizando ruta: {}", e);
                self.view.render_route(&RouteListModel::Unsolved { notice: format!("❌ {}", e) });
                return Err(e.into());
            }
        };

        let draw_result = match &response {
            RouteResponse::Success(route) => self.map.borrow_mut().draw_route(&route.route),
            RouteResponse::NoCollectionNeeded { .. } | RouteResponse::NoSolution { .. } => {
                log::info!("🛑 Sin ruta que dibujar");
                self.map.borrow_mut().clear_route();
                Ok(())
            }
        };

        self.view.render_route(&RouteViewModel::prepare(&response));
        draw_result?;
        Ok(self.route_overlay())
    }

    // ------------------------------------------------------------------
    // Predicciones y estado del pipeline
    // ------------------------------------------------------------------

    pub async fn refresh_predictions(&self) -> Result<usize, DashboardError> {
        let predictions = match self.api.fetch_predictions().await {
            Ok(predictions) => predictions,
            Err(e) => {
                log::warn!("⚠️ Predicciones no disponibles: {}", e);
                return Err(e.into());
            }
        };

        let rows = PredictionViewModel::prepare(&predictions, &self.state.snapshot.borrow());
        self.view.render_predictions(&rows);
        Ok(rows.len())
    }

    pub async fn load_pipeline_status(&self) -> Result<(), DashboardError> {
        let status = self.api.fetch_pipeline_status().await?;
        log::info!("📡 Pipeline: {}", status.status);
        self.view.render_pipeline_status(&status);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Ciclo de vida
    // ------------------------------------------------------------------

    /// Retira marcadores y ruta del mapa
    pub fn teardown(&self) {
        self.map.borrow_mut().teardown();
        log::info!("👋 Sesión del panel cerrada");
    }

    /// `pagehide`. Si la página entra en el back/forward cache (`persisted`)
    /// vuelve intacta con `pageshow`, así que no se desmonta nada.
    /// Devuelve `true` si la sesión quedó cerrada.
    pub fn page_hidden(&self, persisted: bool) -> bool {
        if persisted {
            log::info!("💤 Página en back/forward cache, sesión conservada");
            return false;
        }
        self.teardown();
        true
    }

    pub fn route_overlay(&self) -> RouteOverlay {
        self.map.borrow().route_overlay()
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Acceso de solo lectura al overlay del mapa
    pub fn with_map<R>(&self, f: impl FnOnce(&MapViewModel<S>) -> R) -> R {
        f(&self.map.borrow())
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use super::*;
    use crate::config::UIConfig;
    use crate::models::{AlertResponse, ManualUpdateResponse, OptimizedRoute, PipelineStatus, SeverityTier};
    use crate::testing::{bin, stop, FakeApi, RecordingSurface, RecordingView, ViewEvent};

    type TestDashboard = DashboardViewModel<FakeApi, RecordingSurface, RecordingView>;

    fn dashboard(mode: ConsistencyMode) -> TestDashboard {
        DashboardViewModel::new(
            FakeApi::default(),
            MapViewModel::new(RecordingSurface::default(), UIConfig::default()),
            RecordingView::default(),
            mode,
        )
    }

    fn route(stops: Vec<crate::models::RouteStop>) -> RouteResponse {
        RouteResponse::Success(OptimizedRoute {
            message: None,
            total_bins_in_route: stops.iter().filter(|s| s.fill_level.is_some()).count() as u32,
            route: stops,
            total_distance_km: 3.5,
        })
    }

    #[test]
    fn poll_renders_list_and_markers_from_same_snapshot() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        dash.api().push_bins(Ok(vec![bin(1, 85.0), bin(2, 45.0)]));

        let outcome = block_on(dash.poll()).unwrap();
        assert_eq!(outcome, PollOutcome::Applied { bins: 2 });

        let model = dash.view().last_bin_list().unwrap();
        assert_eq!(model.stats.critical, 1);
        assert_eq!(model.stats.average_text(), "65%");
        assert_eq!(model.cards[0].tier, SeverityTier::Critical);
        assert_eq!(model.cards[1].tier, SeverityTier::Normal);

        dash.with_map(|map| {
            assert_eq!(map.marker_ids(), vec![1, 2]);
            assert_eq!(map.surface().marker_colors(), vec!["#10b981", "#ef4444"]);
        });
        assert!(dash.view().last_updated().unwrap().starts_with("Updated: "));
        assert!(dash.state().get_last_render().is_some());
    }

    #[test]
    fn failed_poll_keeps_previous_render() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        dash.api().push_bins(Ok(vec![bin(1, 85.0)]));
        dash.api().push_bins(Err(ApiError::Parse("expected value".to_string())));

        block_on(dash.poll()).unwrap();
        let renders = dash.view().bin_list_renders();

        assert!(block_on(dash.poll()).is_err());
        assert_eq!(dash.view().bin_list_renders(), renders);
        assert_eq!(dash.state().get_snapshot(), vec![bin(1, 85.0)]);
        dash.with_map(|map| assert_eq!(map.marker_ids(), vec![1]));
    }

    #[test]
    fn empty_snapshot_renders_placeholder_average() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        dash.api().push_bins(Ok(vec![bin(1, 50.0)]));
        dash.api().push_bins(Ok(vec![]));

        block_on(dash.poll()).unwrap();
        block_on(dash.poll()).unwrap();

        let model = dash.view().last_bin_list().unwrap();
        assert_eq!(model.stats.average_text(), "N/A");
        dash.with_map(|map| assert!(map.marker_ids().is_empty()));
    }

    #[test]
    fn late_response_wins_by_default() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        let older = dash.state().next_poll_seq();
        let newer = dash.state().next_poll_seq();

        dash.apply_poll(newer, vec![bin(2, 10.0)]);
        assert_eq!(dash.apply_poll(older, vec![bin(1, 10.0)]), PollOutcome::Applied { bins: 1 });
        dash.with_map(|map| assert_eq!(map.marker_ids(), vec![1]));
    }

    #[test]
    fn late_response_is_dropped_when_discarding_stale() {
        let dash = dashboard(ConsistencyMode::DiscardStale);
        let older = dash.state().next_poll_seq();
        let newer = dash.state().next_poll_seq();

        dash.apply_poll(newer, vec![bin(2, 10.0)]);
        assert_eq!(dash.apply_poll(older, vec![bin(1, 10.0)]), PollOutcome::Discarded);
        dash.with_map(|map| assert_eq!(map.marker_ids(), vec![2]));
    }

    #[test]
    fn detect_without_selection_sends_nothing() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);

        let result = block_on(dash.detect("", Some("bin.jpg".to_string())));
        assert_eq!(result, Err(DashboardError::Precondition(PreconditionError::NoBinSelected)));
        assert!(dash.api().calls().is_empty());
        assert_eq!(
            dash.view().events(),
            vec![ViewEvent::Notice("Please select a bin".to_string())]
        );
    }

    #[test]
    fn detect_without_image_sends_nothing() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);

        let result = block_on(dash.detect("2", None));
        assert_eq!(result, Err(DashboardError::Precondition(PreconditionError::NoImageAttached)));
        assert!(dash.api().calls().is_empty());
        assert_eq!(dash.view().notices(), vec!["Please upload an image".to_string()]);
    }

    #[test]
    fn detect_shows_pending_then_result_then_repolls() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        dash.api().push_detection(Ok(DetectionResult {
            bin_id: None,
            fill_level: 91.0,
            status: "CRITICAL".to_string(),
            color: "red".to_string(),
            action: "Immediate collection required".to_string(),
        }));
        dash.api().push_bins(Ok(vec![bin(2, 91.0)]));

        let result = block_on(dash.detect("2", Some("bin.jpg".to_string()))).unwrap();
        assert_eq!(result.fill_level, 91.0);

        assert_eq!(&dash.api().calls()[..2], &["detect:2:bin.jpg".to_string(), "bins".to_string()]);

        let events = dash.view().events();
        let pending = events.iter().position(|e| *e == ViewEvent::DetectionPending).unwrap();
        let shown = events
            .iter()
            .position(|e| matches!(e, ViewEvent::DetectionResult(d) if d.fill_text == "91% Full"))
            .unwrap();
        let relisted = events.iter().position(|e| matches!(e, ViewEvent::BinList(_))).unwrap();
        assert!(pending < shown && shown < relisted);
    }

    #[test]
    fn failed_detection_still_repolls() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        dash.api().push_detection(Err(ApiError::Http { status: 400, message: "No image uploaded".to_string() }));
        dash.api().push_bins(Ok(vec![bin(2, 40.0)]));

        assert!(block_on(dash.detect("2", Some("bin.jpg".to_string()))).is_err());
        assert!(dash.api().calls().contains(&"bins".to_string()));
        assert!(dash
            .view()
            .events()
            .iter()
            .any(|e| matches!(e, ViewEvent::DetectionError(msg) if msg.contains("400"))));
    }

    #[test]
    fn alert_counter_accumulates_across_responses() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        dash.api().push_alert(Ok(AlertResponse { success: true, alerts_sent: 3, details: vec![] }));
        dash.api().push_alert(Ok(AlertResponse { success: true, alerts_sent: 2, details: vec![] }));

        assert_eq!(block_on(dash.send_alert()).unwrap(), 3);
        assert_eq!(block_on(dash.send_alert()).unwrap(), 5);

        let counts: Vec<u64> = dash
            .view()
            .events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::AlertCount(n) => Some(n),
                _ => None,
            })
            .collect();
        assert_eq!(counts, vec![3, 5]);
        assert_eq!(dash.view().notices()[1], "✅ 2 WhatsApp alert(s) sent to driver!");
    }

    #[test]
    fn failed_alert_leaves_counter_untouched() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        dash.api().push_alert(Err(ApiError::Network("offline".to_string())));

        assert!(block_on(dash.send_alert()).is_err());
        assert_eq!(dash.state().get_alerts_sent(), 0);
    }

    #[test]
    fn no_collection_needed_clears_existing_route() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        dash.api().push_route(Ok(route(vec![
            stop("Depot", None, 28.57, 77.32),
            stop("Bin D", Some(88.0), 28.58, 77.33),
        ])));
        dash.api().push_route(Ok(RouteResponse::NoCollectionNeeded { message: None }));

        assert_eq!(block_on(dash.optimize_route()).unwrap(), RouteOverlay::RouteDrawn);
        assert_eq!(block_on(dash.optimize_route()).unwrap(), RouteOverlay::Idle);

        dash.with_map(|map| assert_eq!(map.surface().live_polylines(), 0));
        assert_eq!(
            dash.view().last_route(),
            Some(RouteListModel::NoCollectionNeeded {
                notice: crate::viewmodels::route_viewmodel::NO_COLLECTION_NOTICE.to_string()
            })
        );
    }

    #[test]
    fn successive_routes_never_overlap() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        for lat in [28.58, 28.60, 28.62] {
            dash.api().push_route(Ok(route(vec![
                stop("Depot", None, 28.57, 77.32),
                stop("Bin", Some(90.0), lat, 77.33),
            ])));
            block_on(dash.optimize_route()).unwrap();
        }

        dash.with_map(|map| {
            assert_eq!(map.surface().live_polylines(), 1);
            assert_eq!(map.surface().max_live_polylines(), 1);
        });
        assert!(matches!(dash.view().last_route(), Some(RouteListModel::Route { .. })));
    }

    #[test]
    fn route_request_shows_pending_first() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        dash.api().push_route(Ok(RouteResponse::NoSolution { message: None }));

        block_on(dash.optimize_route()).unwrap();
        let events = dash.view().events();
        assert_eq!(events[0], ViewEvent::RoutePending);
        assert!(matches!(events[1], ViewEvent::Route(RouteListModel::Unsolved { .. })));
    }

    #[test]
    fn manual_update_validates_then_repolls() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        assert!(block_on(dash.manual_update("1", "abc")).is_err());
        assert!(dash.api().calls().is_empty());

        dash.api().push_update(Ok(ManualUpdateResponse {
            success: true,
            message: Some("Bin 1 updated to 75%".to_string()),
            error: None,
        }));
        dash.api().push_bins(Ok(vec![bin(1, 75.0)]));
        block_on(dash.manual_update("1", "75")).unwrap();
        assert_eq!(dash.api().calls(), vec!["update:1:75".to_string(), "bins".to_string()]);
        assert_eq!(dash.view().notices().last().unwrap(), "✅ Bin 1 updated to 75%");
    }

    #[test]
    fn manual_update_rejection_shows_error_and_repolls() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        dash.api().push_update(Ok(ManualUpdateResponse {
            success: false,
            message: None,
            error: Some("Missing bin_id or fill_level".to_string()),
        }));
        dash.api().push_bins(Ok(vec![bin(2, 30.0)]));

        block_on(dash.manual_update("2", "40")).unwrap();

        assert_eq!(dash.api().calls(), vec!["update:2:40".to_string(), "bins".to_string()]);
        assert_eq!(dash.view().notices(), vec!["❌ Missing bin_id or fill_level".to_string()]);
        assert_eq!(dash.state().get_snapshot(), vec![bin(2, 30.0)]);
    }

    #[test]
    fn route_transport_error_keeps_previous_polyline() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        dash.api().push_route(Ok(route(vec![
            stop("Depot", None, 28.57, 77.32),
            stop("Bin D", Some(88.0), 28.58, 77.33),
        ])));
        let offline = ApiError::Network("offline".to_string());
        dash.api().push_route(Err(offline.clone()));

        block_on(dash.optimize_route()).unwrap();
        assert_eq!(block_on(dash.optimize_route()), Err(DashboardError::Api(offline.clone())));

        assert_eq!(dash.route_overlay(), RouteOverlay::RouteDrawn);
        dash.with_map(|map| assert_eq!(map.surface().live_polylines(), 1));
        assert_eq!(
            dash.view().last_route(),
            Some(RouteListModel::Unsolved { notice: format!("❌ {}", offline) })
        );
    }

    #[test]
    fn pipeline_status_renders_badge() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        let status = PipelineStatus {
            status: "RUNNING".to_string(),
            message: Some("Pathway real-time pipeline is active".to_string()),
            update_interval: Some("10 seconds".to_string()),
            bins_monitored: Some(12),
        };
        dash.api().push_pipeline(Ok(status.clone()));
        dash.api().push_pipeline(Err(ApiError::Http { status: 503, message: "down".to_string() }));

        block_on(dash.load_pipeline_status()).unwrap();
        assert!(block_on(dash.load_pipeline_status()).is_err());

        assert_eq!(dash.view().events(), vec![ViewEvent::Pipeline(status)]);
        assert_eq!(dash.api().calls(), vec!["pipeline".to_string(), "pipeline".to_string()]);
    }

    #[test]
    fn predictions_use_snapshot_names() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        dash.api().push_bins(Ok(vec![bin(4, 70.0)]));
        block_on(dash.poll()).unwrap();

        dash.api().push_predictions(Ok(vec![crate::models::OverflowPrediction {
            bin_id: 4,
            prediction: "Will overflow in 5.0 hours — schedule today".to_string(),
            hours_to_overflow: Some(5.0),
            urgency: crate::models::Urgency::High,
            current_fill: Some(70.0),
            fill_rate_per_hour: Some(6.0),
        }]));

        assert_eq!(block_on(dash.refresh_predictions()).unwrap(), 1);
        let rows = dash.view().last_predictions().unwrap();
        assert_eq!(rows[0].bin_name, "Bin 4");
    }

    #[test]
    fn back_forward_cache_keeps_session_alive() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        dash.apply_snapshot(vec![bin(1, 85.0), bin(2, 20.0)]);
        dash.api().push_route(Ok(route(vec![stop("Depot", None, 28.57, 77.32)])));
        block_on(dash.optimize_route()).unwrap();

        assert!(!dash.page_hidden(true));
        dash.with_map(|map| {
            assert_eq!(map.surface().live_markers(), 2);
            assert_eq!(map.surface().live_polylines(), 1);
        });
        assert_eq!(dash.route_overlay(), RouteOverlay::RouteDrawn);

        assert!(dash.page_hidden(false));
        dash.with_map(|map| {
            assert_eq!(map.surface().live_markers(), 0);
            assert_eq!(map.surface().live_polylines(), 0);
        });
    }

    #[test]
    fn teardown_removes_map_artifacts() {
        let dash = dashboard(ConsistencyMode::LastArrivalWins);
        dash.apply_snapshot(vec![bin(1, 85.0)]);
        dash.api().push_route(Ok(route(vec![stop("Depot", None, 28.57, 77.32)])));
        block_on(dash.optimize_route()).unwrap();

        dash.teardown();
        dash.with_map(|map| {
            assert_eq!(map.surface().live_markers(), 0);
            assert_eq!(map.surface().live_polylines(), 0);
        });
    }
}
