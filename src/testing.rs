// Fakes compartidos por los tests unitarios

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use async_trait::async_trait;
use crate::maps::{Bounds, MapError, MapSurface, MarkerSpec, PolylineSpec};
use crate::models::{
    AlertResponse, Bin, BinId, Coordinates, DetectionResult, ManualUpdateRequest,
    ManualUpdateResponse, OverflowPrediction, PipelineStatus, RouteResponse, RouteStop,
};
use crate::services::{ApiError, DashboardApi};
use crate::viewmodels::{
    BinListModel, DashboardView, DetectionDisplay, PredictionRow, RouteListModel,
};

pub fn bin(id: BinId, fill_level: f64) -> Bin {
    Bin {
        id,
        name: format!("Bin {}", id),
        location: format!("Sector {}", id),
        coordinates: Coordinates::new(28.5 + id as f64 * 0.01, 77.3 + id as f64 * 0.01),
        fill_level,
        last_updated: None,
    }
}

pub fn stop(name: &str, fill_level: Option<f64>, latitude: f64, longitude: f64) -> RouteStop {
    RouteStop {
        id: None,
        name: name.to_string(),
        coordinates: Coordinates::new(latitude, longitude),
        fill_level,
    }
}

// ----------------------------------------------------------------------------
// Mapa
// ----------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingSurface {
    next_handle: u64,
    markers: HashMap<u64, MarkerSpec>,
    polylines: HashSet<u64>,
    max_polylines: usize,
    polyline_history: Vec<PolylineSpec>,
    bounds_history: Vec<Bounds>,
}

impl RecordingSurface {
    fn handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }

    pub fn live_markers(&self) -> usize {
        self.markers.len()
    }

    pub fn marker_colors(&self) -> Vec<String> {
        let mut colors: Vec<String> = self.markers.values().map(|m| m.color.clone()).collect();
        colors.sort();
        colors
    }

    pub fn live_polylines(&self) -> usize {
        self.polylines.len()
    }

    pub fn max_live_polylines(&self) -> usize {
        self.max_polylines
    }

    pub fn last_polyline(&self) -> Option<&PolylineSpec> {
        self.polyline_history.last()
    }

    pub fn last_polyline_path(&self) -> Option<&[Coordinates]> {
        self.polyline_history.last().map(|p| p.path.as_slice())
    }

    pub fn last_bounds(&self) -> Option<Bounds> {
        self.bounds_history.last().copied()
    }
}

impl MapSurface for RecordingSurface {
    type Marker = u64;
    type Polyline = u64;

    fn add_marker(&mut self, marker: &MarkerSpec) -> Result<u64, MapError> {
        let handle = self.handle();
        self.markers.insert(handle, marker.clone());
        Ok(handle)
    }

    fn remove_marker(&mut self, marker: u64) {
        assert!(self.markers.remove(&marker).is_some(), "marker {} removed twice", marker);
    }

    fn add_polyline(&mut self, polyline: &PolylineSpec) -> Result<u64, MapError> {
        let handle = self.handle();
        self.polylines.insert(handle);
        self.max_polylines = self.max_polylines.max(self.polylines.len());
        self.polyline_history.push(polyline.clone());
        Ok(handle)
    }

    fn remove_polyline(&mut self, polyline: u64) {
        assert!(self.polylines.remove(&polyline), "polyline {} removed twice", polyline);
    }

    fn fit_bounds(&mut self, bounds: &Bounds) -> Result<(), MapError> {
        self.bounds_history.push(*bounds);
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Backend
// ----------------------------------------------------------------------------

/// Respuestas encoladas por endpoint; sin respuesta encolada → error de red
#[derive(Default)]
pub struct FakeApi {
    bins: RefCell<VecDeque<Result<Vec<Bin>, ApiError>>>,
    detections: RefCell<VecDeque<Result<DetectionResult, ApiError>>>,
    alerts: RefCell<VecDeque<Result<AlertResponse, ApiError>>>,
    routes: RefCell<VecDeque<Result<RouteResponse, ApiError>>>,
    predictions: RefCell<VecDeque<Result<Vec<OverflowPrediction>, ApiError>>>,
    pipeline: RefCell<VecDeque<Result<PipelineStatus, ApiError>>>,
    updates: RefCell<VecDeque<Result<ManualUpdateResponse, ApiError>>>,
    calls: RefCell<Vec<String>>,
}

fn next<T>(queue: &RefCell<VecDeque<Result<T, ApiError>>>) -> Result<T, ApiError> {
    queue
        .borrow_mut()
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::Network("no response queued".to_string())))
}

impl FakeApi {
    pub fn push_bins(&self, response: Result<Vec<Bin>, ApiError>) {
        self.bins.borrow_mut().push_back(response);
    }

    pub fn push_detection(&self, response: Result<DetectionResult, ApiError>) {
        self.detections.borrow_mut().push_back(response);
    }

    pub fn push_alert(&self, response: Result<AlertResponse, ApiError>) {
        self.alerts.borrow_mut().push_back(response);
    }

    pub fn push_route(&self, response: Result<RouteResponse, ApiError>) {
        self.routes.borrow_mut().push_back(response);
    }

    pub fn push_predictions(&self, response: Result<Vec<OverflowPrediction>, ApiError>) {
        self.predictions.borrow_mut().push_back(response);
    }

    pub fn push_pipeline(&self, response: Result<PipelineStatus, ApiError>) {
        self.pipeline.borrow_mut().push_back(response);
    }

    pub fn push_update(&self, response: Result<ManualUpdateResponse, ApiError>) {
        self.updates.borrow_mut().push_back(response);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl DashboardApi for FakeApi {
    type Image = String;

    async fn fetch_bins(&self) -> Result<Vec<Bin>, ApiError> {
        self.record("bins".to_string());
        next(&self.bins)
    }

    async fn submit_detection(&self, bin_id: BinId, image: &String) -> Result<DetectionResult, ApiError> {
        self.record(format!("detect:{}:{}", bin_id, image));
        next(&self.detections)
    }

    async fn trigger_alert(&self) -> Result<AlertResponse, ApiError> {
        self.record("alert".to_string());
        next(&self.alerts)
    }

    async fn request_route(&self) -> Result<RouteResponse, ApiError> {
        self.record("optimize".to_string());
        next(&self.routes)
    }

    async fn fetch_predictions(&self) -> Result<Vec<OverflowPrediction>, ApiError> {
        self.record("predict".to_string());
        next(&self.predictions)
    }

    async fn fetch_pipeline_status(&self) -> Result<PipelineStatus, ApiError> {
        self.record("pipeline".to_string());
        next(&self.pipeline)
    }

    async fn update_fill_level(&self, request: &ManualUpdateRequest) -> Result<ManualUpdateResponse, ApiError> {
        self.record(format!("update:{}:{}", request.bin_id, request.fill_level));
        next(&self.updates)
    }
}

// ----------------------------------------------------------------------------
// Vista
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    BinList(BinListModel),
    LastUpdated(String),
    Notice(String),
    DetectionPending,
    DetectionResult(DetectionDisplay),
    DetectionError(String),
    AlertCount(u64),
    RoutePending,
    Route(RouteListModel),
    Predictions(Vec<PredictionRow>),
    Pipeline(PipelineStatus),
}

#[derive(Default)]
pub struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
}

impl RecordingView {
    fn push(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Notice(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn bin_list_renders(&self) -> usize {
        self.events.borrow().iter().filter(|e| matches!(e, ViewEvent::BinList(_))).count()
    }

    pub fn last_bin_list(&self) -> Option<BinListModel> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::BinList(model) => Some(model.clone()),
            _ => None,
        })
    }

    pub fn last_updated(&self) -> Option<String> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::LastUpdated(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn last_route(&self) -> Option<RouteListModel> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::Route(model) => Some(model.clone()),
            _ => None,
        })
    }

    pub fn last_predictions(&self) -> Option<Vec<PredictionRow>> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::Predictions(rows) => Some(rows.clone()),
            _ => None,
        })
    }
}

impl DashboardView for RecordingView {
    fn render_bin_list(&self, model: &BinListModel) {
        self.push(ViewEvent::BinList(model.clone()));
    }

    fn render_last_updated(&self, time: &str) {
        self.push(ViewEvent::LastUpdated(time.to_string()));
    }

    fn show_notice(&self, message: &str) {
        self.push(ViewEvent::Notice(message.to_string()));
    }

    fn show_detection_pending(&self) {
        self.push(ViewEvent::DetectionPending);
    }

    fn show_detection_result(&self, display: &DetectionDisplay) {
        self.push(ViewEvent::DetectionResult(display.clone()));
    }

    fn show_detection_error(&self, message: &str) {
        self.push(ViewEvent::DetectionError(message.to_string()));
    }

    fn render_alert_count(&self, total: u64) {
        self.push(ViewEvent::AlertCount(total));
    }

    fn show_route_pending(&self) {
        self.push(ViewEvent::RoutePending);
    }

    fn render_route(&self, model: &RouteListModel) {
        self.push(ViewEvent::Route(model.clone()));
    }

    fn render_predictions(&self, rows: &[PredictionRow]) {
        self.push(ViewEvent::Predictions(rows.to_vec()));
    }

    fn render_pipeline_status(&self, status: &PipelineStatus) {
        self.push(ViewEvent::Pipeline(status.clone()));
    }
}
