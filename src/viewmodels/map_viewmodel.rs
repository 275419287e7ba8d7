// ============================================================================
// MAP VIEWMODEL - Marcadores de contenedores + polilínea de ruta
// ============================================================================
// Invariantes:
// - `markers` contiene exactamente los contenedores del último snapshot
// - como mucho una polilínea viva
// ============================================================================

use std::collections::HashMap;
use crate::config::UIConfig;
use crate::maps::{Bounds, MapError, MapSurface, MarkerSpec, PolylineSpec};
use crate::models::{Bin, BinId, RouteStop};
use crate::utils::{escape_html, format_fill};

/// Estado visible de la ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOverlay {
    Idle,
    RouteDrawn,
}

pub struct MapViewModel<S: MapSurface> {
    surface: S,
    style: UIConfig,
    markers: HashMap<BinId, S::Marker>,
    route: Option<S::Polyline>,
}

impl<S: MapSurface> MapViewModel<S> {
    pub fn new(surface: S, style: UIConfig) -> Self {
        Self {
            surface,
            style,
            markers: HashMap::new(),
            route: None,
        }
    }

    /// Descripción del marcador de un contenedor (color y popup según severidad)
    pub fn marker_for(bin: &Bin, size: u32) -> MarkerSpec {
        let tier = bin.severity();
        MarkerSpec {
            position: bin.coordinates,
            color: tier.color().to_string(),
            size,
            popup_html: format!(
                "<b>{}</b><br>{}<br>Fill: <b>{}%</b><br>Status: {}",
                escape_html(&bin.name),
                escape_html(&bin.location),
                format_fill(bin.fill_level),
                tier.status_text(),
            ),
        }
    }

    /// Resincronización completa: quita todos los marcadores y agrega uno por contenedor
    pub fn refresh_markers(&mut self, bins: &[Bin]) {
        for (_, marker) in self.markers.drain() {
            self.surface.remove_marker(marker);
        }

        for bin in bins {
            let spec = Self::marker_for(bin, self.style.marker_size);
            match self.surface.add_marker(&spec) {
                Ok(marker) => {
                    // Id repetido en el snapshot: el último gana, el anterior sale del mapa
                    if let Some(previous) = self.markers.insert(bin.id, marker) {
                        log::warn!("⚠️ Contenedor {} duplicado en el snapshot", bin.id);
                        self.surface.remove_marker(previous);
                    }
                }
                Err(e) => log::error!("❌ No se pudo agregar el marcador de {}: {}", bin.id, e),
            }
        }

        log::debug!("📍 {} marcadores en el mapa", self.markers.len());
    }

    /// Dibuja la ruta en orden; la anterior se retira antes de agregar la nueva
    pub fn draw_route(&mut self, stops: &[RouteStop]) -> Result<(), MapError> {
        self.clear_route();

        let path: Vec<_> = stops.iter().map(|stop| stop.coordinates).collect();
        let bounds = Bounds::enclosing(&path).ok_or(MapError::EmptyPath)?;

        let spec = PolylineSpec {
            path,
            color: self.style.route_line_color.clone(),
            weight: self.style.route_line_weight,
            dash_array: Some(self.style.route_line_dash.clone()).filter(|d| !d.is_empty()),
        };
        let polyline = self.surface.add_polyline(&spec)?;
        self.route = Some(polyline);

        self.surface.fit_bounds(&bounds)?;
        log::info!("🛣️ Ruta dibujada con {} paradas", stops.len());
        Ok(())
    }

    /// Vuelve a Idle
    pub fn clear_route(&mut self) {
        if let Some(polyline) = self.route.take() {
            self.surface.remove_polyline(polyline);
            log::debug!("🧹 Ruta anterior retirada");
        }
    }

    /// Retira todo lo dibujado (fin de la sesión)
    pub fn teardown(&mut self) {
        self.refresh_markers(&[]);
        self.clear_route();
    }

    pub fn route_overlay(&self) -> RouteOverlay {
        if self.route.is_some() {
            RouteOverlay::RouteDrawn
        } else {
            RouteOverlay::Idle
        }
    }

    pub fn marker_ids(&self) -> Vec<BinId> {
        let mut ids: Vec<BinId> = self.markers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
