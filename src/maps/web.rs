use serde_json::json;
use crate::config::MapConfig;
use crate::models::Coordinates;
use crate::utils::leaflet_ffi::{self, to_js, Layer, LeafletMap};
use super::{Bounds, MapError, MapSurface, MarkerSpec, PolylineSpec};

/// Superficie de mapa para web usando Leaflet + tiles OpenStreetMap
pub struct LeafletMapSurface {
    map: LeafletMap,
}

impl LeafletMapSurface {
    /// Inicializar el mapa en el contenedor indicado
    pub fn initialize(container_id: &str, config: &MapConfig) -> Result<Self, MapError> {
        log::info!("🗺️ Inicializando Leaflet en #{}...", container_id);

        let center = to_js(&[config.default_center_lat, config.default_center_lng])
            .map_err(|e| MapError::Unknown(format!("{:?}", e)))?;
        let map = leaflet_ffi::create_map(container_id);
        map.set_view(&center, config.default_zoom);

        let tile_options = to_js(&json!({ "attribution": config.attribution }))
            .map_err(|e| MapError::Unknown(format!("{:?}", e)))?;
        leaflet_ffi::tile_layer(&config.tile_url, &tile_options).add_to(&map);

        log::info!("✅ Mapa web inicializado correctamente");
        Ok(Self { map })
    }

    /// Destruir el mapa (al salir de la vista)
    pub fn destroy(&self) {
        self.map.remove();
    }
}

fn check(position: &Coordinates) -> Result<(), MapError> {
    if position.latitude.is_finite() && position.longitude.is_finite() {
        Ok(())
    } else {
        Err(MapError::InvalidCoordinates)
    }
}

fn js_err(e: wasm_bindgen::JsValue) -> MapError {
    MapError::Unknown(format!("{:?}", e))
}

impl MapSurface for LeafletMapSurface {
    type Marker = Layer;
    type Polyline = Layer;

    fn add_marker(&mut self, marker: &MarkerSpec) -> Result<Layer, MapError> {
        check(&marker.position)?;

        let size = marker.size;
        let icon = leaflet_ffi::div_icon(&to_js(&json!({
            "html": format!(
                "<div style=\"background:{};width:{}px;height:{}px;border-radius:50%;border:3px solid white;box-shadow:0 2px 6px rgba(0,0,0,0.5);\"></div>",
                marker.color, size, size
            ),
            "iconSize": [size, size],
            "className": "",
        })).map_err(js_err)?);

        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &"icon".into(), &icon).map_err(js_err)?;

        let lat_lng = to_js(&marker.position.as_lat_lng()).map_err(js_err)?;
        let layer = leaflet_ffi::marker(&lat_lng, &options)
            .add_to(&self.map)
            .bind_popup(&marker.popup_html);
        Ok(layer)
    }

    fn remove_marker(&mut self, marker: Layer) {
        self.map.remove_layer(&marker);
    }

    fn add_polyline(&mut self, polyline: &PolylineSpec) -> Result<Layer, MapError> {
        if polyline.path.is_empty() {
            return Err(MapError::EmptyPath);
        }
        polyline.path.iter().try_for_each(check)?;

        let path: Vec<[f64; 2]> = polyline.path.iter().map(Coordinates::as_lat_lng).collect();
        let mut options = json!({
            "color": polyline.color,
            "weight": polyline.weight,
        });
        if let Some(dash) = &polyline.dash_array {
            options["dashArray"] = json!(dash);
        }

        let layer = leaflet_ffi::polyline(
            &to_js(&path).map_err(js_err)?,
            &to_js(&options).map_err(js_err)?,
        );
        Ok(layer.add_to(&self.map))
    }

    fn remove_polyline(&mut self, polyline: Layer) {
        self.map.remove_layer(&polyline);
    }

    fn fit_bounds(&mut self, bounds: &Bounds) -> Result<(), MapError> {
        let js_bounds = to_js(&bounds.as_lat_lng_pairs()).map_err(js_err)?;
        self.map.fit_bounds(&js_bounds);
        Ok(())
    }
}
