use crate::models::Coordinates;

/// Primitivas que el panel necesita del proveedor de mapas.
///
/// Cada alta devuelve un handle propio de la plataforma; el llamador es dueño
/// del handle y lo devuelve al quitar la capa.
pub trait MapSurface {
    type Marker;
    type Polyline;

    /// Agregar un marcador al mapa
    fn add_marker(&mut self, marker: &MarkerSpec) -> Result<Self::Marker, MapError>;

    /// Remover un marcador previamente agregado
    fn remove_marker(&mut self, marker: Self::Marker);

    /// Agregar una polilínea (ruta)
    fn add_polyline(&mut self, polyline: &PolylineSpec) -> Result<Self::Polyline, MapError>;

    /// Remover una polilínea previamente agregada
    fn remove_polyline(&mut self, polyline: Self::Polyline);

    /// Ajustar la vista a una región
    fn fit_bounds(&mut self, bounds: &Bounds) -> Result<(), MapError>;
}

/// Marcador circular coloreado con popup HTML
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: Coordinates,
    pub color: String,
    pub size: u32,
    pub popup_html: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolylineSpec {
    pub path: Vec<Coordinates>,
    pub color: String,
    pub weight: u32,
    pub dash_array: Option<String>,
}

/// Rectángulo geográfico (sur-oeste / norte-este)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: Coordinates,
    pub north_east: Coordinates,
}

impl Bounds {
    /// Región mínima que contiene todos los puntos; `None` si no hay puntos
    pub fn enclosing<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Coordinates>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut bounds = Bounds { south_west: first, north_east: first };

        for point in iter {
            bounds.south_west.latitude = bounds.south_west.latitude.min(point.latitude);
            bounds.south_west.longitude = bounds.south_west.longitude.min(point.longitude);
            bounds.north_east.latitude = bounds.north_east.latitude.max(point.latitude);
            bounds.north_east.longitude = bounds.north_east.longitude.max(point.longitude);
        }

        Some(bounds)
    }

    /// `[[south, west], [north, east]]`, formato de Leaflet
    pub fn as_lat_lng_pairs(&self) -> [[f64; 2]; 2] {
        [self.south_west.as_lat_lng(), self.north_east.as_lat_lng()]
    }
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    InvalidCoordinates,
    EmptyPath,
    Unknown(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::InvalidCoordinates => write!(f, "Invalid coordinates"),
            MapError::EmptyPath => write!(f, "Polyline needs at least one point"),
            MapError::Unknown(msg) => write!(f, "Unknown error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}
