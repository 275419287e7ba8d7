use serde::{Deserialize, Serialize};

/// Cómo se aplican respuestas de polling que llegan desordenadas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConsistencyMode {
    /// La última respuesta en llegar gana, aunque sea de una petición más antigua
    #[default]
    LastArrivalWins,
    /// Se descartan respuestas más antiguas que la última aplicada
    DiscardStale,
}

impl ConsistencyMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "last-arrival-wins" | "last_arrival_wins" => Some(Self::LastArrivalWins),
            "discard-stale" | "discard_stale" => Some(Self::DiscardStale),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub poll_interval_seconds: u32,
    pub consistency_mode: ConsistencyMode,
    pub map_config: MapConfig,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            environment: "development".to_string(),
            enable_logging: true,
            poll_interval_seconds: 30,
            consistency_mode: ConsistencyMode::default(),
            map_config: MapConfig::default(),
            ui_config: UIConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 28.5850,
            default_center_lng: 77.3150,
            default_zoom: 13.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    pub marker_size: u32,
    pub route_line_color: String,
    pub route_line_weight: u32,
    pub route_line_dash: String,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            marker_size: 20,
            route_line_color: "#3b82f6".to_string(),
            route_line_weight: 3,
            route_line_dash: "8,4".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            poll_interval_seconds: option_env!("POLL_INTERVAL_SECONDS")
                .and_then(|v| v.parse().ok())
                .filter(|secs: &u32| *secs > 0)
                .unwrap_or(defaults.poll_interval_seconds),
            consistency_mode: option_env!("CONSISTENCY_MODE")
                .and_then(ConsistencyMode::parse)
                .unwrap_or_default(),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("28.5850").parse().unwrap_or(28.5850),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("77.3150").parse().unwrap_or(77.3150),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("13").parse().unwrap_or(13.0),
                tile_url: option_env!("MAP_TILE_URL")
                    .map(str::to_string)
                    .unwrap_or(defaults.map_config.tile_url),
                attribution: defaults.map_config.attribution,
            },
            ui_config: UIConfig {
                marker_size: option_env!("MARKER_SIZE")
                    .unwrap_or("20").parse().unwrap_or(20),
                route_line_color: option_env!("ROUTE_LINE_COLOR")
                    .map(str::to_string)
                    .unwrap_or(defaults.ui_config.route_line_color),
                route_line_weight: option_env!("ROUTE_LINE_WEIGHT")
                    .unwrap_or("3").parse().unwrap_or(3),
                route_line_dash: option_env!("ROUTE_LINE_DASH")
                    .map(str::to_string)
                    .unwrap_or(defaults.ui_config.route_line_dash),
            },
        }
    }

    /// URL absoluta de un endpoint del backend (`/api/...`)
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }

    /// Intervalo de polling en milisegundos (para gloo_timers)
    pub fn poll_interval_ms(&self) -> u32 {
        self.poll_interval_seconds.saturating_mul(1000)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
