// ============================================================================
// CONFIG - Ajustes de compilación (ver build.rs / .env.example)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    /// Vacío significa mismo origen que la página.
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://127.0.0.1:3000".to_string(),
            backend_url_production: String::new(),
            environment: "development".to_string(),
            enable_logging: true,
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub container_id: String,
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container_id: "pet-map".to_string(),
            default_center_lat: 53.217641,
            default_center_lng: 6.566044,
            default_zoom: 13.0,
        }
    }
}

impl AppConfig {
    /// Lee los valores fijados al compilar, con los defaults como respaldo
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            map_config: MapConfig {
                container_id: option_env!("MAP_CONTAINER_ID")
                    .map(str::to_string)
                    .unwrap_or(defaults.map_config.container_id),
                default_center_lat: parse_or(
                    option_env!("DEFAULT_MAP_CENTER_LAT"),
                    defaults.map_config.default_center_lat,
                ),
                default_center_lng: parse_or(
                    option_env!("DEFAULT_MAP_CENTER_LNG"),
                    defaults.map_config.default_center_lng,
                ),
                default_zoom: parse_or(
                    option_env!("DEFAULT_MAP_ZOOM"),
                    defaults.map_config.default_zoom,
                ),
            },
        }
    }

    /// URL base del backend para el entorno actual, sin barra final
    pub fn backend_url(&self) -> &str {
        let url = match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        };
        url.trim_end_matches('/')
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
