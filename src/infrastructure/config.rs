use crate::application::drawing_tool::{DEFAULT_INITIAL_RADIUS_KM, ModeOptions};
use crate::domain::geometry::Coordinate;
use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "config/map";
pub const ENV_PREFIX: &str = "MISSION_MAP";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct MapConfig {
    #[serde(default)]
    pub map: MapSettings,
    #[serde(default)]
    pub drawing: DrawingSettings,
    #[serde(default)]
    pub backend: BackendSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MapSettings {
    /// Token the map widget presents to its tile provider.
    pub access_token: String,
    pub center: Coordinate,
    pub zoom: f64,
    /// Pixels kept clear around a fitted route.
    pub fit_padding: u32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            center: Coordinate::new(-77.886765, 34.158808),
            zoom: 10.5,
            fit_padding: 50,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DrawingSettings {
    pub initial_radius_km: f64,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            initial_radius_km: DEFAULT_INITIAL_RADIUS_KM,
        }
    }
}

impl DrawingSettings {
    pub fn mode_options(&self) -> ModeOptions {
        ModeOptions {
            initial_radius_km: self.initial_radius_km,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BackendSettings {
    pub base_url: String,
    pub zone_path: String,
    pub token: Option<String>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            zone_path: "/priority-zone/create".to_string(),
            token: None,
        }
    }
}

impl BackendSettings {
    pub fn zone_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.zone_path.trim_start_matches('/')
        )
    }
}

pub fn load_map_config() -> anyhow::Result<MapConfig> {
    load_map_config_from(DEFAULT_CONFIG_PATH)
}

/// Read `path` (any extension the config crate knows, optional) then `MISSION_MAP__*` overrides.
pub fn load_map_config_from(path: &str) -> anyhow::Result<MapConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(environment())
        .build()
        .with_context(|| format!("Failed to load map config from {}", path))?;

    Ok(settings.try_deserialize()?)
}

/// Parse a TOML document, without environment overrides.
pub fn parse_map_config(toml: &str) -> anyhow::Result<MapConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}
