use std::time::Duration;

use dioxus::logger::tracing::warn;

use crate::shared::LatLng;
use crate::views::{SlippyMap, TileLayer};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/data";
pub const DEFAULT_TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";

/// Client settings, shared with the component tree as context.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub dashboard_poll: Duration,
    pub history_poll: Duration,
    pub bootstrap_sensor: String,
    pub map_center: LatLng,
    pub map_zoom: u8,
    pub tile_url: String,
    pub tile_max_zoom: u8,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            dashboard_poll: Duration::from_millis(3_000),
            history_poll: Duration::from_millis(5_000),
            bootstrap_sensor: "sensor_1".into(),
            map_center: LatLng::new(45.5550, 18.6761),
            map_zoom: 13,
            tile_url: DEFAULT_TILE_URL.into(),
            tile_max_zoom: 19,
        }
    }
}

impl ClientConfig {
    /// Native builds read the environment (and `.env`); web builds use values baked in at compile time.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            Self::from_lookup(|key| std::env::var(key).ok())
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::from_lookup(|key| {
                let baked = match key {
                    "AIRWATCH_API_URL" => option_env!("AIRWATCH_API_URL"),
                    "AIRWATCH_DASHBOARD_POLL_MS" => option_env!("AIRWATCH_DASHBOARD_POLL_MS"),
                    "AIRWATCH_HISTORY_POLL_MS" => option_env!("AIRWATCH_HISTORY_POLL_MS"),
                    "AIRWATCH_BOOTSTRAP_SENSOR" => option_env!("AIRWATCH_BOOTSTRAP_SENSOR"),
                    "AIRWATCH_TILE_URL" => option_env!("AIRWATCH_TILE_URL"),
                    _ => None,
                };
                baked.map(str::to_string)
            })
        }
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let millis = |key: &str, fallback: Duration| match lookup(key) {
            None => fallback,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    warn!("[config] {}={:?} is not a positive integer, using default", key, raw);
                    fallback
                }
            },
        };
        Self {
            dashboard_poll: millis("AIRWATCH_DASHBOARD_POLL_MS", defaults.dashboard_poll),
            history_poll: millis("AIRWATCH_HISTORY_POLL_MS", defaults.history_poll),
            api_url: lookup("AIRWATCH_API_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_url),
            bootstrap_sensor: lookup("AIRWATCH_BOOTSTRAP_SENSOR")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.bootstrap_sensor),
            tile_url: lookup("AIRWATCH_TILE_URL")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.tile_url),
            ..defaults
        }
    }

    pub fn build_map(&self) -> SlippyMap {
        SlippyMap::new(
            self.map_center,
            self.map_zoom,
            TileLayer::new(self.tile_url.clone(), self.tile_max_zoom),
        )
        .with_viewport(720.0, 320.0)
    }
}
