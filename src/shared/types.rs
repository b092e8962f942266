use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One sensor as returned by the data endpoint on a single poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub aqi: Option<f64>,
    #[serde(default)]
    pub pm25: f64,
    #[serde(default)]
    pub temp: f64,
    #[serde(default)]
    pub hum: f64,
    #[serde(default)]
    pub last_update: String,
    #[serde(default)]
    pub history: Vec<HistoryPoint>,
}

impl SensorSnapshot {
    pub fn position(&self) -> Option<LatLng> {
        Some(LatLng::new(self.lat?, self.lng?))
    }
}

/// A single sample in a sensor's history. Metric values stay raw so any key can be read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub time: String,
    #[serde(flatten)]
    pub values: Map<String, Value>,
}

impl HistoryPoint {
    /// Numeric value for `key`; null, missing or non-numeric fields are gaps.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).and_then(Value::as_f64)
    }
}

/// Full result of one poll. Replaces the previous collection wholesale.
pub type SnapshotCollection = Vec<SensorSnapshot>;

pub fn find_sensor<'a>(sensors: &'a [SensorSnapshot], id: &str) -> Option<&'a SensorSnapshot> {
    sensors.iter().find(|s| s.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
