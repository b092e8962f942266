pub mod classify;
pub mod metric;
pub mod selection;
pub mod types;

pub use classify::{classify, Classification};
pub use metric::Metric;
pub use selection::{DashboardSelection, HistoryQuery, HistorySelection, SelectionError};
pub use types::{find_sensor, LatLng, SensorSnapshot, SnapshotCollection};
