pub mod dashboard_page;
pub mod gauge;
pub mod history_page;
pub mod sensor_map;
pub mod sensor_panels;
pub mod trend_chart;

pub use dashboard_page::Dashboard;
pub use gauge::{AqiBar, AqiGauge};
pub use history_page::History;
pub use sensor_map::SensorMap;
pub use sensor_panels::{DetailView, SensorList, StatusDot};
pub use trend_chart::TrendChart;
