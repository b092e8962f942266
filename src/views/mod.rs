pub mod chart;
pub mod dashboard;
pub mod history;
pub mod map;

pub use chart::{SvgChartBackend, SvgTrendChart};
pub use dashboard::{DashboardState, DetailPanel, SidebarEntry};
pub use history::HistoryState;
pub use map::{SlippyMap, TileLayer};
