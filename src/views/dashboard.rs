use dioxus::logger::tracing::{debug, info};

use crate::client::{ConnectionStatus, SnapshotFeed};
use crate::shared::{
    classify, find_sensor, Classification, DashboardSelection, HistoryQuery, LatLng, Metric,
    SensorSnapshot, SnapshotCollection,
};
use crate::utils::format::{css_percent, format_reading, format_with_unit};
use crate::views::map::{MapSurface, MarkerId};

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarEntry {
    pub id: String,
    pub name: String,
    /// `--` when the sensor reports no AQI.
    pub aqi: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatValue {
    pub metric: Metric,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub sensor_id: String,
    pub name: String,
    pub last_update: String,
    pub stats: [StatValue; 4],
    /// `None` when the sensor has no AQI to classify.
    pub aqi: Option<Classification>,
    pub position: LatLng,
}

impl DetailPanel {
    fn from_sensor(sensor: &SensorSnapshot, position: LatLng) -> Self {
        let stat = |metric: Metric, value: f64| StatValue {
            text: format_with_unit(value, metric.unit()),
            metric,
        };
        Self {
            sensor_id: sensor.id.clone(),
            name: sensor.name.clone(),
            last_update: sensor.last_update.clone(),
            stats: [
                StatValue {
                    metric: Metric::Aqi,
                    text: sensor.aqi.map(format_reading).unwrap_or_else(|| "--".into()),
                },
                stat(Metric::Pm25, sensor.pm25),
                stat(Metric::Temp, sensor.temp),
                stat(Metric::Hum, sensor.hum),
            ],
            aqi: sensor.aqi.filter(|v| !v.is_nan()).map(classify),
            position,
        }
    }

    pub fn bar_percent(&self) -> f64 {
        self.aqi.map(|c| c.percent).unwrap_or(0.0)
    }

    pub fn bar_width(&self) -> String {
        css_percent(self.bar_percent())
    }

    pub fn bar_color(&self) -> &'static str {
        self.aqi.map(|c| c.color()).unwrap_or("#3a3f4b")
    }

    pub fn bar_label(&self) -> &'static str {
        self.aqi.map(|c| c.label()).unwrap_or("Unknown")
    }
}

/// State behind the dashboard page. One instance per mounted view; nothing is global.
#[derive(Debug, Clone)]
pub struct DashboardState<M> {
    feed: SnapshotFeed,
    selection: DashboardSelection,
    map: M,
    marker: MarkerId,
    sidebar: Vec<SidebarEntry>,
    detail: Option<DetailPanel>,
}

impl<M: MapSurface> DashboardState<M> {
    /// The marker is created once, at the map's initial centre, and only moved afterwards.
    pub fn new(bootstrap_sensor: impl Into<String>, mut map: M, initial_marker: LatLng) -> Self {
        let marker = map.create_marker(initial_marker);
        Self {
            feed: SnapshotFeed::default(),
            selection: DashboardSelection::new(bootstrap_sensor),
            map,
            marker,
            sidebar: Vec::new(),
            detail: None,
        }
    }

    /// Absorb a poll result. Failures only dim the indicator; everything rendered stays.
    pub fn apply_poll(&mut self, result: anyhow::Result<SnapshotCollection>) {
        if self.feed.absorb(result).is_some() {
            self.render();
        }
    }

    /// Sidebar click: switch sensors and re-render from the data already held.
    pub fn select(&mut self, sensor_id: &str) {
        info!("[dashboard] selected {}", sensor_id);
        self.selection.select(sensor_id);
        self.render();
    }

    pub fn history_link(&self, metric: &Metric) -> HistoryQuery {
        HistoryQuery::new(self.selection.sensor_id(), metric.key())
    }

    fn render(&mut self) {
        self.render_sidebar();
        self.render_detail();
    }

    fn render_sidebar(&mut self) {
        self.sidebar = self
            .feed
            .sensors()
            .iter()
            .map(|s| SidebarEntry {
                id: s.id.clone(),
                name: s.name.clone(),
                aqi: s.aqi.map(format_reading).unwrap_or_else(|| "--".into()),
                active: self.selection.is_selected(&s.id),
            })
            .collect();
    }

    fn render_detail(&mut self) {
        let Some(sensor) = find_sensor(self.feed.sensors(), self.selection.sensor_id()) else {
            debug!(
                "[dashboard] {} not in latest poll, keeping detail panel",
                self.selection.sensor_id()
            );
            return;
        };
        let Some(position) = sensor.position() else {
            debug!("[dashboard] {} has no coordinates, keeping detail panel", sensor.id);
            return;
        };
        self.detail = Some(DetailPanel::from_sensor(sensor, position));
        self.map.move_marker(self.marker, position);
        self.map.pan_to(position);
    }

    pub fn sidebar(&self) -> &[SidebarEntry] {
        &self.sidebar
    }

    pub fn detail(&self) -> Option<&DetailPanel> {
        self.detail.as_ref()
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn selected(&self) -> &str {
        self.selection.sensor_id()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.feed.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use serde_json::json;

    /// Records every map call so tests can assert the marker is reused.
    #[derive(Debug, Default)]
    struct RecordingMap {
        created: Vec<LatLng>,
        moves: Vec<LatLng>,
        pans: Vec<LatLng>,
    }

    impl MapSurface for RecordingMap {
        fn create_marker(&mut self, at: LatLng) -> MarkerId {
            self.created.push(at);
            MarkerId(self.created.len() - 1)
        }

        fn move_marker(&mut self, _marker: MarkerId, to: LatLng) {
            self.moves.push(to);
        }

        fn pan_to(&mut self, to: LatLng) {
            self.pans.push(to);
        }
    }

    const OSIJEK: LatLng = LatLng::new(45.5550, 18.6761);

    fn sensor(id: &str, aqi: f64, lat: f64) -> SensorSnapshot {
        serde_json::from_value(json!({
            "id": id, "name": format!("Station {id}"), "lat": lat, "lng": 18.6,
            "aqi": aqi, "pm25": aqi / 2.0, "temp": 21.5, "hum": 40,
            "last_update": "12:00:00", "history": []
        }))
        .unwrap()
    }

    fn collection() -> SnapshotCollection {
        vec![
            sensor("sensor_1", 45.0, 45.1),
            sensor("sensor_2", 85.0, 45.2),
            sensor("sensor_3", 30.0, 45.3),
        ]
    }

    fn state() -> DashboardState<RecordingMap> {
        DashboardState::new("sensor_1", RecordingMap::default(), OSIJEK)
    }

    #[test]
    fn example_snapshot_renders_expected_panel() {
        let mut st = state();
        let s1: SensorSnapshot = serde_json::from_value(json!({
            "id": "sensor_1", "aqi": 120, "pm25": 35, "temp": 21.4, "hum": 55,
            "lat": 45.555, "lng": 18.676, "last_update": "12:00:01",
            "history": [{"time": "11:59", "aqi": 110}, {"time": "12:00", "aqi": 120}]
        }))
        .unwrap();
        st.apply_poll(Ok(vec![s1]));

        let panel = st.detail().unwrap();
        assert_eq!(panel.stats[0].text, "120");
        assert_eq!(panel.stats[1].text, "35 µg/m³");
        assert_eq!(panel.stats[2].text, "21.4 °C");
        assert_eq!(panel.stats[3].text, "55 %");
        assert_eq!(panel.bar_label(), "Unhealthy");
        assert_eq!(panel.bar_color(), "#ff9100");
        assert_eq!(panel.bar_width(), "40%");
        assert_eq!(panel.last_update, "12:00:01");
        assert_eq!(st.map().moves, vec![LatLng::new(45.555, 18.676)]);
        assert_eq!(st.map().pans, vec![LatLng::new(45.555, 18.676)]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut st = state();
        st.apply_poll(Ok(collection()));
        let sidebar = st.sidebar().to_vec();
        let detail = st.detail().cloned();
        st.apply_poll(Ok(collection()));
        assert_eq!(st.sidebar(), sidebar.as_slice());
        assert_eq!(st.sidebar().len(), 3);
        assert_eq!(st.detail().cloned(), detail);
    }

    #[test]
    fn marker_is_created_once_and_moved_after() {
        let mut st = state();
        st.apply_poll(Ok(collection()));
        st.select("sensor_3");
        st.apply_poll(Ok(collection()));
        assert_eq!(st.map().created, vec![OSIJEK]);
        assert_eq!(st.map().moves.len(), 3);
        assert_eq!(st.map().moves[2].lat, 45.3);
    }

    #[test]
    fn selection_survives_refresh() {
        let mut st = state();
        st.apply_poll(Ok(collection()));
        st.select("sensor_2");
        assert_eq!(st.detail().unwrap().sensor_id, "sensor_2");

        let mut c2 = collection();
        c2[1].aqi = Some(160.0);
        st.apply_poll(Ok(c2));
        let panel = st.detail().unwrap();
        assert_eq!(panel.sensor_id, "sensor_2");
        assert_eq!(panel.stats[0].text, "160");
        assert_eq!(panel.bar_label(), "Hazardous");
        let active: Vec<_> = st.sidebar().iter().filter(|e| e.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "sensor_2");
    }

    #[test]
    fn click_renders_without_waiting_for_poll() {
        let mut st = state();
        st.apply_poll(Ok(collection()));
        st.select("sensor_3");
        assert_eq!(st.detail().unwrap().name, "Station sensor_3");
        assert!(st.sidebar()[2].active);
        assert!(!st.sidebar()[0].active);
    }

    #[test]
    fn missing_sensor_leaves_detail_untouched() {
        let mut st = state();
        st.apply_poll(Ok(collection()));
        st.select("sensor_9");
        // Selection changed but nothing to show yet: previous panel stays.
        assert_eq!(st.detail().unwrap().sensor_id, "sensor_1");
        let before = st.detail().cloned();
        let moves = st.map().moves.len();

        st.apply_poll(Ok(vec![sensor("sensor_1", 10.0, 45.1)]));
        assert_eq!(st.detail().cloned(), before);
        assert_eq!(st.map().moves.len(), moves);
        assert_eq!(st.selected(), "sensor_9");
        assert_eq!(st.sidebar().len(), 1);
    }

    #[test]
    fn failed_poll_keeps_everything_and_dims_indicator() {
        let mut st = state();
        st.apply_poll(Ok(collection()));
        let sidebar = st.sidebar().to_vec();
        let detail = st.detail().cloned();

        st.apply_poll(Err(anyhow!("connection refused")));
        assert_eq!(st.status(), ConnectionStatus::Degraded);
        assert_eq!(st.sidebar(), sidebar.as_slice());
        assert_eq!(st.detail().cloned(), detail);

        // Clicks still work against the retained collection.
        st.select("sensor_2");
        assert_eq!(st.detail().unwrap().sensor_id, "sensor_2");
    }

    #[test]
    fn absent_aqi_renders_placeholder() {
        let mut st = state();
        let mut s = sensor("sensor_1", 0.0, 45.1);
        s.aqi = None;
        st.apply_poll(Ok(vec![s]));
        assert_eq!(st.sidebar()[0].aqi, "--");
        let panel = st.detail().unwrap();
        assert_eq!(panel.stats[0].text, "--");
        assert_eq!(panel.bar_label(), "Unknown");
        assert_eq!(panel.bar_width(), "0%");
    }

    #[test]
    fn zero_aqi_is_a_reading_not_unknown() {
        let mut st = state();
        st.apply_poll(Ok(vec![sensor("sensor_1", 0.0, 45.1)]));
        assert_eq!(st.sidebar()[0].aqi, "0");
        assert_eq!(st.detail().unwrap().bar_label(), "Good");
    }

    #[test]
    fn sensor_without_coordinates_is_not_rendered() {
        let mut st = state();
        let mut s = sensor("sensor_1", 20.0, 45.1);
        s.lng = None;
        st.apply_poll(Ok(vec![s]));
        assert!(st.detail().is_none());
        assert!(st.map().moves.is_empty());
        assert_eq!(st.sidebar().len(), 1);
    }

    #[test]
    fn history_link_carries_current_selection() {
        let mut st = state();
        st.apply_poll(Ok(collection()));
        st.select("sensor_2");
        let q = st.history_link(&Metric::Temp);
        assert_eq!(q.to_string(), "sensor=sensor_2&type=temp");
    }
}
