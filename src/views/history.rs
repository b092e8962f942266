use dioxus::logger::tracing::{debug, info};

use crate::client::{ConnectionStatus, SnapshotFeed};
use crate::shared::{
    find_sensor, HistoryQuery, HistorySelection, Metric, SelectionError, SensorSnapshot,
    SnapshotCollection,
};
use crate::views::chart::{ChartBackend, ChartConfig, ChartHandle, Redraw};

/// State behind the history page: one sensor and one metric for the view's whole lifetime.
pub struct HistoryState<B: ChartBackend> {
    selection: HistorySelection,
    feed: SnapshotFeed,
    backend: B,
    chart: Option<B::Handle>,
    subtitle: Option<String>,
}

impl<B: ChartBackend> HistoryState<B> {
    /// Fails when the route is missing `sensor` or `type`; the caller redirects instead of polling.
    pub fn from_query(query: &HistoryQuery, backend: B) -> Result<Self, SelectionError> {
        let selection = HistorySelection::try_from(query)?;
        info!(
            "[history] tracking {} / {}",
            selection.sensor_id(),
            selection.metric()
        );
        Ok(Self {
            selection,
            feed: SnapshotFeed::default(),
            backend,
            chart: None,
            subtitle: None,
        })
    }

    pub fn apply_poll(&mut self, result: anyhow::Result<SnapshotCollection>) {
        let Some(sensors) = self.feed.absorb(result) else {
            return;
        };
        let Some(sensor) = find_sensor(sensors, self.selection.sensor_id()) else {
            debug!(
                "[history] {} not in latest poll, keeping chart",
                self.selection.sensor_id()
            );
            return;
        };
        let (labels, values) = series(sensor, self.selection.metric());
        self.subtitle = Some(format!("Real-time updates for {}", sensor.name));

        match self.chart.as_mut() {
            Some(chart) => {
                chart.set_data(labels, values);
                chart.redraw(Redraw::Immediate);
            }
            None => {
                let metric = self.selection.metric();
                let config = ChartConfig::trend(metric.key().to_uppercase(), metric.accent())
                    .with_data(labels, values);
                self.chart = Some(self.backend.create(config));
            }
        }
    }

    pub fn selection(&self) -> &HistorySelection {
        &self.selection
    }

    pub fn title(&self) -> &'static str {
        self.selection.metric().title()
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn chart(&self) -> Option<&B::Handle> {
        self.chart.as_ref()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.feed.status()
    }
}

/// Labels and metric values from a sensor's history, oldest first.
fn series(sensor: &SensorSnapshot, metric: &Metric) -> (Vec<String>, Vec<Option<f64>>) {
    sensor
        .history
        .iter()
        .map(|p| (p.time.clone(), p.value(metric.key())))
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::chart::{SvgChartBackend, SvgTrendChart};
    use anyhow::anyhow;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Backend that counts how many handles it has built.
    #[derive(Default)]
    struct CountingBackend {
        created: Rc<Cell<usize>>,
    }

    impl ChartBackend for CountingBackend {
        type Handle = SvgTrendChart;

        fn create(&mut self, config: ChartConfig) -> SvgTrendChart {
            self.created.set(self.created.get() + 1);
            SvgTrendChart::new(config)
        }
    }

    fn poll(points: &[(&str, f64)]) -> SnapshotCollection {
        let history: Vec<_> = points
            .iter()
            .map(|(t, v)| json!({ "time": t, "aqi": v, "pm25": v / 2.0 }))
            .collect();
        vec![
            serde_json::from_value(json!({ "id": "sensor_2", "name": "Retfala", "history": [] }))
                .unwrap(),
            serde_json::from_value(
                json!({ "id": "sensor_1", "name": "Centar Osijek", "history": history }),
            )
            .unwrap(),
        ]
    }

    fn counting(query: &str) -> (HistoryState<CountingBackend>, Rc<Cell<usize>>) {
        let backend = CountingBackend::default();
        let created = backend.created.clone();
        let st = HistoryState::from_query(&HistoryQuery::from(query), backend).unwrap();
        (st, created)
    }

    #[test]
    fn missing_sensor_parameter_is_a_precondition_failure() {
        let err = HistoryState::from_query(&HistoryQuery::from("type=aqi"), SvgChartBackend)
            .err()
            .unwrap();
        assert_eq!(err, SelectionError::MissingSensor);
    }

    #[test]
    fn chart_is_created_once_then_updated_in_place() {
        let (mut st, created) = counting("sensor=sensor_1&type=aqi");
        assert!(st.chart().is_none());

        st.apply_poll(Ok(poll(&[("11:59", 110.0), ("12:00", 120.0)])));
        assert_eq!(created.get(), 1);
        let first: *const SvgTrendChart = st.chart().unwrap();
        assert_eq!(st.chart().unwrap().labels(), ["11:59", "12:00"]);

        st.apply_poll(Ok(poll(&[("11:59", 110.0), ("12:00", 120.0), ("12:01", 130.0)])));
        assert_eq!(created.get(), 1);
        let chart = st.chart().unwrap();
        assert!(std::ptr::eq(first, chart));
        assert_eq!(chart.labels(), ["11:59", "12:00", "12:01"]);
        assert_eq!(chart.values(), [Some(110.0), Some(120.0), Some(130.0)]);
        assert_eq!(chart.revision(), 1);
        assert_eq!(chart.last_redraw(), Some(Redraw::Immediate));
    }

    #[test]
    fn chart_uses_metric_styling() {
        let (mut st, _) = counting("sensor=sensor_1&type=pm25");
        st.apply_poll(Ok(poll(&[("12:00", 40.0)])));
        let cfg = st.chart().unwrap().config();
        assert_eq!(cfg.series_label, "PM25");
        assert_eq!(cfg.accent, "#ff9100");
        assert!(cfg.fill);
        assert_eq!(cfg.tension, 0.4);
        assert_eq!(cfg.point_radius, 4.0);
        assert_eq!(cfg.values, vec![Some(20.0)]);
        assert_eq!(st.title(), "PM2.5 Measurement Trend");
        assert_eq!(st.subtitle(), Some("Real-time updates for Centar Osijek"));
    }

    #[test]
    fn absent_sensor_skips_render() {
        let (mut st, created) = counting("sensor=sensor_1&type=aqi");
        st.apply_poll(Ok(poll(&[("12:00", 50.0)])));
        let before = st.chart().unwrap().clone();

        let only_other = vec![serde_json::from_value(json!({ "id": "sensor_2" })).unwrap()];
        st.apply_poll(Ok(only_other));
        assert_eq!(created.get(), 1);
        assert_eq!(st.chart().unwrap(), &before);
    }

    #[test]
    fn failed_poll_keeps_chart() {
        let (mut st, _) = counting("sensor=sensor_1&type=aqi");
        st.apply_poll(Ok(poll(&[("12:00", 50.0)])));
        st.apply_poll(Err(anyhow!("timed out")));
        assert_eq!(st.status(), ConnectionStatus::Degraded);
        assert_eq!(st.chart().unwrap().values(), [Some(50.0)]);
    }

    #[test]
    fn no_poll_yet_means_no_chart() {
        let (mut st, created) = counting("sensor=sensor_1&type=aqi");
        st.apply_poll(Err(anyhow!("connection refused")));
        assert!(st.chart().is_none());
        assert_eq!(created.get(), 0);
        assert_eq!(st.subtitle(), None);
    }

    #[test]
    fn empty_history_creates_empty_chart() {
        let (mut st, created) = counting("sensor=sensor_2&type=temp");
        st.apply_poll(Ok(poll(&[])));
        assert_eq!(created.get(), 1);
        assert!(st.chart().unwrap().labels().is_empty());
        assert_eq!(st.title(), "Temperature Trend");
    }

    #[test]
    fn unknown_metric_gives_gaps_and_generic_title() {
        let (mut st, _) = counting("sensor=sensor_1&type=co2");
        st.apply_poll(Ok(poll(&[("12:00", 50.0), ("12:01", 52.0)])));
        let chart = st.chart().unwrap();
        assert_eq!(chart.values(), [None, None]);
        assert_eq!(chart.config().accent, "#ffffff");
        assert_eq!(st.title(), "Measurement Trend");
    }
}
