use std::fmt;

use reqwest::Url;
use thiserror::Error;

use crate::shared::metric::Metric;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("history view opened without a `sensor` parameter")]
    MissingSensor,
    #[error("history view opened without a `type` parameter")]
    MissingMetric,
}

/// Raw query of the history route. Either field may be missing; nothing is validated here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryQuery {
    pub sensor: Option<String>,
    pub metric: Option<String>,
}

impl HistoryQuery {
    pub fn new(sensor: impl Into<String>, metric: impl Into<String>) -> Self {
        Self {
            sensor: Some(sensor.into()),
            metric: Some(metric.into()),
        }
    }
}

impl From<&str> for HistoryQuery {
    fn from(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let mut out = HistoryQuery::default();
        // A fixed base lets `Url` do the percent-decoding.
        let Ok(url) = Url::parse(&format!("http://local/?{query}")) else {
            return out;
        };
        for (k, v) in url.query_pairs() {
            match k.as_ref() {
                "sensor" => out.sensor = Some(v.into_owned()),
                "type" => out.metric = Some(v.into_owned()),
                _ => {}
            }
        }
        out
    }
}

impl fmt::Display for HistoryQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(mut url) = Url::parse("http://local/") else {
            return Err(fmt::Error);
        };
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(sensor) = &self.sensor {
                pairs.append_pair("sensor", sensor);
            }
            if let Some(metric) = &self.metric {
                pairs.append_pair("type", metric);
            }
        }
        f.write_str(url.query().unwrap_or_default())
    }
}

/// Dashboard selection. Survives polls; only changed by user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSelection {
    sensor_id: String,
}

impl DashboardSelection {
    pub fn new(bootstrap: impl Into<String>) -> Self {
        Self {
            sensor_id: bootstrap.into(),
        }
    }

    pub fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    pub fn select(&mut self, sensor_id: impl Into<String>) {
        self.sensor_id = sensor_id.into();
    }

    pub fn is_selected(&self, sensor_id: &str) -> bool {
        self.sensor_id == sensor_id
    }
}

/// History selection, fixed for the lifetime of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySelection {
    sensor_id: String,
    metric: Metric,
}

impl HistorySelection {
    pub fn sensor_id(&self) -> &str {
        &self.sensor_id
    }

    pub fn metric(&self) -> &Metric {
        &self.metric
    }
}

impl TryFrom<&HistoryQuery> for HistorySelection {
    type Error = SelectionError;

    fn try_from(query: &HistoryQuery) -> Result<Self, Self::Error> {
        let sensor_id = query
            .sensor
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(SelectionError::MissingSensor)?;
        let metric = query
            .metric
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(SelectionError::MissingMetric)?;
        Ok(Self {
            sensor_id: sensor_id.to_string(),
            metric: Metric::parse(metric),
        })
    }
}
