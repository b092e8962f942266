use dioxus::prelude::*;

use crate::client::ConnectionStatus;
use crate::components::{AqiBar, AqiGauge};
use crate::shared::Metric;
use crate::views::{DetailPanel, SidebarEntry};

#[allow(non_snake_case)]
#[component]
pub fn StatusDot(status: ConnectionStatus) -> Element {
    rsx! {
        div { class: "status", style: "opacity:{status.opacity()}",
            span { class: "status-dot" }
            span { "{status.label()}" }
        }
    }
}

/// Sensor list. Rebuilt from scratch on every render, one row per sensor.
#[allow(non_snake_case)]
#[component]
pub fn SensorList(entries: Vec<SidebarEntry>, on_select: EventHandler<String>) -> Element {
    rsx! {
        ul { class: "sensor-nav",
            for entry in entries {
                li {
                    key: "{entry.id}",
                    class: if entry.active { "active" } else { "" },
                    onclick: {
                        let id = entry.id.clone();
                        move |_| on_select.call(id.clone())
                    },
                    div { class: "sensor-name", "{entry.name}" }
                    div { class: "sensor-aqi", "AQI: {entry.aqi}" }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn DetailView(panel: DetailPanel, on_history: EventHandler<Metric>) -> Element {
    let aqi_text = panel.stats[0].text.clone();
    rsx! {
        header { class: "detail-header",
            h2 { "{panel.name}" }
            span { class: "last-update", "Last update: {panel.last_update}" }
        }
        section { class: "aqi-card",
            AqiGauge {
                percent: panel.bar_percent(),
                color: panel.bar_color().to_string(),
                size: 180,
                stroke: 12,
                div { class: "gauge-value", "{aqi_text}" }
            }
            AqiBar {
                width: panel.bar_width(),
                color: panel.bar_color().to_string(),
                label: panel.bar_label().to_string(),
            }
        }
        section { class: "stats",
            for stat in panel.stats.iter().cloned() {
                div {
                    key: "{stat.metric}",
                    class: "stat-card",
                    title: "Open {stat.metric.caption()} history",
                    onclick: {
                        let metric = stat.metric.clone();
                        move |_| on_history.call(metric.clone())
                    },
                    div { class: "stat-caption", "{stat.metric.caption()}" }
                    div { class: "stat-value", "{stat.text}" }
                }
            }
        }
    }
}
