use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::app::Route;
use crate::client::{fetch_snapshots, run_polling};
use crate::components::{StatusDot, TrendChart};
use crate::config::ClientConfig;
use crate::shared::{HistoryQuery, HistorySelection, SelectionError};
use crate::views::{HistoryState, SvgChartBackend};

/// What the history route mounts for a query. Only `Panel` starts polling.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryMount {
    Panel(HistorySelection),
    Redirect(SelectionError),
}

impl From<&HistoryQuery> for HistoryMount {
    fn from(query: &HistoryQuery) -> Self {
        match HistorySelection::try_from(query) {
            Ok(selection) => HistoryMount::Panel(selection),
            Err(e) => HistoryMount::Redirect(e),
        }
    }
}

/// Entry point of the history route. An incomplete query never mounts the polling panel.
#[allow(non_snake_case)]
#[component]
pub fn History(query: HistoryQuery) -> Element {
    match HistoryMount::from(&query) {
        HistoryMount::Panel(_) => rsx! {
            HistoryPanel { key: "{query}", query: query.clone() }
        },
        HistoryMount::Redirect(e) => rsx! {
            RedirectHome { reason: e.to_string() }
        },
    }
}

#[allow(non_snake_case)]
#[component]
fn RedirectHome(reason: String) -> Element {
    let nav = navigator();
    use_effect(move || {
        info!("[history] {}, redirecting to dashboard", reason);
        nav.replace(Route::Dashboard {});
    });
    rsx! {}
}

#[allow(non_snake_case)]
#[component]
fn HistoryPanel(query: HistoryQuery) -> Element {
    let config = use_context::<ClientConfig>();
    let mut state = use_signal(move || HistoryState::from_query(&query, SvgChartBackend).ok());

    // Poll loop, dropped with this view
    use_future(move || {
        let url = config.api_url.clone();
        let every = config.history_poll;
        async move {
            run_polling("history", every, move || {
                let url = url.clone();
                spawn(async move {
                    let result = fetch_snapshots(&url).await;
                    if let Some(st) = state.write().as_mut() {
                        st.apply_poll(result);
                    }
                });
            })
            .await;
        }
    });

    let guard = state.read();
    let Some(st) = guard.as_ref() else {
        return rsx! {};
    };
    let subtitle = st.subtitle().unwrap_or("Waiting for data...").to_string();

    rsx! {
        div { class: "history",
            header { class: "history-header",
                Link { class: "back", to: Route::Dashboard {}, "← Dashboard" }
                div {
                    h1 { "{st.title()}" }
                    p { class: "history-subtitle", "{subtitle}" }
                }
                StatusDot { status: st.status() }
            }
            section { class: "chart-card",
                if let Some(chart) = st.chart() {
                    TrendChart { chart: chart.clone() }
                } else {
                    div { class: "placeholder", "Loading {st.selection().sensor_id()}..." }
                }
            }
        }
    }
}
