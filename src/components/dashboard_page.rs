use dioxus::prelude::*;

use crate::app::Route;
use crate::client::{fetch_snapshots, run_polling};
use crate::components::{DetailView, SensorList, SensorMap, StatusDot};
use crate::config::ClientConfig;
use crate::shared::Metric;
use crate::views::DashboardState;

#[allow(non_snake_case)]
#[component]
pub fn Dashboard() -> Element {
    let config = use_context::<ClientConfig>();
    let mut state = use_signal({
        let config = config.clone();
        move || {
            DashboardState::new(
                config.bootstrap_sensor.clone(),
                config.build_map(),
                config.map_center,
            )
        }
    });

    // Poll loop, dropped with this view
    use_future(move || {
        let url = config.api_url.clone();
        let every = config.dashboard_poll;
        async move {
            run_polling("dashboard", every, move || {
                let url = url.clone();
                spawn(async move {
                    let result = fetch_snapshots(&url).await;
                    state.write().apply_poll(result);
                });
            })
            .await;
        }
    });

    let nav = navigator();
    let st = state.read();

    rsx! {
        div { class: "layout",
            aside { class: "sidebar",
                div { class: "brand",
                    h1 { "AirWatch" }
                    StatusDot { status: st.status() }
                }
                SensorList {
                    entries: st.sidebar().to_vec(),
                    on_select: move |id: String| state.write().select(&id),
                }
            }
            main { class: "content",
                {
                    match st.detail() {
                        Some(panel) => rsx! {
                            DetailView {
                                panel: panel.clone(),
                                on_history: move |metric: Metric| {
                                    let query = state.read().history_link(&metric);
                                    nav.push(Route::History { query });
                                },
                            }
                        },
                        // Nothing rendered until the selected sensor shows up in a poll
                        None => rsx! {
                            div { class: "placeholder",
                                p { "Waiting for sensor {st.selected()}..." }
                            }
                        },
                    }
                }
                SensorMap { map: (*st).map().clone() }
            }
        }
    }
}
