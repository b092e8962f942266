use dioxus::prelude::*;

use crate::components::{Dashboard, History};
use crate::config::ClientConfig;
use crate::shared::HistoryQuery;
use crate::MAIN_CSS;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/history?:..query")]
    History { query: HistoryQuery },
}

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    use_context_provider(ClientConfig::load);

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#0b0e14" }
        document::Meta { name: "color-scheme", content: "dark" }
        Router::<Route> {}
    }
}
