use dioxus::prelude::*;

mod app;
mod client;
mod components;
mod config;
mod shared;
mod utils;
mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "desktop")]
    client::init_tracing();

    dioxus::launch(app::App);
}
