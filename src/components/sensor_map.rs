use dioxus::prelude::*;

use crate::views::map::TILE_SIZE;
use crate::views::SlippyMap;

#[allow(non_snake_case)]
#[component]
pub fn SensorMap(map: SlippyMap) -> Element {
    let (width, height) = map.viewport();
    let center = map.center();
    let caption = format!("{:.4}, {:.4} · z{}", center.lat, center.lng, map.zoom());
    let tiles: Vec<(String, String)> = map
        .visible_tiles()
        .into_iter()
        .map(|t| {
            let style = format!(
                "left:{:.1}px;top:{:.1}px;width:{TILE_SIZE}px;height:{TILE_SIZE}px",
                t.left, t.top
            );
            (t.url, style)
        })
        .collect();
    let pins: Vec<String> = map
        .markers()
        .iter()
        .map(|m| {
            let (x, y) = map.screen_position(m.at);
            format!("left:{x:.1}px;top:{y:.1}px")
        })
        .collect();

    rsx! {
        div { class: "map", style: "width:{width}px;height:{height}px",
            // Tiles are keyed by URL so panning reuses the ones still in view.
            for (url, style) in tiles {
                img { key: "{url}", class: "map-tile", src: "{url}", alt: "", draggable: "false", style: "{style}" }
            }
            for (i, style) in pins.into_iter().enumerate() {
                div { key: "marker-{i}", class: "map-marker", style: "{style}" }
            }
            div { class: "map-caption", "{caption}" }
        }
    }
}
