use dioxus::prelude::*;

const TRACK_COLOR: &str = "#1f2433";

fn polar(cx: f32, cy: f32, r: f32, deg: f32) -> (f32, f32) {
    let rad = deg.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

fn arc_path(cx: f32, cy: f32, r: f32, a0: f32, a1: f32) -> String {
    let (x0, y0) = polar(cx, cy, r, a0);
    let (x1, y1) = polar(cx, cy, r, a1);
    let large_arc = if (a1 - a0).abs() >= 180.0 { 1 } else { 0 };
    format!("M {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large_arc} 1 {x1:.3} {y1:.3}")
}

/// Ring gauge for the AQI band. `percent` is the same fill the classification bar uses.
#[allow(non_snake_case)]
#[component]
pub fn AqiGauge(percent: f64, color: String, size: i32, stroke: i32, children: Element) -> Element {
    // 270° sweep opening at the bottom
    let start = 135.0f32;
    let span = 270.0f32;
    let fill = (percent as f32).clamp(0.0, 100.0);

    let c = size as f32 / 2.0;
    let r = c - stroke as f32 / 2.0 - 1.0;
    let track_d = arc_path(c, c, r, start, start + span);
    // Zero-length arcs draw nothing; skip them.
    let progress_d = (fill > 0.0).then(|| arc_path(c, c, r, start, start + span * fill / 100.0));

    rsx! {
        div { class: "gauge", style: "width:{size}px;height:{size}px",
            svg { width: "{size}", height: "{size}", view_box: "0 0 {size} {size}",
                path { d: "{track_d}", fill: "none", stroke: TRACK_COLOR, stroke_width: "{stroke}", stroke_linecap: "round" }
                if let Some(d) = progress_d {
                    path { d: "{d}", fill: "none", stroke: "{color}", stroke_width: "{stroke}", stroke_linecap: "round" }
                }
            }
            div { class: "gauge-center", {children} }
        }
    }
}

/// Horizontal AQI bar.
#[allow(non_snake_case)]
#[component]
pub fn AqiBar(width: String, color: String, label: String) -> Element {
    rsx! {
        div { class: "aqi-bar",
            div { class: "aqi-track",
                div { class: "aqi-fill", style: "width:{width};background:{color}" }
            }
            span { class: "aqi-label", style: "color:{color}", "{label}" }
        }
    }
}
