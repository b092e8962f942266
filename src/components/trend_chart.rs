use dioxus::prelude::*;

use crate::utils::format::format_reading;
use crate::views::chart::{Redraw, CHART_HEIGHT, CHART_WIDTH};
use crate::views::SvgTrendChart;

/// Live trend line. Re-rendering diffs into the same SVG nodes; no transitions are applied.
#[allow(non_snake_case)]
#[component]
pub fn TrendChart(chart: SvgTrendChart) -> Element {
    let geo = chart.geometry();
    let cfg = chart.config();
    let accent = cfg.accent.clone();
    let fill = cfg.fill_color();
    let radius = cfg.point_radius;
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");
    let revision = chart.revision();
    // Only the first paint fades in; live refreshes repaint immediately.
    let class = match chart.last_redraw() {
        Some(Redraw::Animated) => "trend-chart intro",
        _ => "trend-chart",
    };
    // Hovered point index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);

    let tooltip = hovered().and_then(|i| {
        let (x, y) = *geo.points.get(i)?;
        let (label, value) = chart
            .labels()
            .iter()
            .zip(chart.values())
            .filter_map(|(l, v)| v.map(|v| (l, v)))
            .nth(i)?;
        let text = format!("{label}: {}", format_reading(value));
        let w = text.chars().count() as f64 * 7.0 + 16.0;
        let tx = (x - w / 2.0).min(CHART_WIDTH - w - 4.0).max(4.0);
        let ty = (y - 36.0).max(4.0);
        Some((tx, ty, w, text))
    });

    rsx! {
        svg { class: "{class}", view_box: "{view_box}", width: "100%", "data-revision": "{revision}",
            for (i, (y, label)) in geo.y_ticks.iter().cloned().enumerate() {
                g { key: "y-{i}",
                    line { x1: "48", y1: "{y}", x2: "{CHART_WIDTH - 16.0}", y2: "{y}", stroke: "rgba(255,255,255,0.1)", stroke_width: "1" }
                    text { x: "40", y: "{y + 4.0}", text_anchor: "end", class: "axis-label", "{label}" }
                }
            }
            for (i, d) in geo.area_paths.iter().enumerate() {
                path { key: "area-{i}", d: "{d}", fill: "{fill}", stroke: "none" }
            }
            for (i, d) in geo.line_paths.iter().enumerate() {
                path { key: "line-{i}", d: "{d}", fill: "none", stroke: "{accent}", stroke_width: "2" }
            }
            for (i, (x, y)) in geo.points.iter().copied().enumerate() {
                circle {
                    key: "pt-{i}", cx: "{x}", cy: "{y}", r: "{radius}", fill: "{accent}",
                    onmouseenter: move |_| hovered.set(Some(i)),
                    onmouseleave: move |_| hovered.set(None),
                    ontouchstart: move |_| hovered.set(Some(i)),
                    ontouchend: move |_| hovered.set(None),
                }
            }
            for (i, (x, label)) in geo.x_labels.iter().cloned().enumerate() {
                text { key: "x-{i}", x: "{x}", y: "{geo.baseline + 20.0}", text_anchor: "middle", class: "axis-label", "{label}" }
            }
            if let Some((tx, ty, w, text)) = tooltip {
                g { key: "tooltip",
                    rect { x: "{tx}", y: "{ty}", width: "{w}", height: "24", rx: "6", fill: "#0f172a", stroke: "#334155", stroke_width: "1" }
                    text { x: "{tx + 8.0}", y: "{ty + 16.0}", class: "tooltip-text", "{text}" }
                }
            }
        }
    }
}
