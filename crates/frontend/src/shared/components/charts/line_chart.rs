use contracts::analytics::TrendPoint;
use leptos::prelude::*;

use super::scale::{nice_max, scaled_height};

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 300.0;
const PLOT_HEIGHT: f64 = 260.0;
const LABEL_Y: f64 = HEIGHT - 6.0;

/// Single-series trend line as plain SVG.
#[component]
pub fn LineChart(#[prop(into)] data: Signal<Vec<TrendPoint>>) -> impl IntoView {
    let geometry = move || {
        let points = data.get();
        if points.is_empty() {
            return (String::new(), vec![]);
        }
        let axis_max = nice_max(points.iter().map(|p| p.value).max().unwrap_or(0) as f64);
        let slot = WIDTH / points.len() as f64;

        let coords: Vec<(String, f64, f64)> = points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let x = slot * i as f64 + slot / 2.0;
                let y = PLOT_HEIGHT - scaled_height(point.value as f64, axis_max, PLOT_HEIGHT);
                (point.label.clone(), x, y)
            })
            .collect();

        let path = coords
            .iter()
            .enumerate()
            .map(|(i, (_, x, y))| {
                let op = if i == 0 { "M" } else { "L" };
                format!("{op}{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" ");

        (path, coords)
    };

    view! {
        <svg
            class="chart chart--line"
            viewBox=format!("0 0 {WIDTH} {HEIGHT}")
            preserveAspectRatio="xMidYMid meet"
            role="img"
        >
            {move || {
                let (path, coords) = geometry();
                view! {
                    <path d=path class="chart__line" fill="none" />
                    {coords
                        .into_iter()
                        .map(|(label, x, y)| view! {
                            <g>
                                <circle cx=x cy=y r="3" class="chart__point" />
                                <text
                                    x=x
                                    y=LABEL_Y
                                    text-anchor="middle"
                                    class="chart__label"
                                >
                                    {label}
                                </text>
                            </g>
                        })
                        .collect_view()}
                }
            }}
        </svg>
    }
}
