use contracts::analytics::PerformancePoint;
use leptos::prelude::*;

use super::scale::{nice_max, scaled_height};

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 300.0;
const PLOT_HEIGHT: f64 = 260.0;
const LABEL_Y: f64 = HEIGHT - 6.0;

struct BarGroup {
    label: String,
    center: f64,
    impressions_x: f64,
    impressions_y: f64,
    impressions_h: f64,
    clicks_x: f64,
    clicks_y: f64,
    clicks_h: f64,
    bar_width: f64,
}

/// Grouped bar chart of impressions and clicks per period, rendered as plain
/// SVG.
#[component]
pub fn BarChart(#[prop(into)] data: Signal<Vec<PerformancePoint>>) -> impl IntoView {
    let bars = move || {
        let points = data.get();
        if points.is_empty() {
            return vec![];
        }
        let axis_max = nice_max(
            points
                .iter()
                .map(|p| p.impressions.max(p.clicks))
                .max()
                .unwrap_or(0) as f64,
        );
        let slot = WIDTH / points.len() as f64;
        let bar_width = (slot * 0.3).min(28.0);

        points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let center = slot * i as f64 + slot / 2.0;
                let impressions_h = scaled_height(point.impressions as f64, axis_max, PLOT_HEIGHT);
                let clicks_h = scaled_height(point.clicks as f64, axis_max, PLOT_HEIGHT);
                BarGroup {
                    label: point.label.clone(),
                    center,
                    impressions_x: center - bar_width - 1.0,
                    impressions_y: PLOT_HEIGHT - impressions_h,
                    impressions_h,
                    clicks_x: center + 1.0,
                    clicks_y: PLOT_HEIGHT - clicks_h,
                    clicks_h,
                    bar_width,
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <svg
            class="chart chart--bar"
            viewBox=format!("0 0 {WIDTH} {HEIGHT}")
            preserveAspectRatio="xMidYMid meet"
            role="img"
        >
            {move || bars()
                .into_iter()
                .map(|group| {
                    view! {
                        <g>
                            <rect
                                x=group.impressions_x
                                y=group.impressions_y
                                width=group.bar_width
                                height=group.impressions_h
                                class="chart__bar chart__bar--impressions"
                            />
                            <rect
                                x=group.clicks_x
                                y=group.clicks_y
                                width=group.bar_width
                                height=group.clicks_h
                                class="chart__bar chart__bar--clicks"
                            />
                            <text
                                x=group.center
                                y=LABEL_Y
                                text-anchor="middle"
                                class="chart__label"
                            >
                                {group.label}
                            </text>
                        </g>
                    }
                })
                .collect_view()}
        </svg>
    }
}
