//! 適格判定の件数グラフ（SVG）

use jd_tracker_common::ChartSeries;
use leptos::prelude::*;

const PIE_SIZE: f64 = 250.0;
const BAR_WIDTH: f64 = 480.0;
const BAR_HEIGHT: f64 = 200.0;
const BAR_GAP: f64 = 40.0;

/// 円グラフ（メイン画面）
#[component]
pub fn EligibilityPie(series: ChartSeries) -> impl IntoView {
    let r = PIE_SIZE / 2.0;
    let slices = series.pie_slices();
    let legend: Vec<_> = series
        .labels
        .iter()
        .zip(series.colors.iter())
        .zip(series.data.iter())
        .map(|((label, color), value)| (*label, *color, *value))
        .collect();

    view! {
        <div class="chart chart-pie">
            <svg width=PIE_SIZE.to_string() height=PIE_SIZE.to_string() viewBox=format!("0 0 {0} {0}", PIE_SIZE)>
                {slices
                    .into_iter()
                    .map(|slice| view! { <path d=slice.svg_path(r, r, r) fill=slice.color /> })
                    .collect_view()}
            </svg>
            <ul class="chart-legend">
                {legend
                    .into_iter()
                    .map(|(label, color, value)| {
                        view! {
                            <li>
                                <span class="swatch" style=format!("background-color: {}", color)></span>
                                {format!("{} ({})", label, value)}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// 棒グラフ（別表示）
#[component]
pub fn EligibilityBars(series: ChartSeries) -> impl IntoView {
    let bars = series.bars(BAR_HEIGHT);
    let slot = BAR_WIDTH / bars.len().max(1) as f64;
    let label = series.label.unwrap_or_default();
    let total_height = BAR_HEIGHT + 40.0;

    view! {
        <div class="chart chart-bar">
            <p class="chart-label">{label}</p>
            <svg width=BAR_WIDTH.to_string() height=total_height.to_string() viewBox=format!("0 0 {} {}", BAR_WIDTH, total_height)>
                {bars
                    .into_iter()
                    .enumerate()
                    .map(|(i, bar)| {
                        let x = i as f64 * slot + BAR_GAP / 2.0;
                        let width = slot - BAR_GAP;
                        let y = BAR_HEIGHT - bar.height;
                        let center = x + width / 2.0;
                        view! {
                            <g>
                                <rect
                                    x=x.to_string()
                                    y=y.to_string()
                                    width=width.to_string()
                                    height=bar.height.to_string()
                                    fill=bar.color
                                />
                                <text x=center.to_string() y=(BAR_HEIGHT + 16.0).to_string() text-anchor="middle">
                                    {bar.label}
                                </text>
                                <text x=center.to_string() y=(BAR_HEIGHT + 34.0).to_string() text-anchor="middle">
                                    {bar.value.to_string()}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
}
