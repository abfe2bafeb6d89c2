//! SVG pie chart for the macro breakdown.

use leptos::prelude::*;
use macrolingo_core::analyzer::{PieChart, SliceArc};

const SIZE: f64 = 200.0;
const RADIUS: f64 = 90.0;

#[component]
pub fn MacroChart(chart: ReadSignal<Option<PieChart>>) -> impl IntoView {
    view! {
        <div class="macro-chart">
            {move || match chart.get() {
                None => view! { <p class="chart-empty">"Analyze a photo to see the breakdown."</p> }.into_any(),
                Some(pie) => {
                    let arcs = pie.arcs();
                    let legend = pie.slices.clone();
                    view! {
                        <svg class="pie" viewBox={format!("0 0 {} {}", SIZE, SIZE)}>
                            <circle class="pie-track" cx={SIZE / 2.0} cy={SIZE / 2.0} r=RADIUS />
                            {arcs
                                .into_iter()
                                .map(|arc| view! { <SliceShape arc=arc /> })
                                .collect_view()}
                        </svg>
                        <ul class="chart-legend">
                            {legend
                                .into_iter()
                                .map(|slice| view! {
                                    <li class="legend-item">
                                        <span class="legend-swatch" style:background-color=slice.color></span>
                                        {slice.label}
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn SliceShape(arc: SliceArc) -> impl IntoView {
    let center = SIZE / 2.0;
    if arc.share >= 1.0 {
        view! { <circle cx=center cy=center r=RADIUS fill=arc.color /> }.into_any()
    } else {
        let d = arc_path(&arc, center, center, RADIUS);
        view! { <path d=d fill=arc.color /> }.into_any()
    }
}

/// SVG path for a wedge; angles run clockwise from 12 o'clock.
fn arc_path(arc: &SliceArc, cx: f64, cy: f64, r: f64) -> String {
    let point = |angle: f64| (cx + r * angle.sin(), cy - r * angle.cos());
    let (x1, y1) = point(arc.start_angle);
    let (x2, y2) = point(arc.end_angle);
    let large_arc = if arc.end_angle - arc.start_angle > std::f64::consts::PI { 1 } else { 0 };
    format!(
        "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
    )
}
