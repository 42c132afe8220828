//! SVG rendering of a `ChartSpec`. No axes or legends; labels sit under
//! each bar or point, pie slices carry their label as a tooltip.

use std::f64::consts::PI;

use inventory_common::view::format::format_amount;
use inventory_common::view::{ChartKind, ChartSpec, ScaledPoint};
use yew::prelude::*;

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 200.0;
const PLOT_HEIGHT: f64 = 170.0;
const COLORS: [&str; 5] = ["#7e2ce1", "#2ca58d", "#f29e4c", "#e53935", "#3f88c5"];

pub fn chart(title: &str, spec: &ChartSpec) -> Html {
    let points = spec.scaled();
    let body = if points.is_empty() {
        html! { <text x="10" y="20">{ "No data" }</text> }
    } else {
        match spec.kind {
            ChartKind::Bar => bars(&points),
            ChartKind::Area => area(&points),
            ChartKind::Pie => pie(&points),
        }
    };

    html! {
        <figure class="chart">
            <figcaption>{ title.to_string() }</figcaption>
            <svg viewBox={format!("0 0 {} {}", WIDTH, HEIGHT)} role="img" aria-label={title.to_string()}>
                { body }
            </svg>
        </figure>
    }
}

fn slot(points: &[ScaledPoint]) -> f64 {
    WIDTH / points.len() as f64
}

fn label(x: f64, point: &ScaledPoint) -> Html {
    html! {
        <text x={format!("{:.1}", x)} y={format!("{}", HEIGHT - 4.0)} text-anchor="middle" font-size="10">
            { point.label.clone() }
        </text>
    }
}

fn bars(points: &[ScaledPoint]) -> Html {
    let slot = slot(points);
    html! {
        <g>{ for points.iter().enumerate().map(|(i, point)| {
            let height = point.ratio * PLOT_HEIGHT;
            let x = i as f64 * slot;
            html! {
                <g>
                    <rect
                        x={format!("{:.1}", x + slot * 0.15)}
                        y={format!("{:.1}", PLOT_HEIGHT - height)}
                        width={format!("{:.1}", slot * 0.7)}
                        height={format!("{:.1}", height)}
                        fill={COLORS[i % COLORS.len()]}
                    >
                        <title>{ format_amount(point.value) }</title>
                    </rect>
                    { label(x + slot / 2.0, point) }
                </g>
            }
        }) }</g>
    }
}

fn area(points: &[ScaledPoint]) -> Html {
    let slot = slot(points);
    let coords: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64 * slot + slot / 2.0, PLOT_HEIGHT - point.ratio * PLOT_HEIGHT))
        .collect();

    let mut path = format!("M{:.1},{:.1}", coords[0].0, PLOT_HEIGHT);
    for (x, y) in &coords {
        path.push_str(&format!(" L{:.1},{:.1}", x, y));
    }
    path.push_str(&format!(" L{:.1},{:.1} Z", coords[coords.len() - 1].0, PLOT_HEIGHT));

    html! {
        <g>
            <path d={path} fill={COLORS[0]} fill-opacity="0.4" stroke={COLORS[0]} />
            { for points.iter().zip(&coords).map(|(point, (x, y))| html! {
                <g>
                    <circle cx={format!("{:.1}", x)} cy={format!("{:.1}", y)} r="3" fill={COLORS[0]}>
                        <title>{ format_amount(point.value) }</title>
                    </circle>
                    { label(*x, point) }
                </g>
            }) }
        </g>
    }
}

fn pie(points: &[ScaledPoint]) -> Html {
    let (cx, cy, r) = (WIDTH / 2.0, HEIGHT / 2.0, HEIGHT / 2.0 - 10.0);
    let polar = |angle: f64| (cx + r * angle.sin(), cy - r * angle.cos());

    let mut start = 0.0;
    let slices = points.iter().enumerate().filter(|(_, p)| p.ratio > 0.0).map(|(i, point)| {
        let sweep = point.ratio * 2.0 * PI;
        let tooltip = format!("{}: {}", point.label, format_amount(point.value));
        let color = COLORS[i % COLORS.len()];

        let shape = if point.ratio >= 1.0 {
            html! { <circle cx={format!("{}", cx)} cy={format!("{}", cy)} r={format!("{}", r)} fill={color}><title>{ tooltip }</title></circle> }
        } else {
            let (x0, y0) = polar(start);
            let (x1, y1) = polar(start + sweep);
            let large = if sweep > PI { 1 } else { 0 };
            let d = format!(
                "M{:.1},{:.1} L{:.1},{:.1} A{:.1},{:.1} 0 {} 1 {:.1},{:.1} Z",
                cx, cy, x0, y0, r, r, large, x1, y1
            );
            html! { <path d={d} fill={color}><title>{ tooltip }</title></path> }
        };
        start += sweep;
        shape
    });

    html! { <g>{ for slices }</g> }
}
