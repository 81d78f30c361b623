// Chart geometry for the server-rendered SVG charts
use crate::domain::analytics::{CategoryCount, TimeSeriesPoint};
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};

pub const COLORS: [&str; 6] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8", "#82ca9d"];
pub const LINE_COLOR: &str = "#8884d8";

const LINE_WIDTH: f64 = 560.0;
const LINE_HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 32.0;
const Y_TICKS: usize = 4;

const PIE_WIDTH: f64 = 400.0;
const PIE_HEIGHT: f64 = 300.0;
const PIE_RADIUS: f64 = 80.0;
const PIE_LABEL_OFFSET: f64 = 24.0;

#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineChart {
    pub width: f64,
    pub height: f64,
    pub plot_left: f64,
    pub plot_right: f64,
    pub plot_bottom: f64,
    pub color: &'static str,
    /// SVG `points` attribute for the polyline
    pub polyline: String,
    pub points: Vec<ChartPoint>,
    pub y_ticks: Vec<AxisTick>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieSlice {
    pub path: String,
    pub color: &'static str,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
    pub anchor: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PieChart {
    pub width: f64,
    pub height: f64,
    pub slices: Vec<PieSlice>,
}

pub fn line_chart(series: &[TimeSeriesPoint]) -> LineChart {
    let plot_width = LINE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = LINE_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let plot_bottom = MARGIN_TOP + plot_height;
    let max = series.iter().map(|p| p.count).max().unwrap_or(0).max(1) as f64;

    let step = if series.len() > 1 {
        plot_width / (series.len() - 1) as f64
    } else {
        0.0
    };
    let points: Vec<ChartPoint> = series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if series.len() == 1 {
                MARGIN_LEFT + plot_width / 2.0
            } else {
                MARGIN_LEFT + step * i as f64
            };
            ChartPoint {
                x: round1(x),
                y: round1(plot_bottom - p.count as f64 / max * plot_height),
                label: p.date.clone(),
                value: p.count,
            }
        })
        .collect();

    let polyline = points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");

    let y_ticks = (0..=Y_TICKS)
        .map(|k| {
            let value = max * k as f64 / Y_TICKS as f64;
            AxisTick {
                position: round1(plot_bottom - value / max * plot_height),
                label: tick_label(value),
            }
        })
        .collect();

    LineChart {
        width: LINE_WIDTH,
        height: LINE_HEIGHT,
        plot_left: MARGIN_LEFT,
        plot_right: LINE_WIDTH - MARGIN_RIGHT,
        plot_bottom,
        color: LINE_COLOR,
        polyline,
        points,
        y_ticks,
    }
}

pub fn pie_chart(categories: &[CategoryCount]) -> PieChart {
    let cx = PIE_WIDTH / 2.0;
    let cy = PIE_HEIGHT / 2.0;
    let total: i64 = categories.iter().map(|c| c.value.max(0)).sum();

    let mut slices = Vec::new();
    if total > 0 {
        let mut start = -FRAC_PI_2;
        for (index, category) in categories.iter().enumerate() {
            let value = category.value.max(0);
            if value == 0 {
                continue;
            }
            let fraction = value as f64 / total as f64;
            let sweep = fraction * TAU;
            let end = start + sweep;
            let mid = start + sweep / 2.0;

            let path = if value == total {
                full_circle(cx, cy, PIE_RADIUS)
            } else {
                arc_path(cx, cy, PIE_RADIUS, start, end)
            };
            let label_radius = PIE_RADIUS + PIE_LABEL_OFFSET;
            slices.push(PieSlice {
                path,
                color: COLORS[index % COLORS.len()],
                label: format!("{} {:.0}%", category.name, fraction * 100.0),
                label_x: round1(cx + label_radius * mid.cos()),
                label_y: round1(cy + label_radius * mid.sin()),
                anchor: if mid.cos() >= 0.0 { "start" } else { "end" },
            });
            start = end;
        }
    }

    PieChart {
        width: PIE_WIDTH,
        height: PIE_HEIGHT,
        slices,
    }
}

fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let large_arc = if end - start > std::f64::consts::PI { 1 } else { 0 };
    format!(
        "M{:.1},{:.1} L{:.1},{:.1} A{r:.1},{r:.1} 0 {large_arc} 1 {:.1},{:.1} Z",
        cx,
        cy,
        cx + r * start.cos(),
        cy + r * start.sin(),
        cx + r * end.cos(),
        cy + r * end.sin(),
    )
}

fn full_circle(cx: f64, cy: f64, r: f64) -> String {
    format!(
        "M{:.1},{cy:.1} A{r:.1},{r:.1} 0 1 1 {:.1},{cy:.1} A{r:.1},{r:.1} 0 1 1 {:.1},{cy:.1} Z",
        cx - r,
        cx + r,
        cx - r,
    )
}

fn tick_label(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
