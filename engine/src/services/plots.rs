//! Opaque plot artifacts for the result document
//!
//! Pure functions from a series to a base64-encoded SVG line chart. The
//! artifacts are pass-through payloads for the presentation layer; the
//! engine never reads them back.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};

use shared::DailyBucket;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const MARGIN: f64 = 40.0;

/// Combined generation power over the analysis span (kW per sample)
pub fn render_hourly_plot(points: &[(DateTime<Utc>, f64)]) -> String {
    let values: Vec<f64> = points.iter().map(|(_, kw)| *kw).collect();
    render_line_chart("Hourly generation (kW)", &values)
}

/// Daily energy totals over the analysis span (kWh per day)
pub fn render_daily_plot(days: &[DailyBucket]) -> String {
    let values: Vec<f64> = days.iter().map(|day| day.energy_kwh).collect();
    render_line_chart("Daily energy (kWh)", &values)
}

fn render_line_chart(title: &str, values: &[f64]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max = values.iter().cloned().fold(0.0f64, f64::max).max(1e-9);
    let inner_w = WIDTH - 2.0 * MARGIN;
    let inner_h = HEIGHT - 2.0 * MARGIN;
    let step_x = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };

    let points: String = values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = MARGIN + i as f64 * step_x;
            let y = HEIGHT - MARGIN - (value / max) * inner_h;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<rect width="{w}" height="{h}" fill="white"/>"#,
            r#"<text x="{tx}" y="24" font-family="sans-serif" font-size="14" text-anchor="middle">{title}</text>"#,
            r#"<line x1="{m}" y1="{ym}" x2="{xm}" y2="{ym}" stroke="dimgray"/>"#,
            r#"<line x1="{m}" y1="{m}" x2="{m}" y2="{ym}" stroke="dimgray"/>"#,
            r#"<text x="{m}" y="{ly}" font-family="sans-serif" font-size="10">max {max:.1}</text>"#,
            r#"<polyline points="{points}" fill="none" stroke="seagreen" stroke-width="1.5"/>"#,
            "</svg>"
        ),
        w = WIDTH,
        h = HEIGHT,
        m = MARGIN,
        xm = WIDTH - MARGIN,
        ym = HEIGHT - MARGIN,
        tx = WIDTH / 2.0,
        ly = MARGIN - 8.0,
        title = title,
        max = max,
        points = points,
    );

    STANDARD.encode(svg.as_bytes())
}
