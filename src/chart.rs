use crate::materials::Composition;
use std::f64::consts::PI;

pub const TITLE: &str = "Material Composition Breakdown";
pub const COLORS: [&str; 5] = ["lightblue", "orange", "green", "pink", "purple"];
pub const START_ANGLE: f64 = 140.0;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 480.0;
const CENTER_X: f64 = 240.0;
const CENTER_Y: f64 = 260.0;
const RADIUS: f64 = 170.0;
const LABEL_RADIUS: f64 = RADIUS * 0.65;
const LEGEND_X: f64 = 460.0;
const LEGEND_Y: f64 = 120.0;
const LEGEND_ROW: f64 = 24.0;

// point on the circle for an angle in degrees, counter-clockwise from the positive x axis.
// svg's y axis points down
fn point(angle: f64, radius: f64) -> (f64, f64) {
    let radians = angle * PI / 180.0;
    (
        CENTER_X + radius * radians.cos(),
        CENTER_Y - radius * radians.sin(),
    )
}

fn wedge(start: f64, sweep: f64, color: &str) -> String {
    if sweep >= 360.0 - 1e-9 {
        return format!(
            r#"<circle cx="{CENTER_X:.2}" cy="{CENTER_Y:.2}" r="{RADIUS:.2}" fill="{color}" stroke="white"/>"#
        );
    }

    let (x1, y1) = point(start, RADIUS);
    let (x2, y2) = point(start + sweep, RADIUS);
    let large_arc = if sweep > 180.0 { 1 } else { 0 };
    format!(
        r#"<path d="M {CENTER_X:.2} {CENTER_Y:.2} L {x1:.2} {y1:.2} A {RADIUS:.2} {RADIUS:.2} 0 {large_arc} 0 {x2:.2} {y2:.2} Z" fill="{color}" stroke="white"/>"#
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// wedges run counter-clockwise from START_ANGLE in composition order. empty wedges are left out
// of the pie but still listed in the legend
pub fn render_svg(composition: &Composition) -> String {
    let mut svg = vec![
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
        ),
        format!(
            r#"<text x="{CENTER_X:.2}" y="40" text-anchor="middle" font-size="20">{TITLE}</text>"#
        ),
    ];

    let mut angle = START_ANGLE;
    for (idx, entry) in composition.iter().enumerate() {
        let sweep = entry.percentage / 100.0 * 360.0;
        if sweep <= 0.0 {
            continue;
        }

        svg.push(wedge(angle, sweep, COLORS[idx % COLORS.len()]));

        let (x, y) = if sweep >= 360.0 - 1e-9 {
            (CENTER_X, CENTER_Y)
        } else {
            point(angle + sweep / 2.0, LABEL_RADIUS)
        };
        svg.push(format!(
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" font-size="10">{} {:.1}%</text>"#,
            escape(entry.material),
            entry.percentage
        ));

        angle += sweep;
    }

    svg.push(format!(
        r#"<text x="{LEGEND_X:.2}" y="{:.2}" font-size="12">Components</text>"#,
        LEGEND_Y - LEGEND_ROW
    ));
    for (idx, entry) in composition.iter().enumerate() {
        let y = LEGEND_Y + idx as f64 * LEGEND_ROW;
        svg.push(format!(
            r#"<rect x="{LEGEND_X:.2}" y="{:.2}" width="14" height="14" fill="{}"/>"#,
            y - 12.0,
            COLORS[idx % COLORS.len()]
        ));
        svg.push(format!(
            r#"<text x="{:.2}" y="{y:.2}" font-size="12">{}</text>"#,
            LEGEND_X + 20.0,
            escape(entry.material)
        ));
    }

    svg.push("</svg>".to_string());
    svg.join("\n") + "\n"
}
