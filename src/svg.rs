//! SVG generation helpers shared by the shape renderers

use crate::defaults;
use crate::types::Point;
use std::fmt::Write;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// The fixed `fill`/`stroke` attribute pair every primitive carries
pub fn presentation_attrs() -> String {
    format!(r#"fill="{}" stroke="{}""#, defaults::FILL, defaults::STROKE)
}

/// Format a vertex list as an SVG `points` attribute value.
///
/// Numbers use their shortest form: `128` rather than `128.0`.
pub fn format_points(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", p.x, p.y);
    }
    out
}

/// Render a polygon-family element (`polygon` or `polyline`)
pub fn points_element(tag: &str, points: &[Point]) -> String {
    format!(
        r#"<{} points="{}" {} />"#,
        tag,
        format_points(points),
        presentation_attrs()
    )
}

/// Wrap child fragments in a `<g>` element, one fragment per line
pub fn group_element<I>(fragments: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut out = String::from("<g>\n");
    for fragment in fragments {
        out.push_str(fragment.trim_end_matches('\n'));
        out.push('\n');
    }
    out.push_str("</g>");
    out
}

/// Wrap a rendered fragment in a standalone SVG document
pub fn document(fragment: &str, width: f64, height: f64) -> String {
    format!(
        "<svg xmlns=\"{SVG_NS}\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n{}\n</svg>\n",
        fragment.trim_end_matches('\n')
    )
}
