use std::fmt::Write;

use super::{PolygonStyle, RenderOptions};
use crate::domain::{Layout, Polygon};
use crate::geometry::{Bounds, Scaler};

/// An SVG document sized in points, ready for display or PDF conversion
#[derive(Debug, Clone)]
pub struct SvgDocument {
    pub text: String,
    pub width: f64,
    pub height: f64,
}

/// Draw the plate, then every piece on top of it, on an axis-free page
///
/// The page is cropped to the geometry and padded by `padding_pt` plus half
/// the widest edge so strokes on the boundary are not clipped.
pub fn build_svg(layout: &Layout, options: &RenderOptions) -> SvgDocument {
    let stroke_margin = options.plate.line_width.max(options.piece.line_width) / 2.0;
    let padding = options.padding_pt + stroke_margin.max(0.0);

    let scaler = match Bounds::from_point_iter(layout.all_points()) {
        Some(bounds) => Scaler::fit(&bounds, options.long_side_pt, padding),
        None => Scaler::blank(padding),
    };
    let (width, height) = scaler.page_size();

    let mut text = String::new();
    let _ = writeln!(
        text,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt_pt(width),
        h = fmt_pt(height),
    );

    push_polygon(&mut text, &layout.plate, &options.plate, &scaler);
    for piece in &layout.pieces {
        push_polygon(&mut text, piece, &options.piece, &scaler);
    }

    text.push_str("</svg>\n");

    SvgDocument {
        text,
        width,
        height,
    }
}

fn push_polygon(out: &mut String, polygon: &Polygon, style: &PolygonStyle, scaler: &Scaler) {
    if polygon.is_empty() {
        return;
    }

    let mut d = String::new();
    for (i, p) in polygon.points.iter().enumerate() {
        let (x, y) = scaler.map(*p);
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{}{} {} ", cmd, fmt_pt(x), fmt_pt(y));
    }
    d.push('Z');

    let _ = writeln!(
        out,
        r#"<path d="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}" stroke-linejoin="miter"/>"#,
        d,
        style.fill,
        style.fill_opacity.clamp(0.0, 1.0),
        style.edge,
        fmt_pt(style.line_width.max(0.0)),
    );
}

// Up to 3 decimals, trailing zeros trimmed
fn fmt_pt(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
