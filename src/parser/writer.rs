use std::fmt;
use std::io::{self, Write};

use crate::domain::{Layout, Polygon};

/// Formats a layout in the same flat-text format `parse` reads
///
/// Coordinates use the shortest representation that parses back to the
/// same `f64`, so writing and re-reading is lossless.
pub struct LayoutText<'a>(pub &'a Layout);

impl fmt::Display for LayoutText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.0;
        write_polygon(f, &layout.plate)?;
        writeln!(f, "{}", layout.pieces.len())?;
        for piece in &layout.pieces {
            write_polygon(f, piece)?;
        }
        Ok(())
    }
}

pub fn write_layout<W: Write>(writer: &mut W, layout: &Layout) -> io::Result<()> {
    write!(writer, "{}", LayoutText(layout))?;
    writer.flush()
}

pub fn to_text(layout: &Layout) -> String {
    LayoutText(layout).to_string()
}

fn write_polygon(f: &mut fmt::Formatter<'_>, polygon: &Polygon) -> fmt::Result {
    writeln!(f, "{}", polygon.len())?;
    for p in &polygon.points {
        writeln!(f, "{} {}", p.x, p.y)?;
    }
    Ok(())
}
