//! Reader for the flat-text layout format
//!
//! ```text
//! <plate vertex count>
//! <x> <y>                 (one line per plate vertex)
//! <piece count>
//! <piece vertex count>    (repeated once per piece)
//! <x> <y>                 (one line per piece vertex)
//! ```
//!
//! Every record sits on its own line. Counts are read first and then exactly
//! that many coordinate rows; anything after the last declared record is
//! ignored.

pub mod error;
pub mod writer;

pub use error::{ParseError, Record};
pub use writer::{to_text, write_layout};

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::domain::{Layout, Point, Polygon};

/// Parse a layout from any buffered reader
pub fn parse<R: BufRead>(source: R) -> Result<Layout, ParseError> {
    let mut records = Records::new(source);

    let plate_size = records.read_count(Record::PlateSize)?;
    let plate = records.read_polygon(plate_size, |index| Record::PlateVertex {
        index,
        of: plate_size,
    })?;

    let num_pieces = records.read_count(Record::PieceCount)?;
    let mut pieces = Vec::new();
    for piece in 0..num_pieces {
        let size = records.read_count(Record::PieceSize { piece })?;
        pieces.push(records.read_polygon(size, |index| Record::PieceVertex {
            piece,
            index,
            of: size,
        })?);
    }

    Ok(Layout::new(plate, pieces))
}

pub fn parse_str(text: &str) -> Result<Layout, ParseError> {
    parse(text.as_bytes())
}

/// Open, read and close a layout file
pub fn parse_file(path: &Path) -> Result<Layout, ParseError> {
    let file = File::open(path)?;
    parse(BufReader::new(file))
}

/// Line cursor that tracks the 1-based number of the last line handed out
struct Records<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> Records<R> {
    fn new(source: R) -> Self {
        Self {
            lines: source.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self, record: Record) -> Result<String, ParseError> {
        match self.lines.next() {
            Some(line) => {
                self.line += 1;
                Ok(line?)
            }
            None => Err(ParseError::Truncated {
                lines: self.line,
                record,
            }),
        }
    }

    fn read_count(&mut self, record: Record) -> Result<usize, ParseError> {
        let line = self.next_line(record)?;
        line.trim().parse().map_err(|_| ParseError::Format {
            line: self.line,
            record,
            expected: "a non-negative integer",
            found: line.clone(),
        })
    }

    fn read_point(&mut self, record: Record) -> Result<Point, ParseError> {
        let line = self.next_line(record)?;
        parse_coordinates(&line).ok_or_else(|| ParseError::Format {
            line: self.line,
            record,
            expected: "two numbers",
            found: line.clone(),
        })
    }

    fn read_polygon(
        &mut self,
        size: usize,
        record: impl Fn(usize) -> Record,
    ) -> Result<Polygon, ParseError> {
        let points = (0..size)
            .map(|index| self.read_point(record(index)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Polygon::new(points))
    }
}

fn parse_coordinates(line: &str) -> Option<Point> {
    let mut fields = line.split_whitespace();
    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Point::new(x, y))
}
