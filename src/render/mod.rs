//! Plot a layout to PDF or SVG
//!
//! The plate is filled first and every piece is drawn over it, each with its
//! own fill, opacity and edge styling. PDF output goes through an SVG
//! document converted by `svg2pdf`.

pub mod pdf;
pub mod style;
pub mod svg;

pub use pdf::svg_to_pdf;
pub use style::{Color, ColorError, PolygonStyle};
pub use svg::{SvgDocument, build_svg};

use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::Layout;

/// Matplotlib's default figure width, 6.4 inches
pub const DEFAULT_LONG_SIDE_PT: f64 = 460.8;
/// 0.01 inch
pub const DEFAULT_PADDING_PT: f64 = 0.72;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to build SVG: {0}")]
    Svg(String),

    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pdf,
    Svg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Svg => "svg",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub plate: PolygonStyle,
    pub piece: PolygonStyle,
    /// Length of the longer page side before padding, in points
    pub long_side_pt: f64,
    pub padding_pt: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            plate: PolygonStyle::plate(),
            piece: PolygonStyle::piece(),
            long_side_pt: DEFAULT_LONG_SIDE_PT,
            padding_pt: DEFAULT_PADDING_PT,
        }
    }
}

/// Render a layout in memory, then write it to `path`
///
/// Nothing is written if rendering fails.
pub fn render_to_file(
    layout: &Layout,
    options: &RenderOptions,
    format: OutputFormat,
    path: &Path,
) -> Result<usize, RenderError> {
    let doc = build_svg(layout, options);
    let bytes = match format {
        OutputFormat::Pdf => svg_to_pdf(&doc.text)?,
        OutputFormat::Svg => doc.text.into_bytes(),
    };

    fs::write(path, &bytes).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(bytes.len())
}

/// Output path next to the input: a trailing `.txt` is replaced by the
/// format's extension, any other name gets the extension appended
pub fn output_path_for(input: &Path, format: OutputFormat) -> PathBuf {
    let raw = input.as_os_str().to_string_lossy();
    let stem = raw.strip_suffix(".txt").unwrap_or(&raw);
    PathBuf::from(format!("{}.{}", stem, format.extension()))
}
