use super::RenderError;

/// Convert an SVG document to a single-page PDF
///
/// The page keeps the SVG's size, with one SVG unit per PDF point.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>, RenderError> {
    let options = usvg::Options::default();
    let tree =
        usvg::Tree::from_str(svg, &options).map_err(|e| RenderError::Svg(format!("{e:?}")))?;

    Ok(svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    ))
}
