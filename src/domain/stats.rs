//! Summary statistics for a parsed layout
//!
//! Mirrors the report a nesting run prints at the end: piece counts,
//! vertex and area distributions, the extent occupied by the pieces, and
//! how much of the plate they cover.

use super::{Layout, Polygon};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutStats {
    pub num_pieces: usize,
    pub plate_vertices: usize,
    pub plate_is_rectangle: bool,
    pub total_vertices: usize,
    pub min_vertices: usize,
    pub max_vertices: usize,
    pub plate_area: f64,
    pub total_area: f64,
    pub min_area: f64,
    pub max_area: f64,
    /// Width and height of the box around all pieces
    pub extent: Option<(f64, f64)>,
}

impl LayoutStats {
    pub fn from_layout(layout: &Layout) -> Self {
        let pieces = &layout.pieces;
        let areas: Vec<f64> = pieces.iter().map(Polygon::area).collect();

        let extent = pieces
            .iter()
            .filter_map(Polygon::bounds)
            .reduce(|mut acc, b| {
                acc.merge(&b);
                acc
            })
            .map(|b| (b.width(), b.height()));

        Self {
            num_pieces: pieces.len(),
            plate_vertices: layout.plate.len(),
            plate_is_rectangle: layout.plate.is_axis_aligned_rectangle(),
            total_vertices: pieces.iter().map(Polygon::len).sum(),
            min_vertices: pieces.iter().map(Polygon::len).min().unwrap_or(0),
            max_vertices: pieces.iter().map(Polygon::len).max().unwrap_or(0),
            plate_area: layout.plate.area(),
            total_area: areas.iter().sum(),
            min_area: areas.iter().copied().reduce(f64::min).unwrap_or(0.0),
            max_area: areas.iter().copied().reduce(f64::max).unwrap_or(0.0),
            extent,
        }
    }

    pub fn avg_vertices(&self) -> Option<f64> {
        (self.num_pieces > 0).then(|| self.total_vertices as f64 / self.num_pieces as f64)
    }

    pub fn avg_area(&self) -> Option<f64> {
        (self.num_pieces > 0).then(|| self.total_area / self.num_pieces as f64)
    }

    /// Percentage of the plate covered by pieces
    pub fn utilization(&self) -> Option<f64> {
        (self.plate_area > 0.0).then(|| 100.0 * self.total_area / self.plate_area)
    }

    pub fn summary(&self) -> String {
        let utilization = self
            .utilization()
            .map(|u| format!("{:.2}%", u))
            .unwrap_or_else(|| "n/a".to_string());
        format!(
            "{} pieces, {} vertices, plate area {:.4}, piece area {:.4}, utilization {}",
            self.num_pieces, self.total_vertices, self.plate_area, self.total_area, utilization
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(
            Polygon::from(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 4.0), (0.0, 4.0)]),
            vec![
                Polygon::from(vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]),
                Polygon::from(vec![(3.0, 0.0), (5.0, 0.0), (3.0, 2.0)]),
            ],
        )
    }

    #[test]
    fn test_counts_and_areas() {
        let stats = LayoutStats::from_layout(&layout());

        assert_eq!(stats.num_pieces, 2);
        assert_eq!(stats.plate_vertices, 4);
        assert!(stats.plate_is_rectangle);
        assert_eq!(stats.total_vertices, 7);
        assert_eq!(stats.min_vertices, 3);
        assert_eq!(stats.max_vertices, 4);
        assert!((stats.plate_area - 40.0).abs() < 1e-9);
        assert!((stats.total_area - 6.0).abs() < 1e-9);
        assert!((stats.min_area - 2.0).abs() < 1e-9);
        assert!((stats.max_area - 4.0).abs() < 1e-9);
        assert_eq!(stats.avg_vertices(), Some(3.5));
    }

    #[test]
    fn test_extent_and_utilization() {
        let stats = LayoutStats::from_layout(&layout());

        let (w, h) = stats.extent.unwrap();
        assert_eq!(w, 5.0);
        assert_eq!(h, 2.0);
        assert!((stats.utilization().unwrap() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_layout() {
        let stats = LayoutStats::from_layout(&Layout::default());

        assert_eq!(stats.num_pieces, 0);
        assert_eq!(stats.extent, None);
        assert_eq!(stats.avg_area(), None);
        assert_eq!(stats.utilization(), None);
        assert!(stats.summary().contains("n/a"));
    }
}
