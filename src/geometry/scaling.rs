use crate::domain::Point;

/// Axis-aligned bounding box in plate units
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Create bounds from a set of points
    pub fn from_points(points: &[Point]) -> Option<Self> {
        Self::from_point_iter(points.iter())
    }

    pub fn from_point_iter<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for p in iter {
            bounds.include(p);
        }
        Some(bounds)
    }

    /// Expand bounds to include another set of points
    pub fn expand(&mut self, points: &[Point]) {
        for p in points {
            self.include(p);
        }
    }

    pub fn merge(&mut self, other: &Bounds) {
        self.min_x = self.min_x.min(other.min_x);
        self.max_x = self.max_x.max(other.max_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_y = self.max_y.max(other.max_y);
    }

    fn include(&mut self, p: &Point) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Maps plate coordinates onto a page measured in points (1/72 inch)
///
/// The page is cropped to the bounds and padded evenly on every side.
/// Page y grows downward, so the plate's y axis is flipped.
#[derive(Debug, Clone)]
pub struct Scaler {
    /// Page points per plate unit
    scale: f64,
    min_x: f64,
    max_y: f64,
    padding: f64,
    page_width: f64,
    page_height: f64,
}

impl Scaler {
    /// Fit the longer side of `bounds` to `long_side_pt`
    ///
    /// # Arguments
    /// * `bounds` - Extent of everything that will be drawn
    /// * `long_side_pt` - Length of the longer side, before padding
    /// * `padding_pt` - Margin added on each side of the page
    pub fn fit(bounds: &Bounds, long_side_pt: f64, padding_pt: f64) -> Self {
        let width = bounds.width();
        let height = bounds.height();
        let max_dim = width.max(height);

        let scale = if max_dim > 0.0 && max_dim.is_finite() {
            long_side_pt / max_dim
        } else {
            1.0
        };

        Self {
            scale,
            min_x: bounds.min_x,
            max_y: bounds.max_y,
            padding: padding_pt,
            page_width: width * scale + 2.0 * padding_pt,
            page_height: height * scale + 2.0 * padding_pt,
        }
    }

    /// A page holding nothing but padding
    pub fn blank(padding_pt: f64) -> Self {
        Self {
            scale: 1.0,
            min_x: 0.0,
            max_y: 0.0,
            padding: padding_pt,
            page_width: 2.0 * padding_pt,
            page_height: 2.0 * padding_pt,
        }
    }

    /// Map a plate point to page coordinates
    pub fn map(&self, p: Point) -> (f64, f64) {
        let x = (p.x - self.min_x) * self.scale + self.padding;
        let y = (self.max_y - p.y) * self.scale + self.padding;
        (x, y)
    }

    /// Get the scale factor (points per plate unit)
    pub fn scale_factor(&self) -> f64 {
        self.scale
    }

    pub fn page_size(&self) -> (f64, f64) {
        (self.page_width, self.page_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1000.0, 2000.0),
            Point::new(500.0, 1000.0),
        ];
        let bounds = Bounds::from_points(&points).unwrap();

        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 1000.0);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 2000.0);
    }

    #[test]
    fn test_bounds_empty() {
        assert!(Bounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_bounds_expand() {
        let mut bounds = Bounds::from_points(&[Point::new(1.0, 1.0)]).unwrap();
        bounds.expand(&[Point::new(-2.0, 3.0)]);

        assert_eq!(bounds.width(), 3.0);
        assert_eq!(bounds.height(), 2.0);
    }

    #[test]
    fn test_scaler_fits_long_side() {
        let bounds = Bounds {
            min_x: 0.0,
            max_x: 200.0,
            min_y: 0.0,
            max_y: 50.0,
        };

        let scaler = Scaler::fit(&bounds, 400.0, 5.0);

        assert!((scaler.scale_factor() - 2.0).abs() < 1e-12);
        let (w, h) = scaler.page_size();
        assert!((w - 410.0).abs() < 1e-9);
        assert!((h - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_scaler_flips_y() {
        let bounds = Bounds {
            min_x: 10.0,
            max_x: 20.0,
            min_y: 0.0,
            max_y: 10.0,
        };
        let scaler = Scaler::fit(&bounds, 100.0, 1.0);

        // Top-left of the plate lands at the top-left of the page
        let (x, y) = scaler.map(Point::new(10.0, 10.0));
        assert!((x - 1.0).abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);

        let (x, y) = scaler.map(Point::new(20.0, 0.0));
        assert!((x - 101.0).abs() < 1e-9);
        assert!((y - 101.0).abs() < 1e-9);
    }

    #[test]
    fn test_scaler_degenerate_bounds() {
        let bounds = Bounds::from_points(&[Point::new(3.0, 3.0)]).unwrap();
        let scaler = Scaler::fit(&bounds, 100.0, 2.0);

        assert_eq!(scaler.scale_factor(), 1.0);
        assert_eq!(scaler.page_size(), (4.0, 4.0));
        assert_eq!(scaler.map(Point::new(3.0, 3.0)), (2.0, 2.0));
    }
}
