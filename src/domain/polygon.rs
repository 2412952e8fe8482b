use geo::{Area, Centroid, LineString};

use super::Point;
use crate::geometry::Bounds;

/// An ordered vertex list. The renderer closes the ring, the file never does.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Unsigned area. Zero for fewer than three vertices.
    pub fn area(&self) -> f64 {
        self.to_geo().unsigned_area()
    }

    pub fn centroid(&self) -> Option<Point> {
        self.to_geo().centroid().map(|c| Point::new(c.x(), c.y()))
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }

    /// Four vertices with every edge horizontal or vertical
    pub fn is_axis_aligned_rectangle(&self) -> bool {
        if self.points.len() != 4 {
            return false;
        }

        (0..4).all(|i| {
            let a = self.points[i];
            let b = self.points[(i + 1) % 4];
            a.x == b.x || a.y == b.y
        })
    }

    fn to_geo(&self) -> geo::Polygon<f64> {
        let ring: LineString<f64> = self.points.iter().map(|&p| geo::Coord::from(p)).collect();
        geo::Polygon::new(ring, Vec::new())
    }
}

impl From<Vec<(f64, f64)>> for Polygon {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points.into_iter().map(Point::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn test_area_ignores_orientation() {
        let ccw = unit_square();
        let mut cw = ccw.clone();
        cw.points.reverse();

        assert!((ccw.area() - 1.0).abs() < 1e-12);
        assert!((cw.area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_area_is_zero() {
        assert_eq!(Polygon::default().area(), 0.0);
        assert_eq!(Polygon::from(vec![(0.0, 0.0), (3.0, 4.0)]).area(), 0.0);
    }

    #[test]
    fn test_centroid() {
        let c = unit_square().centroid().unwrap();
        assert!((c.x - 0.5).abs() < 1e-12);
        assert!((c.y - 0.5).abs() < 1e-12);
        assert!(Polygon::default().centroid().is_none());
    }

    #[test]
    fn test_rectangle_detection() {
        assert!(unit_square().is_axis_aligned_rectangle());

        let skewed = Polygon::from(vec![(0.0, 0.0), (2.0, 0.0), (3.0, 1.0), (1.0, 1.0)]);
        assert!(!skewed.is_axis_aligned_rectangle());

        let triangle = Polygon::from(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert!(!triangle.is_axis_aligned_rectangle());
    }
}
