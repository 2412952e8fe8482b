use super::{Point, Polygon};

/// A plate and the pieces placed on it, in file order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub plate: Polygon,
    pub pieces: Vec<Polygon>,
}

impl Layout {
    pub fn new(plate: Polygon, pieces: Vec<Polygon>) -> Self {
        Self { plate, pieces }
    }

    /// Plate first, then pieces. This is also the draw order.
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        std::iter::once(&self.plate).chain(self.pieces.iter())
    }

    pub fn all_points(&self) -> impl Iterator<Item = &Point> {
        self.polygons().flat_map(|p| p.points.iter())
    }

    pub fn vertex_count(&self) -> usize {
        self.polygons().map(Polygon::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plate_comes_first() {
        let layout = Layout::new(
            Polygon::from(vec![(0.0, 0.0), (9.0, 0.0), (9.0, 9.0)]),
            vec![
                Polygon::from(vec![(1.0, 1.0)]),
                Polygon::from(vec![(2.0, 2.0), (3.0, 3.0)]),
            ],
        );

        let firsts: Vec<Point> = layout.polygons().map(|p| p.points[0]).collect();
        assert_eq!(
            firsts,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0)
            ]
        );
        assert_eq!(layout.vertex_count(), 6);
        assert_eq!(layout.all_points().count(), 6);
    }
}
