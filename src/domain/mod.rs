pub mod layout;
pub mod point;
pub mod polygon;
pub mod stats;

pub use layout::Layout;
pub use point::Point;
pub use polygon::Polygon;
pub use stats::LayoutStats;
