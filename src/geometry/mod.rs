pub mod line_seg;
pub mod point;
pub mod polygon;
pub mod vector;

pub use line_seg::LineSeg;
pub use point::Point;
pub use polygon::Polygon;
pub use vector::Vector;
