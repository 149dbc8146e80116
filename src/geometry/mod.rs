pub mod circle;
pub mod line;
pub mod plane;
pub mod sphere;
pub mod triangle;

pub use circle::Circle;
pub use line::{Line2, Line3, Segment2, Segment3};
pub use plane::Plane;
pub use sphere::Sphere;
pub use triangle::Triangle2;
