//! Point projection.

#[doc(inline)]
pub use self::point_query::{PointProjection, PointQuery};

mod point_query;
mod point_segment;
mod point_triangle;
