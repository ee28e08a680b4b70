//! Core value types: colours and canvas geometry.

mod colour;
mod geometry;

pub use colour::Colour;
pub use geometry::{pt, BBox, Point};
