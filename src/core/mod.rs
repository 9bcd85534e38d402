pub mod controller;
pub mod registry;
pub mod transform;

pub use crate::domain::model::{Point, PointId, PointSeed, Position, Surface};
pub use crate::domain::ports::Renderer;
pub use crate::utils::error::Result;
