pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::markup::MarkupRenderer;
pub use app::session::{Session, SessionReport, Step};
pub use config::{toml_config::TomlConfig, TagConfig};
pub use crate::core::{controller::TagController, transform::CoordinateTransform};
pub use domain::model::{Point, PointId, PointSeed, Position, Surface};
pub use domain::ports::Renderer;
pub use utils::error::{Result, TagError};
