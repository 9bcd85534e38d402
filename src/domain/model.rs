use crate::utils::error::{Result, TagError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a tag point. Seeds may carry numeric or string ids; generated ids are numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointId {
    Number(u64),
    Name(String),
}

impl PointId {
    pub fn as_number(&self) -> Option<u64> {
        match self {
            PointId::Number(n) => Some(*n),
            PointId::Name(_) => None,
        }
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointId::Number(n) => write!(f, "{}", n),
            PointId::Name(s) => f.write_str(s),
        }
    }
}

impl From<u64> for PointId {
    fn from(value: u64) -> Self {
        PointId::Number(value)
    }
}

impl From<&str> for PointId {
    fn from(value: &str) -> Self {
        PointId::Name(value.to_string())
    }
}

impl From<String> for PointId {
    fn from(value: String) -> Self {
        PointId::Name(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub is_active: bool,
}

/// Partial description of a point, as supplied by `seed_data` or `seed_points`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointSeed {
    pub id: Option<PointId>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub text: Option<String>,
}

impl PointSeed {
    pub fn new(id: impl Into<PointId>, x: f64, y: f64) -> Self {
        Self {
            id: Some(id.into()),
            x: Some(x),
            y: Some(y),
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Requested coordinate change. `None` keeps the axis where it is; `Some(0.0)` moves it to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }
}

/// Rendered size of the image the points are overlaid on. Always finite and non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Surface {
    width: f64,
    height: f64,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(width) || !usable(height) {
            return Err(TagError::InvalidSurface { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}
