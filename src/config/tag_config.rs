use crate::domain::model::{PointId, PointSeed, Surface};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_positive_number, validate_range,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_RADIUS: f64 = 10.0;
pub const DEFAULT_CLASS_NAME: &str = "tag-point";
pub const DEFAULT_POINT_TEXT_CLASS_NAME: &str = "point-text";
pub const DEFAULT_ACTIVE_CLASS_NAME: &str = "active";

/// Host options for one tagger. Fields missing from a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    /// Pixel offset that centers a point's visual on its coordinate.
    pub radius: f64,
    /// Initial creation gating; `true` means clicks are ignored.
    pub is_disabled: bool,
    /// Store coordinates as percentages of the surface instead of pixels.
    pub is_percentage: bool,
    /// Let visuals hang over the surface edge instead of clipping them.
    pub allow_overflow: bool,
    pub class_name: String,
    pub point_text_class_name: String,
    pub active_class_name: String,
    /// Points loaded when the controller is built.
    pub seed_data: Option<Vec<PointSeed>>,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            is_disabled: false,
            is_percentage: true,
            allow_overflow: false,
            class_name: DEFAULT_CLASS_NAME.to_string(),
            point_text_class_name: DEFAULT_POINT_TEXT_CLASS_NAME.to_string(),
            active_class_name: DEFAULT_ACTIVE_CLASS_NAME.to_string(),
            seed_data: None,
        }
    }
}

impl TagConfig {
    /// 驗證種子資料；像素模式下需要 surface 才能檢查上界
    pub fn validate_seeds(&self, surface: Option<&Surface>) -> Result<()> {
        let Some(seeds) = &self.seed_data else {
            return Ok(());
        };

        let mut seen: HashSet<&PointId> = HashSet::new();
        for (index, seed) in seeds.iter().enumerate() {
            for (axis, value, extent) in [
                ("x", seed.x, surface.map(|s| s.width())),
                ("y", seed.y, surface.map(|s| s.height())),
            ] {
                let Some(value) = value else { continue };
                let field = format!("seed_data[{}].{}", index, axis);
                validate_finite(&field, value)?;

                if self.is_percentage {
                    validate_range(&field, value, 0.0, 100.0)?;
                } else if let Some(extent) = extent {
                    validate_range(&field, value, 0.0, extent)?;
                }
            }

            if let Some(id) = &seed.id {
                if !seen.insert(id) {
                    // 重複 id 仍然接受，查詢時取第一筆
                    tracing::warn!("Duplicate seed id {}; lookups will return the first match", id);
                }
            }
        }

        Ok(())
    }
}

impl Validate for TagConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("radius", self.radius)?;
        validate_non_empty_string("class_name", &self.class_name)?;
        validate_non_empty_string("point_text_class_name", &self.point_text_class_name)?;
        validate_non_empty_string("active_class_name", &self.active_class_name)?;
        self.validate_seeds(None)
    }
}
