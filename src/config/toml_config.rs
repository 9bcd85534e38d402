use crate::config::TagConfig;
use crate::domain::model::{PointSeed, Surface};
use crate::utils::error::{Result, TagError};
use crate::utils::validation::{validate_positive_number, validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File layout:
///
/// ```toml
/// [tagger]
/// radius = 12
/// is_percentage = true
///
/// [surface]
/// width = 800
/// height = 600
///
/// [[seed]]
/// id = 1
/// x = 10
/// y = 20
/// text = "Lamp"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub tagger: TagConfig,
    pub surface: Option<SurfaceConfig>,
    #[serde(default)]
    pub seed: Vec<PointSeed>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub width: f64,
    pub height: f64,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${IMAGE_WIDTH})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TagError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn surface(&self) -> Result<Surface> {
        let surface = validate_required_field("surface", &self.surface)?;
        Surface::new(surface.width, surface.height)
    }

    /// Tag options with `[[seed]]` entries folded into `seed_data`.
    /// `[[seed]]` wins over an inline `tagger.seed_data` when both are present.
    pub fn tag_config(&self) -> TagConfig {
        let mut config = self.tagger.clone();
        if !self.seed.is_empty() {
            config.seed_data = Some(self.seed.clone());
        }
        config
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let surface = validate_required_field("surface", &self.surface)?;
        validate_positive_number("surface.width", surface.width)?;
        validate_positive_number("surface.height", surface.height)?;

        let config = self.tag_config();
        config.validate()?;
        config.validate_seeds(Some(&self.surface()?))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
