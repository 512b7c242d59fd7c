use crate::domain::model::OrbitalBody;
use crate::utils::error::{AgeError, Result};
use crate::utils::validation::{
    validate_hex_color, validate_non_empty_string, validate_orbital_period, validate_unique,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A custom body table loaded from TOML:
///
/// ```toml
/// name = "inner planets"
///
/// [[bodies]]
/// key = "mercury"
/// name = "Mercury"
/// orbital_period_days = 88
/// color = "#a8a29e"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodiesConfig {
    pub name: Option<String>,
    #[serde(default)]
    pub bodies: Vec<BodyEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyEntry {
    pub key: String,
    pub name: String,
    pub orbital_period_days: f64,
    pub color: Option<String>,
}

impl BodiesConfig {
    /// 從 TOML 檔案載入星體表
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AgeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析星體表
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AgeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Validates and converts into the ordered table the calculator takes.
    pub fn into_bodies(self) -> Result<Vec<OrbitalBody>> {
        self.validate()?;
        Ok(self
            .bodies
            .into_iter()
            .map(|entry| OrbitalBody {
                key: entry.key.trim().to_string(),
                name: entry.name.trim().to_string(),
                orbital_period_days: entry.orbital_period_days,
                color: entry.color,
            })
            .collect())
    }
}

impl Validate for BodiesConfig {
    fn validate(&self) -> Result<()> {
        if self.bodies.is_empty() {
            return Err(AgeError::ConfigError {
                message: "body table must contain at least one [[bodies]] entry".to_string(),
            });
        }

        for (i, body) in self.bodies.iter().enumerate() {
            validate_non_empty_string(&format!("bodies[{}].key", i), &body.key)?;
            if body.name.trim().is_empty() {
                return Err(AgeError::InvalidBodyData {
                    body: body.key.clone(),
                    reason: "display name cannot be empty".to_string(),
                });
            }
            validate_orbital_period(&body.key, body.orbital_period_days)?;
            if let Some(color) = &body.color {
                validate_hex_color(&format!("bodies[{}].color", i), color)?;
            }
        }

        validate_unique("bodies.key", self.bodies.iter().map(|b| b.key.trim()))
    }
}
