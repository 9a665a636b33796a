//! Top-level TOML configuration.
//!
//! ```toml
//! [fit]
//! lower_body_ease = 1.08
//!
//! [cloth]
//! solver_iterations = 15
//! max_substeps = 4
//! ```
//!
//! Missing sections and keys take their defaults.

use std::path::Path;

use drape_cloth::ClothConfig;
use drape_fit::FitConfig;
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrapeConfig {
    pub fit: FitConfig,
    pub cloth: ClothConfig,
}

impl DrapeConfig {
    pub fn from_toml_str(content: &str) -> DrapeResult<Self> {
        toml::from_str(content).map_err(|e| DrapeError::Serialization(e.to_string()))
    }

    pub fn load(path: &Path) -> DrapeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> DrapeResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> DrapeResult<()> {
        self.fit.validate()?;
        self.cloth.validate()
    }
}
