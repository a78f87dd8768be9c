//! Balance configuration.
//!
//! Monster generation constants live here so tuning never touches the
//! generator. The defaults reproduce the shipped balance; a TOML file can
//! override any of them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use skirmish_common::{SchemaVersion, SkirmishError, SkirmishResult};
use tracing::info;

/// Multiplier applied to the geometric growth term.
pub const MONSTER_STAT_BASE: f64 = 8.0;

/// Per-level growth of monster attributes (about 35% per level).
pub const MONSTER_STAT_GROWTH: f64 = 1.35;

/// Flat offset added after rounding up.
pub const MONSTER_STAT_OFFSET: i64 = -5;

/// Monster attribute curve: `ceil(growth^(level-1) * base) + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterScaling {
    /// Multiplier applied to the growth term.
    pub base: f64,
    /// Per-level growth factor.
    pub growth: f64,
    /// Flat offset.
    pub offset: i64,
}

impl Default for MonsterScaling {
    fn default() -> Self {
        Self {
            base: MONSTER_STAT_BASE,
            growth: MONSTER_STAT_GROWTH,
            offset: MONSTER_STAT_OFFSET,
        }
    }
}

impl MonsterScaling {
    /// Attribute value for a monster level.
    ///
    /// Saturates at `i64::MAX` for levels far past the curve's useful range.
    #[must_use]
    pub fn stat_for_level(&self, level: u32) -> i64 {
        let exponent = f64::from(level) - 1.0;
        let raw = (self.growth.powf(exponent) * self.base).ceil();
        (raw as i64).saturating_add(self.offset)
    }

    /// Check that the curve is usable.
    pub fn validate(&self) -> SkirmishResult<()> {
        if !self.base.is_finite() || self.base <= 0.0 {
            return Err(SkirmishError::Validation(format!(
                "monster_scaling.base must be positive, got {}",
                self.base
            )));
        }
        if !self.growth.is_finite() || self.growth <= 0.0 {
            return Err(SkirmishError::Validation(format!(
                "monster_scaling.growth must be positive, got {}",
                self.growth
            )));
        }
        Ok(())
    }
}

/// Top-level combat configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Schema version of the file.
    pub schema_version: SchemaVersion,
    /// Monster attribute curve.
    pub monster_scaling: MonsterScaling,
}

impl CombatConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> SkirmishResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| SkirmishError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SkirmishResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(
            "Loaded combat config {} from {:?}",
            config.schema_version, path
        );
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> SkirmishResult<String> {
        toml::to_string_pretty(self).map_err(|e| SkirmishError::Serialization(e.to_string()))
    }

    /// Check version compatibility and value ranges.
    pub fn validate(&self) -> SkirmishResult<()> {
        let current = SchemaVersion::COMBAT_CONFIG;
        if !current.can_read(&self.schema_version) {
            return Err(SkirmishError::VersionMismatch {
                expected: current.to_string(),
                actual: self.schema_version.to_string(),
            });
        }
        self.monster_scaling.validate()
    }
}
