//! Attribute block and vital stats.

use serde::{Deserialize, Serialize};

/// The seven core attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeBlock {
    /// Physical power.
    pub strength: i64,
    /// Agility and aim.
    pub dexterity: i64,
    /// Toughness.
    pub constitution: i64,
    /// Arcane power.
    pub intelligence: i64,
    /// Divine power.
    pub wisdom: i64,
    /// Mental resistance.
    pub willpower: i64,
    /// Fortune; fed to the luck interface.
    pub luck: i64,
}

impl AttributeBlock {
    /// Create a block with every attribute set to the same value.
    #[must_use]
    pub const fn uniform(value: i64) -> Self {
        Self {
            strength: value,
            dexterity: value,
            constitution: value,
            intelligence: value,
            wisdom: value,
            willpower: value,
            luck: value,
        }
    }

    /// Attributes in declaration order.
    #[must_use]
    pub const fn to_array(&self) -> [i64; 7] {
        [
            self.strength,
            self.dexterity,
            self.constitution,
            self.intelligence,
            self.wisdom,
            self.willpower,
            self.luck,
        ]
    }
}

/// Current and maximum health.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatVitals {
    /// Current health.
    pub health: i64,
    /// Maximum health.
    pub max_health: i64,
}

impl CombatVitals {
    /// Create vitals at full health.
    #[must_use]
    pub const fn full(max_health: i64) -> Self {
        Self {
            health: max_health,
            max_health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_block() {
        let block = AttributeBlock::uniform(7);
        assert!(block.to_array().iter().all(|&v| v == 7));
    }

    #[test]
    fn test_full_vitals() {
        let vitals = CombatVitals::full(40);
        assert_eq!(vitals.health, 40);
        assert_eq!(vitals.max_health, 40);
    }
}
