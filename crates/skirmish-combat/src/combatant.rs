//! The combatant snapshot handed to the battle resolver.

use serde::{Deserialize, Serialize};

use crate::attack::AttackType;
use crate::attributes::AttributeBlock;
use crate::class::HeroClass;
use crate::gear::CombatantGear;

/// Detached, attack-type-aware snapshot of a character for one encounter.
///
/// `L` is whatever the luck provider produced; the combatant never looks
/// inside it. The attack type is fixed at construction and every equip
/// decision is made against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant<L> {
    /// Character class (`Monster` for monsters).
    pub class: HeroClass,
    pub(crate) attack_type: AttackType,
    /// Character level.
    pub level: u32,
    /// Display name.
    pub name: String,
    /// Current health at snapshot time.
    pub health: i64,
    /// Maximum health at snapshot time.
    pub max_health: i64,
    /// Equipped gear.
    pub equipment: CombatantGear,
    /// Flat defense value.
    pub damage_reduction: f64,
    /// Attribute block.
    pub attributes: AttributeBlock,
    /// Luck modifiers from the luck provider.
    pub luck: L,
}

impl<L> Combatant<L> {
    /// Create a combatant with no gear.
    #[must_use]
    pub fn new(
        class: HeroClass,
        attack_type: AttackType,
        name: impl Into<String>,
        level: u32,
        attributes: AttributeBlock,
        luck: L,
    ) -> Self {
        Self {
            class,
            attack_type,
            level,
            name: name.into(),
            health: 0,
            max_health: 0,
            equipment: CombatantGear::new(),
            damage_reduction: 0.0,
            attributes,
            luck,
        }
    }

    /// Set current and maximum health.
    #[must_use]
    pub fn with_health(mut self, health: i64, max_health: i64) -> Self {
        self.health = health;
        self.max_health = max_health;
        self
    }

    /// Set damage reduction.
    #[must_use]
    pub fn with_damage_reduction(mut self, damage_reduction: f64) -> Self {
        self.damage_reduction = damage_reduction;
        self
    }

    /// The attack type this combatant was built for.
    #[must_use]
    pub const fn attack_type(&self) -> AttackType {
        self.attack_type
    }

    /// Check if this is a monster.
    #[must_use]
    pub fn is_monster(&self) -> bool {
        self.class == HeroClass::Monster
    }

    /// Number of weapon slots.
    #[must_use]
    pub fn weapon_count(&self) -> usize {
        self.equipment.weapons.len()
    }

    /// Number of armor slots.
    #[must_use]
    pub fn armor_count(&self) -> usize {
        self.equipment.armor.len()
    }

    /// Sum of effective weapon levels.
    #[must_use]
    pub fn total_weapon_level(&self) -> f64 {
        self.equipment.weapons.iter().map(|w| w.level).sum()
    }

    /// Sum of armor levels.
    #[must_use]
    pub fn total_armor_level(&self) -> f64 {
        self.equipment.armor.iter().map(|a| a.level).sum()
    }
}
