//! Equip resolution.
//!
//! Decides, per item, how much it contributes under the combatant's attack
//! type and whether it lands in a weapon or an armor slot.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::attack::{affects, AttackType};
use crate::class::HeroClass;
use crate::combatant::Combatant;
use crate::gear::GearSlot;
use crate::item::{InventoryItem, ItemType};

/// Off-style proficiency: a class keeps part of an item's level under an
/// attack type that would otherwise ignore it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HybridProficiency {
    /// Class holding the item.
    pub class: HeroClass,
    /// Attack type in use.
    pub attack_type: AttackType,
    /// Item type being equipped.
    pub item_type: ItemType,
    /// Fraction of the item level that counts.
    pub multiplier: f64,
}

impl HybridProficiency {
    const fn half(class: HeroClass, attack_type: AttackType, item_type: ItemType) -> Self {
        Self {
            class,
            attack_type,
            item_type,
            multiplier: 0.5,
        }
    }
}

/// Every off-style proficiency.
pub const HYBRID_PROFICIENCIES: &[HybridProficiency] = &[
    HybridProficiency::half(HeroClass::BattleMage, AttackType::Cast, ItemType::MeleeWeapon),
    HybridProficiency::half(HeroClass::BattleMage, AttackType::Melee, ItemType::SpellFocus),
    HybridProficiency::half(HeroClass::DemonHunter, AttackType::Cast, ItemType::MeleeWeapon),
    HybridProficiency::half(HeroClass::DemonHunter, AttackType::Melee, ItemType::SpellFocus),
];

/// Look up the off-style multiplier for a class/attack/item combination.
#[must_use]
pub fn hybrid_multiplier(
    class: HeroClass,
    attack_type: AttackType,
    item_type: ItemType,
) -> Option<f64> {
    HYBRID_PROFICIENCIES
        .iter()
        .find(|p| p.class == class && p.attack_type == attack_type && p.item_type == item_type)
        .map(|p| p.multiplier)
}

/// How much of an item's level counts for this class and attack type.
#[must_use]
pub fn effective_level(class: HeroClass, attack_type: AttackType, item: &InventoryItem) -> f64 {
    let level = f64::from(item.level);
    if let Some(multiplier) = hybrid_multiplier(class, attack_type, item.item_type) {
        return level * multiplier;
    }
    if affects(Some(item.item_type), attack_type) {
        level
    } else {
        0.0
    }
}

/// Which array an item goes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    /// Weapon array.
    Weapon,
    /// Armor array.
    Armor,
}

impl SlotKind {
    /// Route an item type for a class.
    #[must_use]
    pub const fn route(class: HeroClass, item_type: ItemType) -> Self {
        if item_type.is_weapon()
            || (matches!(item_type, ItemType::Shield) && class.wields_shield_as_weapon())
        {
            Self::Weapon
        } else {
            Self::Armor
        }
    }
}

/// Where an equipped item ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EquipOutcome {
    /// Appended to the weapon array at the effective level.
    Weapon {
        /// Effective level.
        level: f64,
    },
    /// Appended to the armor array at the raw level.
    Armor {
        /// Raw item level.
        level: f64,
    },
    /// Ranged weapon refused because a weapon is already held.
    Rejected,
}

impl<L> Combatant<L> {
    /// Equip one item and report where it went.
    ///
    /// Never fails. A ranged weapon offered while the weapon array is
    /// non-empty is dropped and the combatant is left unchanged.
    pub fn equip(&mut self, item: &InventoryItem) -> EquipOutcome {
        let attack_type = self.attack_type();
        let kind = SlotKind::route(self.class, item.item_type);

        let outcome = match kind {
            SlotKind::Weapon => {
                if item.item_type == ItemType::RangedWeapon && !self.equipment.weapons.is_empty() {
                    debug!(
                        name = %self.name,
                        item = %item.name,
                        held = self.equipment.weapons.len(),
                        "Ranged weapon rejected, weapon slot already taken"
                    );
                    return EquipOutcome::Rejected;
                }
                let level = effective_level(self.class, attack_type, item);
                self.equipment.weapons.push(GearSlot::from_item(item, level));
                EquipOutcome::Weapon { level }
            },
            SlotKind::Armor => {
                let level = f64::from(item.level);
                self.equipment.armor.push(GearSlot::from_item(item, level));
                EquipOutcome::Armor { level }
            },
        };

        trace!(
            item = %item.name,
            item_type = ?item.item_type,
            ?attack_type,
            ?outcome,
            "Equipped item"
        );
        outcome
    }

    /// Equip one item, returning the combatant for chaining.
    pub fn add_item(&mut self, item: &InventoryItem) -> &mut Self {
        self.equip(item);
        self
    }
}
