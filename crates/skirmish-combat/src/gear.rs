//! Weapon and armor slots held by a combatant.

use serde::{Deserialize, Serialize};
use skirmish_common::BaseItemId;

use crate::item::{EnchantmentType, InventoryItem, ItemType};

/// One occupied equipment slot.
///
/// For weapons `level` is the attack-type-adjusted contribution and may be
/// fractional. For armor it is always the raw item level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearSlot {
    /// Effective level.
    pub level: f64,
    /// Catalog entry, if the slot came from a real item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_item: Option<BaseItemId>,
    /// Enchantment, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enchantment: Option<EnchantmentType>,
    /// Item type. Generated monster weapons have none.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
}

/// A slot in the weapon array.
pub type WeaponSlot = GearSlot;
/// A slot in the armor array.
pub type ArmorSlot = GearSlot;

impl GearSlot {
    /// Create a bare slot at a level.
    #[must_use]
    pub const fn new(level: f64) -> Self {
        Self {
            level,
            base_item: None,
            enchantment: None,
            item_type: None,
        }
    }

    /// Create a slot from an item, with the level already resolved.
    #[must_use]
    pub fn from_item(item: &InventoryItem, level: f64) -> Self {
        Self {
            level,
            base_item: item.base_item.clone(),
            enchantment: item.enchantment,
            item_type: Some(item.item_type),
        }
    }

    /// Set the item type tag.
    #[must_use]
    pub fn with_type(mut self, item_type: ItemType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    /// Set the enchantment.
    #[must_use]
    pub fn with_enchantment(mut self, enchantment: Option<EnchantmentType>) -> Self {
        self.enchantment = enchantment;
        self
    }
}

/// Everything a combatant has equipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatantGear {
    /// Weapon slots, strongest first once sorted.
    pub weapons: Vec<WeaponSlot>,
    /// Armor slots in equip order.
    pub armor: Vec<ArmorSlot>,
    /// Quest items, carried verbatim.
    pub quests: Vec<InventoryItem>,
}

impl CombatantGear {
    /// Create empty gear.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort weapons by descending level. Stable, so equal levels keep
    /// their equip order.
    pub fn sort_weapons(&mut self) {
        self.weapons.sort_by(|a, b| b.level.total_cmp(&a.level));
    }

    /// Number of weapon and armor slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.weapons.len() + self.armor.len()
    }
}
