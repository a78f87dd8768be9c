//! Inventory items as supplied by the persistence layer.

use serde::{Deserialize, Serialize};
use skirmish_common::{BaseItemId, ItemId};

/// Kind of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    /// Quest item; never used in combat math.
    Quest,
    /// Swords, axes, maces.
    MeleeWeapon,
    /// Bows and crossbows.
    RangedWeapon,
    /// Shields.
    Shield,
    /// Wands, orbs, tomes.
    SpellFocus,
    /// Body armor.
    BodyArmor,
    /// Gauntlets.
    HandArmor,
    /// Leggings.
    LegArmor,
    /// Helmets.
    HeadArmor,
    /// Greaves.
    FootArmor,
    /// Rings, amulets, trinkets.
    Accessory,
}

impl ItemType {
    /// Every item type.
    pub const ALL: [Self; 11] = [
        Self::Quest,
        Self::MeleeWeapon,
        Self::RangedWeapon,
        Self::Shield,
        Self::SpellFocus,
        Self::BodyArmor,
        Self::HandArmor,
        Self::LegArmor,
        Self::HeadArmor,
        Self::FootArmor,
        Self::Accessory,
    ];

    /// Check if this is a weapon for every class.
    ///
    /// Shields are not included; whether a shield is a weapon depends on
    /// the class holding it.
    #[must_use]
    pub const fn is_weapon(self) -> bool {
        matches!(self, Self::MeleeWeapon | Self::RangedWeapon | Self::SpellFocus)
    }

    /// Check if this is one of the five worn armor pieces.
    #[must_use]
    pub const fn is_armor(self) -> bool {
        matches!(
            self,
            Self::BodyArmor | Self::HandArmor | Self::LegArmor | Self::HeadArmor | Self::FootArmor
        )
    }
}

/// Enchantment on an item. Carried through to the battle resolver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum EnchantmentType {
    BonusStrength,
    BonusDexterity,
    BonusConstitution,
    BonusIntelligence,
    BonusWisdom,
    BonusWillpower,
    BonusCharisma,
    BonusLuck,
    BonusPhysical,
    BonusMental,
    BonusAllStats,
    MinusEnemyStrength,
    MinusEnemyDexterity,
    MinusEnemyConstitution,
    MinusEnemyIntelligence,
    MinusEnemyWisdom,
    MinusEnemyWillpower,
    StrengthSteal,
    DexteritySteal,
    ConstitutionSteal,
    IntelligenceSteal,
    WisdomSteal,
    WillpowerSteal,
    LuckSteal,
    AllStatsSteal,
    Vampirism,
    BigMelee,
    BigCaster,
    WisDexWill,
}

/// An item owned by a hero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Instance ID.
    pub id: ItemId,
    /// Catalog entry this item was made from.
    #[serde(default)]
    pub base_item: Option<BaseItemId>,
    /// Display name.
    pub name: String,
    /// Item kind.
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Raw item level.
    pub level: u32,
    /// Optional enchantment.
    #[serde(default)]
    pub enchantment: Option<EnchantmentType>,
}

impl InventoryItem {
    /// Create an unenchanted item with a fresh ID.
    #[must_use]
    pub fn new(name: impl Into<String>, item_type: ItemType, level: u32) -> Self {
        let name = name.into();
        Self {
            id: ItemId::new(),
            base_item: Some(BaseItemId::from_name(&name)),
            name,
            item_type,
            level,
            enchantment: None,
        }
    }

    /// Set the enchantment.
    #[must_use]
    pub fn with_enchantment(mut self, enchantment: EnchantmentType) -> Self {
        self.enchantment = Some(enchantment);
        self
    }

    /// Check if this is a quest item.
    #[must_use]
    pub fn is_quest(&self) -> bool {
        self.item_type == ItemType::Quest
    }
}
