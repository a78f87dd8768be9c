//! Attack types and the weapon affinity table.

use serde::{Deserialize, Serialize};

use crate::item::ItemType;

/// A combat style. Decides which weapons count toward damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackType {
    /// Melee weapons.
    Melee,
    /// Bows.
    Ranged,
    /// Spells.
    Cast,
    /// Holy strikes.
    Smite,
    /// Blood magic.
    Blood,
}

impl AttackType {
    /// Every attack type.
    pub const ALL: [Self; 5] = [
        Self::Melee,
        Self::Ranged,
        Self::Cast,
        Self::Smite,
        Self::Blood,
    ];

    /// Item types that add nothing under this attack type.
    ///
    /// The table is asymmetric on purpose (Smite only drops ranged weapons).
    #[must_use]
    pub const fn non_contributing(self) -> &'static [ItemType] {
        match self {
            Self::Blood => &[ItemType::RangedWeapon, ItemType::MeleeWeapon],
            Self::Smite => &[ItemType::RangedWeapon],
            Self::Cast => &[ItemType::MeleeWeapon, ItemType::RangedWeapon],
            Self::Ranged => &[ItemType::MeleeWeapon, ItemType::SpellFocus],
            Self::Melee => &[ItemType::SpellFocus, ItemType::RangedWeapon],
        }
    }

    /// Check if an item of the given type contributes under this attack type.
    #[must_use]
    pub fn is_affected_by(self, item_type: ItemType) -> bool {
        !self.non_contributing().contains(&item_type)
    }
}

/// Check if an item type contributes damage under an attack type.
///
/// Untyped slots (generated monster weapons) always contribute.
#[must_use]
pub fn affects(item_type: Option<ItemType>, attack_type: AttackType) -> bool {
    match item_type {
        Some(item_type) => attack_type.is_affected_by(item_type),
        None => true,
    }
}
