//! # Skirmish Combat
//!
//! Turns persistent character state into `Combatant` snapshots for the
//! battle resolver.
//!
//! This crate provides:
//! - Attack types and the weapon affinity table
//! - Equip resolution (effective weapon level, weapon/armor routing)
//! - Hero combatant assembly
//! - Procedural monster stats and gear, with authored overrides
//! - The luck provider interface
//! - Balance configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod assembly;
pub mod attack;
pub mod attributes;
pub mod class;
pub mod combatant;
pub mod config;
pub mod gear;
pub mod hero;
pub mod item;
pub mod luck;
pub mod monster;
pub mod resolver;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::assembly::*;
    pub use crate::attack::*;
    pub use crate::attributes::*;
    pub use crate::class::*;
    pub use crate::combatant::*;
    pub use crate::config::*;
    pub use crate::gear::*;
    pub use crate::hero::*;
    pub use crate::item::*;
    pub use crate::luck::*;
    pub use crate::monster::*;
    pub use crate::resolver::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tier(i64);

    struct TierLuck;

    impl LuckProvider for TierLuck {
        type Modifiers = Tier;

        fn from_stat(&self, luck: i64) -> Tier {
            Tier(luck / 10)
        }
    }

    #[test]
    fn test_hero_versus_monster_snapshot() {
        let hero = Hero::new("Ilsa", HeroClass::DemonHunter, 15, 120)
            .with_stats(AttributeBlock {
                luck: 42,
                ..AttributeBlock::uniform(20)
            })
            .with_equipment(HeroEquipment {
                left_hand: Some(InventoryItem::new("Rune Blade", ItemType::MeleeWeapon, 15)),
                right_hand: Some(InventoryItem::new("Ember Orb", ItemType::SpellFocus, 14)),
                body_armor: Some(InventoryItem::new("Chain Body Armor", ItemType::BodyArmor, 12)),
                ..HeroEquipment::default()
            });
        let monster = Monster::new("Stone Golem", 15, AttackType::Melee, 900);

        let hero_side = Combatant::from_hero(&hero, AttackType::Cast, &TierLuck);
        let monster_side = Combatant::from_monster(&monster, None, &TierLuck);

        assert_eq!(hero_side.luck, Tier(4));
        let levels: Vec<f64> = hero_side.equipment.weapons.iter().map(|w| w.level).collect();
        assert_eq!(levels, vec![14.0, 7.5]);
        assert_eq!(hero_side.armor_count(), 1);

        assert!(monster_side.is_monster());
        assert_eq!(monster_side.weapon_count(), 2);
        assert_eq!(monster_side.armor_count(), 5);
        assert_eq!(
            monster_side.luck,
            Tier(monster_side.attributes.luck / 10)
        );
    }

    #[test]
    fn test_combatant_serializes() {
        let monster = Monster::new("Bat", 2, AttackType::Blood, 12);
        let c = Combatant::from_monster(&monster, None, &|luck: i64| luck);

        let json = serde_json::to_value(&c).expect("serialize");
        assert_eq!(json["class"], "Monster");
        assert_eq!(json["attackType"], "Blood");
        assert_eq!(json["maxHealth"], 12);
        assert_eq!(json["equipment"]["weapons"].as_array().map(Vec::len), Some(2));

        let back: Combatant<i64> = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, c);
    }
}
