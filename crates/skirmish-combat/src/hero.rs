//! Hero records and hero combatant assembly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assembly::{EquipStrategy, HeroAssembly};
use crate::attack::AttackType;
use crate::attributes::{AttributeBlock, CombatVitals};
use crate::class::HeroClass;
use crate::combatant::Combatant;
use crate::item::InventoryItem;
use crate::luck::LuckProvider;

/// The seven gear slots a hero can fill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroEquipment {
    /// Left hand.
    pub left_hand: Option<InventoryItem>,
    /// Right hand.
    pub right_hand: Option<InventoryItem>,
    /// Body armor.
    pub body_armor: Option<InventoryItem>,
    /// Gauntlets.
    pub hand_armor: Option<InventoryItem>,
    /// Leggings.
    pub leg_armor: Option<InventoryItem>,
    /// Helmet.
    pub head_armor: Option<InventoryItem>,
    /// Greaves.
    pub foot_armor: Option<InventoryItem>,
}

impl HeroEquipment {
    /// Occupied slots in equip order: hands first (left before right),
    /// then body, hand, leg, head and foot armor.
    pub fn in_equip_order(&self) -> impl Iterator<Item = &InventoryItem> {
        [
            &self.left_hand,
            &self.right_hand,
            &self.body_armor,
            &self.hand_armor,
            &self.leg_armor,
            &self.head_armor,
            &self.foot_armor,
        ]
        .into_iter()
        .flatten()
    }
}

/// Persistent hero state, as loaded by the surrounding service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    /// Display name.
    pub name: String,
    /// Class.
    pub class: HeroClass,
    /// Character level.
    pub level: u32,
    /// Attributes.
    pub stats: AttributeBlock,
    /// Health.
    pub combat: CombatVitals,
    /// Worn gear.
    #[serde(default)]
    pub equipment: HeroEquipment,
    /// Everything the hero carries, quest items included.
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
}

impl Hero {
    /// Create a hero with no gear at full health.
    #[must_use]
    pub fn new(name: impl Into<String>, class: HeroClass, level: u32, max_health: i64) -> Self {
        Self {
            name: name.into(),
            class,
            level,
            stats: AttributeBlock::default(),
            combat: CombatVitals::full(max_health),
            equipment: HeroEquipment::default(),
            inventory: Vec::new(),
        }
    }

    /// Set the attribute block.
    #[must_use]
    pub fn with_stats(mut self, stats: AttributeBlock) -> Self {
        self.stats = stats;
        self
    }

    /// Set the worn gear.
    #[must_use]
    pub fn with_equipment(mut self, equipment: HeroEquipment) -> Self {
        self.equipment = equipment;
        self
    }

    /// Quest items in inventory order.
    pub fn quest_items(&self) -> impl Iterator<Item = &InventoryItem> {
        self.inventory.iter().filter(|item| item.is_quest())
    }
}

impl HeroAssembly<'_> {
    /// Build the hero's combatant.
    ///
    /// Defense equals the hero's level regardless of gear. Gear goes
    /// through the equip resolver in slot order, then weapons are sorted
    /// strongest first.
    pub fn assemble<P: LuckProvider>(&self, luck: &P) -> Combatant<P::Modifiers> {
        let hero = self.hero;
        let mut combatant = Combatant::new(
            hero.class,
            self.attack_type,
            hero.name.clone(),
            hero.level,
            hero.stats,
            luck.from_stat(hero.stats.luck),
        )
        .with_health(hero.combat.health, hero.combat.max_health)
        .with_damage_reduction(f64::from(hero.level));

        combatant.equipment.quests = hero.quest_items().cloned().collect();

        for item in hero.equipment.in_equip_order() {
            combatant.add_item(item);
        }
        combatant.equipment.sort_weapons();

        debug!(
            name = %combatant.name,
            level = combatant.level,
            attack_type = ?combatant.attack_type(),
            strategy = ?EquipStrategy::AttackTypeFiltered,
            weapons = combatant.weapon_count(),
            armor = combatant.armor_count(),
            quests = combatant.equipment.quests.len(),
            "Assembled hero combatant"
        );
        combatant
    }
}

impl<M> Combatant<M> {
    /// Build a combatant from a hero for the given attack type.
    pub fn from_hero<P>(hero: &Hero, attack_type: AttackType, luck: &P) -> Self
    where
        P: LuckProvider<Modifiers = M>,
    {
        HeroAssembly::new(hero, attack_type).assemble(luck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemType;

    fn raw_luck(luck: i64) -> i64 {
        luck
    }

    fn item(item_type: ItemType, level: u32) -> InventoryItem {
        InventoryItem::new("Gear", item_type, level)
    }

    #[test]
    fn test_scalars_copied() {
        let mut hero = Hero::new("Brakka", HeroClass::Gladiator, 12, 90)
            .with_stats(AttributeBlock { luck: 17, ..AttributeBlock::uniform(4) });
        hero.combat.health = 55;

        let c = Combatant::from_hero(&hero, AttackType::Melee, &raw_luck);

        assert_eq!(c.class, HeroClass::Gladiator);
        assert_eq!(c.attack_type(), AttackType::Melee);
        assert_eq!(c.level, 12);
        assert_eq!(c.name, "Brakka");
        assert_eq!(c.health, 55);
        assert_eq!(c.max_health, 90);
        assert_eq!(c.damage_reduction, 12.0);
        assert_eq!(c.attributes, hero.stats);
        assert_eq!(c.luck, 17);
    }

    #[test]
    fn test_melee_weapon_under_ranged_is_zero() {
        let hero = Hero::new("Ava", HeroClass::Ranger, 5, 30).with_equipment(HeroEquipment {
            left_hand: Some(item(ItemType::MeleeWeapon, 10)),
            ..HeroEquipment::default()
        });

        let c = Combatant::from_hero(&hero, AttackType::Ranged, &raw_luck);

        assert_eq!(c.weapon_count(), 1);
        assert_eq!(c.equipment.weapons[0].level, 0.0);
    }

    #[test]
    fn test_left_ranged_blocks_right_hand() {
        let hero = Hero::new("Ava", HeroClass::Ranger, 5, 30).with_equipment(HeroEquipment {
            left_hand: Some(item(ItemType::RangedWeapon, 10)),
            right_hand: Some(item(ItemType::RangedWeapon, 20)),
            ..HeroEquipment::default()
        });

        let c = Combatant::from_hero(&hero, AttackType::Ranged, &raw_luck);

        assert_eq!(c.weapon_count(), 1);
        assert_eq!(c.equipment.weapons[0].level, 10.0);
    }

    #[test]
    fn test_right_ranged_rejected_after_left_melee() {
        let hero = Hero::new("Ava", HeroClass::Ranger, 5, 30).with_equipment(HeroEquipment {
            left_hand: Some(item(ItemType::MeleeWeapon, 4)),
            right_hand: Some(item(ItemType::RangedWeapon, 20)),
            ..HeroEquipment::default()
        });

        let c = Combatant::from_hero(&hero, AttackType::Ranged, &raw_luck);

        assert_eq!(c.weapon_count(), 1);
        assert_eq!(c.equipment.weapons[0].item_type, Some(ItemType::MeleeWeapon));
    }

    #[test]
    fn test_right_ranged_claims_slot_when_left_empty() {
        let hero = Hero::new("Ava", HeroClass::Ranger, 5, 30).with_equipment(HeroEquipment {
            right_hand: Some(item(ItemType::RangedWeapon, 20)),
            ..HeroEquipment::default()
        });

        let c = Combatant::from_hero(&hero, AttackType::Ranged, &raw_luck);

        assert_eq!(c.weapon_count(), 1);
        assert_eq!(c.equipment.weapons[0].level, 20.0);
    }

    #[test]
    fn test_weapons_sorted_descending() {
        let hero = Hero::new("Mira", HeroClass::BattleMage, 8, 40).with_equipment(HeroEquipment {
            left_hand: Some(item(ItemType::MeleeWeapon, 10)),
            right_hand: Some(item(ItemType::SpellFocus, 6)),
            ..HeroEquipment::default()
        });

        let c = Combatant::from_hero(&hero, AttackType::Cast, &raw_luck);

        // Focus counts fully, the sword at half
        let levels: Vec<f64> = c.equipment.weapons.iter().map(|w| w.level).collect();
        assert_eq!(levels, vec![6.0, 5.0]);
    }

    #[test]
    fn test_armor_in_slot_order() {
        let hero = Hero::new("Tor", HeroClass::Fighter, 3, 25).with_equipment(HeroEquipment {
            foot_armor: Some(item(ItemType::FootArmor, 1)),
            body_armor: Some(item(ItemType::BodyArmor, 2)),
            head_armor: Some(item(ItemType::HeadArmor, 3)),
            hand_armor: Some(item(ItemType::HandArmor, 4)),
            leg_armor: Some(item(ItemType::LegArmor, 5)),
            ..HeroEquipment::default()
        });

        let c = Combatant::from_hero(&hero, AttackType::Melee, &raw_luck);

        let types: Vec<_> = c.equipment.armor.iter().filter_map(|a| a.item_type).collect();
        assert_eq!(
            types,
            vec![
                ItemType::BodyArmor,
                ItemType::HandArmor,
                ItemType::LegArmor,
                ItemType::HeadArmor,
                ItemType::FootArmor,
            ]
        );
    }

    #[test]
    fn test_paladin_shield_is_weapon() {
        let hero = Hero::new("Sol", HeroClass::Zealot, 9, 60).with_equipment(HeroEquipment {
            left_hand: Some(item(ItemType::MeleeWeapon, 7)),
            right_hand: Some(item(ItemType::Shield, 9)),
            ..HeroEquipment::default()
        });

        let c = Combatant::from_hero(&hero, AttackType::Smite, &raw_luck);

        assert_eq!(c.weapon_count(), 2);
        assert_eq!(c.armor_count(), 0);
        assert_eq!(c.equipment.weapons[0].item_type, Some(ItemType::Shield));
    }

    #[test]
    fn test_quest_items_pass_through() {
        let mut hero = Hero::new("Pip", HeroClass::Gambler, 2, 20);
        hero.inventory = vec![
            item(ItemType::Quest, 0),
            item(ItemType::MeleeWeapon, 3),
            item(ItemType::Quest, 0),
        ];

        let c = Combatant::from_hero(&hero, AttackType::Melee, &raw_luck);

        assert_eq!(c.equipment.quests.len(), 2);
        assert_eq!(c.equipment.quests[0], hero.inventory[0]);
        assert_eq!(c.equipment.quests[1], hero.inventory[2]);
        // Unequipped inventory never reaches the weapon array
        assert_eq!(c.weapon_count(), 0);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut hero = Hero::new("Pip", HeroClass::Gambler, 2, 20).with_equipment(HeroEquipment {
            left_hand: Some(item(ItemType::MeleeWeapon, 3)),
            ..HeroEquipment::default()
        });

        let c = Combatant::from_hero(&hero, AttackType::Melee, &raw_luck);
        hero.level = 50;
        hero.equipment.left_hand = None;

        assert_eq!(c.level, 2);
        assert_eq!(c.weapon_count(), 1);
    }
}
