//! Monster records, procedural stat/gear generation and monster assembly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assembly::{EquipStrategy, MonsterAssembly};
use crate::attack::AttackType;
use crate::attributes::{AttributeBlock, CombatVitals};
use crate::class::HeroClass;
use crate::combatant::Combatant;
use crate::config::MonsterScaling;
use crate::gear::{CombatantGear, GearSlot};
use crate::item::{EnchantmentType, ItemType};
use crate::luck::LuckProvider;

// ============================================================================
// Records
// ============================================================================

/// Armor piece order for generated monster gear.
pub const MONSTER_ARMOR_ORDER: [ItemType; 5] = [
    ItemType::BodyArmor,
    ItemType::HandArmor,
    ItemType::LegArmor,
    ItemType::HeadArmor,
    ItemType::FootArmor,
];

/// Persistent monster state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    /// Display name.
    pub name: String,
    /// Monster level. Drives every generated stat.
    pub level: u32,
    /// How the monster attacks.
    pub attack_type: AttackType,
    /// Health.
    pub combat: CombatVitals,
}

impl Monster {
    /// Create a monster at full health.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        level: u32,
        attack_type: AttackType,
        max_health: i64,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            attack_type,
            combat: CombatVitals::full(max_health),
        }
    }
}

/// One hand-authored gear piece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonsterGearPiece {
    /// Piece level.
    pub level: u32,
    /// Optional enchantment.
    pub enchantment: Option<EnchantmentType>,
}

impl MonsterGearPiece {
    /// Create an unenchanted piece.
    #[must_use]
    pub const fn new(level: u32) -> Self {
        Self {
            level,
            enchantment: None,
        }
    }

    fn slot(self) -> GearSlot {
        GearSlot::new(f64::from(self.level)).with_enchantment(self.enchantment)
    }
}

/// Hand-authored gear for a scripted encounter.
///
/// Missing pieces deserialize as level 0 with no enchantment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonsterEquipment {
    /// Body armor.
    pub body_armor: MonsterGearPiece,
    /// Gauntlets.
    pub hand_armor: MonsterGearPiece,
    /// Leggings.
    pub leg_armor: MonsterGearPiece,
    /// Helmet.
    pub head_armor: MonsterGearPiece,
    /// Greaves.
    pub foot_armor: MonsterGearPiece,
    /// Left hand.
    pub left_hand: MonsterGearPiece,
    /// Right hand.
    pub right_hand: MonsterGearPiece,
}

impl MonsterEquipment {
    /// Every piece at the same level, unenchanted.
    #[must_use]
    pub const fn uniform(level: u32) -> Self {
        let piece = MonsterGearPiece::new(level);
        Self {
            body_armor: piece,
            hand_armor: piece,
            leg_armor: piece,
            head_armor: piece,
            foot_armor: piece,
            left_hand: piece,
            right_hand: piece,
        }
    }
}

// ============================================================================
// Generation
// ============================================================================

/// Attribute block for a monster level.
///
/// Monsters have no spread: all seven attributes share one value.
#[must_use]
pub fn stats_for_level(level: u32, scaling: &MonsterScaling) -> AttributeBlock {
    AttributeBlock::uniform(scaling.stat_for_level(level))
}

/// Generated gear: five armor pieces and two untyped weapons, all at `level`.
///
/// Weapons carry no item type, so attack-type filtering never touches them.
#[must_use]
pub fn equipment_for_level(level: u32) -> CombatantGear {
    let level = f64::from(level);
    CombatantGear {
        weapons: vec![GearSlot::new(level), GearSlot::new(level)],
        armor: MONSTER_ARMOR_ORDER
            .into_iter()
            .map(|item_type| GearSlot::new(level).with_type(item_type))
            .collect(),
        quests: Vec::new(),
    }
}

/// Map hand-authored gear into the generated shape.
///
/// Levels and enchantments carry over; armor is tagged with its piece type,
/// weapons stay untyped.
#[must_use]
pub fn equipment_from_override(equipment: &MonsterEquipment) -> CombatantGear {
    let armor_pieces = [
        equipment.body_armor,
        equipment.hand_armor,
        equipment.leg_armor,
        equipment.head_armor,
        equipment.foot_armor,
    ];
    CombatantGear {
        weapons: vec![equipment.left_hand.slot(), equipment.right_hand.slot()],
        armor: armor_pieces
            .into_iter()
            .zip(MONSTER_ARMOR_ORDER)
            .map(|(piece, item_type)| piece.slot().with_type(item_type))
            .collect(),
        quests: Vec::new(),
    }
}

/// Health-scaled luck tiers for monsters.
///
/// Computed from maximum health. `from_monster` does not use these: monster
/// luck comes from the luck provider like everyone else's. Kept so callers
/// can opt into health-based tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterLuckTiers {
    /// Damage spread.
    pub small_modifier: f64,
    /// Critical.
    pub large_modifier: f64,
    /// Super crit.
    pub ultra_modifier: f64,
}

impl MonsterLuckTiers {
    /// Compute tiers from maximum health.
    #[must_use]
    pub fn from_max_health(max_health: i64) -> Self {
        let health = max_health as f64;
        Self {
            small_modifier: health / (health + 20.0),
            large_modifier: health / (health + 100.0),
            ultra_modifier: health / (health + 500.0),
        }
    }
}

// ============================================================================
// Assembly
// ============================================================================

impl MonsterAssembly<'_> {
    /// Build the monster's combatant.
    ///
    /// Gear comes wholesale from the override or the level curve; the equip
    /// resolver is not involved. Defense is half the generated constitution.
    pub fn assemble<P: LuckProvider>(&self, luck: &P) -> Combatant<P::Modifiers> {
        let monster = self.monster;
        let attributes = stats_for_level(monster.level, &self.scaling);

        let mut combatant = Combatant::new(
            HeroClass::Monster,
            monster.attack_type,
            monster.name.clone(),
            monster.level,
            attributes,
            luck.from_stat(attributes.luck),
        )
        .with_health(monster.combat.health, monster.combat.max_health)
        .with_damage_reduction(attributes.constitution as f64 / 2.0);

        combatant.equipment = match self.equipment {
            Some(equipment) => equipment_from_override(equipment),
            None => equipment_for_level(monster.level),
        };

        debug!(
            name = %combatant.name,
            level = combatant.level,
            attack_type = ?combatant.attack_type(),
            strategy = ?EquipStrategy::Unfiltered,
            authored = self.equipment.is_some(),
            "Assembled monster combatant"
        );
        combatant
    }
}

impl<M> Combatant<M> {
    /// Build a combatant from a monster with the default balance curve.
    pub fn from_monster<P>(monster: &Monster, equipment: Option<&MonsterEquipment>, luck: &P) -> Self
    where
        P: LuckProvider<Modifiers = M>,
    {
        Self::from_monster_with(monster, equipment, MonsterScaling::default(), luck)
    }

    /// Build a combatant from a monster with an explicit balance curve.
    pub fn from_monster_with<P>(
        monster: &Monster,
        equipment: Option<&MonsterEquipment>,
        scaling: MonsterScaling,
        luck: &P,
    ) -> Self
    where
        P: LuckProvider<Modifiers = M>,
    {
        MonsterAssembly::new(monster, equipment)
            .with_scaling(scaling)
            .assemble(luck)
    }
}

// ============================================================================
// Tests
// ============================================================================
