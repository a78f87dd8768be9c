//! Combatant assembly.
//!
//! Heroes and monsters reach the same `Combatant` shape by different
//! routes. Heroes send each item through the equip resolver, so their
//! weapons are filtered by attack type. Monsters take generated or authored
//! gear as-is and are never filtered.

use serde::{Deserialize, Serialize};

use crate::attack::AttackType;
use crate::combatant::Combatant;
use crate::config::MonsterScaling;
use crate::hero::Hero;
use crate::luck::LuckProvider;
use crate::monster::{Monster, MonsterEquipment};

/// How gear reaches a combatant's slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipStrategy {
    /// Every item goes through the equip resolver.
    AttackTypeFiltered,
    /// Gear is copied in wholesale.
    Unfiltered,
}

/// Inputs for a hero combatant.
#[derive(Debug, Clone, Copy)]
pub struct HeroAssembly<'a> {
    /// Source hero.
    pub hero: &'a Hero,
    /// Attack type chosen for this encounter.
    pub attack_type: AttackType,
}

impl<'a> HeroAssembly<'a> {
    /// Create a hero assembly.
    #[must_use]
    pub const fn new(hero: &'a Hero, attack_type: AttackType) -> Self {
        Self { hero, attack_type }
    }
}

/// Inputs for a monster combatant.
#[derive(Debug, Clone, Copy)]
pub struct MonsterAssembly<'a> {
    /// Source monster.
    pub monster: &'a Monster,
    /// Authored gear, replacing the generated gear when present.
    pub equipment: Option<&'a MonsterEquipment>,
    /// Attribute curve.
    pub scaling: MonsterScaling,
}

impl<'a> MonsterAssembly<'a> {
    /// Create a monster assembly with the default curve.
    #[must_use]
    pub fn new(monster: &'a Monster, equipment: Option<&'a MonsterEquipment>) -> Self {
        Self {
            monster,
            equipment,
            scaling: MonsterScaling::default(),
        }
    }

    /// Use a different attribute curve.
    #[must_use]
    pub fn with_scaling(mut self, scaling: MonsterScaling) -> Self {
        self.scaling = scaling;
        self
    }
}

/// Either kind of combatant assembly.
#[derive(Debug, Clone, Copy)]
pub enum Assembly<'a> {
    /// Hero, filtered through the equip resolver.
    Hero(HeroAssembly<'a>),
    /// Monster, gear taken wholesale.
    Monster(MonsterAssembly<'a>),
}

impl Assembly<'_> {
    /// The equip strategy this assembly uses.
    #[must_use]
    pub const fn equip_strategy(&self) -> EquipStrategy {
        match self {
            Self::Hero(_) => EquipStrategy::AttackTypeFiltered,
            Self::Monster(_) => EquipStrategy::Unfiltered,
        }
    }

    /// Build the combatant.
    pub fn assemble<P: LuckProvider>(&self, luck: &P) -> Combatant<P::Modifiers> {
        match self {
            Self::Hero(hero) => hero.assemble(luck),
            Self::Monster(monster) => monster.assemble(luck),
        }
    }
}

impl<'a> From<HeroAssembly<'a>> for Assembly<'a> {
    fn from(assembly: HeroAssembly<'a>) -> Self {
        Self::Hero(assembly)
    }
}

impl<'a> From<MonsterAssembly<'a>> for Assembly<'a> {
    fn from(assembly: MonsterAssembly<'a>) -> Self {
        Self::Monster(assembly)
    }
}
