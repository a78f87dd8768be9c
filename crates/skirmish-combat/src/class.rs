//! Character classes.

use serde::{Deserialize, Serialize};

/// A character class.
///
/// The first nine variants are starting classes, the next nine are their
/// upgraded forms, and `Monster` is the synthetic class every monster
/// combatant carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroClass {
    /// Luck-focused starting class.
    Gambler,
    /// Strength-focused melee class.
    Fighter,
    /// Reckless melee class.
    Berserker,
    /// Intelligence caster.
    Wizard,
    /// Wisdom caster.
    Warlock,
    /// Hybrid caster with melee proficiency.
    BattleMage,
    /// Holy warrior; fights with a shield.
    Paladin,
    /// Bow user.
    Ranger,
    /// Blood caster.
    BloodMage,
    /// Upgraded Gambler.
    Daredevil,
    /// Upgraded Fighter.
    Gladiator,
    /// Upgraded Berserker.
    EnragedBerserker,
    /// Upgraded Wizard.
    MasterWizard,
    /// Upgraded Warlock.
    MasterWarlock,
    /// Upgraded BattleMage.
    DemonHunter,
    /// Upgraded Paladin.
    Zealot,
    /// Upgraded Ranger.
    Archer,
    /// Upgraded BloodMage.
    Vampire,
    /// Synthetic class for monsters.
    Monster,
}

impl HeroClass {
    /// Every class, starting classes first.
    pub const ALL: [Self; 19] = [
        Self::Gambler,
        Self::Fighter,
        Self::Berserker,
        Self::Wizard,
        Self::Warlock,
        Self::BattleMage,
        Self::Paladin,
        Self::Ranger,
        Self::BloodMage,
        Self::Daredevil,
        Self::Gladiator,
        Self::EnragedBerserker,
        Self::MasterWizard,
        Self::MasterWarlock,
        Self::DemonHunter,
        Self::Zealot,
        Self::Archer,
        Self::Vampire,
        Self::Monster,
    ];

    /// The class this one was upgraded from, or itself for starting classes.
    #[must_use]
    pub const fn base_class(self) -> Self {
        match self {
            Self::Daredevil => Self::Gambler,
            Self::Gladiator => Self::Fighter,
            Self::EnragedBerserker => Self::Berserker,
            Self::MasterWizard => Self::Wizard,
            Self::MasterWarlock => Self::Warlock,
            Self::DemonHunter => Self::BattleMage,
            Self::Zealot => Self::Paladin,
            Self::Archer => Self::Ranger,
            Self::Vampire => Self::BloodMage,
            other => other,
        }
    }

    /// Check if this is an upgraded class.
    #[must_use]
    pub const fn is_upgraded(self) -> bool {
        matches!(
            self,
            Self::Daredevil
                | Self::Gladiator
                | Self::EnragedBerserker
                | Self::MasterWizard
                | Self::MasterWarlock
                | Self::DemonHunter
                | Self::Zealot
                | Self::Archer
                | Self::Vampire
        )
    }

    /// Check if shields go into this class's weapon slots.
    #[must_use]
    pub const fn wields_shield_as_weapon(self) -> bool {
        matches!(self, Self::Paladin | Self::Zealot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upgrade_lines() {
        assert_eq!(HeroClass::DemonHunter.base_class(), HeroClass::BattleMage);
        assert_eq!(HeroClass::Zealot.base_class(), HeroClass::Paladin);
        assert_eq!(HeroClass::Wizard.base_class(), HeroClass::Wizard);
        assert_eq!(HeroClass::Monster.base_class(), HeroClass::Monster);
    }

    #[test]
    fn test_upgraded_count() {
        let upgraded = HeroClass::ALL.iter().filter(|c| c.is_upgraded()).count();
        assert_eq!(upgraded, 9);
        assert!(!HeroClass::Monster.is_upgraded());
        assert!(HeroClass::Vampire.is_upgraded());
    }

    #[test]
    fn test_shield_wielders() {
        let wielders: Vec<_> = HeroClass::ALL
            .into_iter()
            .filter(|c| c.wields_shield_as_weapon())
            .collect();
        assert_eq!(wielders, vec![HeroClass::Paladin, HeroClass::Zealot]);
    }
}
