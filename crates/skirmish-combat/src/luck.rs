//! Luck interface.
//!
//! The tiered luck computation lives outside this crate. Combatants only
//! carry its output, and nothing here looks inside it.

/// Turns a raw luck attribute into the modifiers the battle resolver reads.
pub trait LuckProvider {
    /// Opaque modifier value stored on the combatant.
    type Modifiers;

    /// Compute modifiers from a luck attribute.
    fn from_stat(&self, luck: i64) -> Self::Modifiers;
}

impl<F, M> LuckProvider for F
where
    F: Fn(i64) -> M,
{
    type Modifiers = M;

    fn from_stat(&self, luck: i64) -> M {
        self(luck)
    }
}
