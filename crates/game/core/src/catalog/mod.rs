//! The character catalog: characters own decisions, decisions own choices.
//!
//! Content is static after linking. At run time only opinions, weights and
//! the transient effect state (tiers, constant-item adjustments) change.
mod character;
mod choice;
mod decision;

pub use character::Character;
pub use choice::Choice;
pub use decision::Decision;

use crate::env::RngOracle;
use crate::link::EntityKind;
use crate::registry::{CharacterId, Handle, Registry};
use crate::selector::{self, SelectorError};

/// Every character that can be received at court.
#[derive(Clone, Debug)]
pub struct Roster {
    characters: Registry<CharacterId, Character>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            characters: Registry::new(EntityKind::Character),
        }
    }

    pub fn registry(&self) -> &Registry<CharacterId, Character> {
        &self.characters
    }

    pub(crate) fn registry_mut(&mut self) -> &mut Registry<CharacterId, Character> {
        &mut self.characters
    }

    pub fn get(&self, id: CharacterId) -> &Character {
        self.characters.get(id)
    }

    pub fn get_mut(&mut self, id: CharacterId) -> &mut Character {
        self.characters.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Draws `size` distinct characters.
    ///
    /// Duplicate draws are discarded and redrawn; every draw, kept or not,
    /// reweights the roster. The caller guarantees `size <= len()`, which the
    /// link pass enforces.
    pub fn select_cohort(
        &mut self,
        size: usize,
        step: u32,
        rng: &mut dyn RngOracle,
    ) -> Result<Vec<CharacterId>, SelectorError> {
        let mut cohort = Vec::with_capacity(size);
        while cohort.len() < size {
            let index = selector::select(self.characters.entries_mut(), step, rng)?;
            let id = CharacterId::from_index(index);
            if cohort.contains(&id) {
                tracing::debug!(character = %self.characters.get(id).name, "duplicate draw, retrying");
                continue;
            }
            cohort.push(id);
        }
        Ok(cohort)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
