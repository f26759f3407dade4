use super::decision::Decision;
use crate::env::RngOracle;
use crate::opinion::{Opinion, OpinionTier};
use crate::registry::TraitId;
use crate::selector::{self, SelectorError, Weighted};

/// A courtier who can be received by the ruler.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub name: String,
    pub opinion: Opinion,
    pub weight: u32,
    pub traits: Vec<TraitId>,
    pub decisions: Vec<Decision>,
}

impl Character {
    pub fn new(name: impl Into<String>, opinion: i32, weight: u32) -> Self {
        Self {
            name: name.into(),
            opinion: Opinion::new(opinion),
            weight,
            traits: Vec::new(),
            decisions: Vec::new(),
        }
    }

    pub fn tier(&self) -> OpinionTier {
        self.opinion.tier()
    }

    /// Picks the decision for this interaction and tiers its choices by the
    /// current opinion.
    pub fn select_decision(
        &mut self,
        step: u32,
        rng: &mut dyn RngOracle,
    ) -> Result<usize, SelectorError> {
        let index = selector::select(&mut self.decisions, step, rng)?;
        let tier = self.tier();
        self.decisions[index].set_tier(tier);
        tracing::debug!(
            character = %self.name,
            decision = %self.decisions[index].name,
            %tier,
            "decision selected"
        );
        Ok(index)
    }

    /// Split borrow of the opinion and one decision.
    pub fn interaction_mut(&mut self, decision: usize) -> (&mut Opinion, &mut Decision) {
        (&mut self.opinion, &mut self.decisions[decision])
    }
}

impl Weighted for Character {
    fn weight(&self) -> u32 {
        self.weight
    }

    fn set_weight(&mut self, weight: u32) {
        self.weight = weight;
    }
}
