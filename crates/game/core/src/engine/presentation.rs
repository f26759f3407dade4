//! The presentation contract and the views handed across it.
//!
//! Everything passed to a [`PresentationSink`] is already computed. A sink
//! formats and displays; it never decides anything.

use crate::effect::{ChancePreview, ChanceResult, EventChange, ResourceChange};
use crate::items::ItemEntry;
use crate::objectives::ObjectiveEntry;
use crate::opinion::OpinionTier;
use crate::resources::ResourceEntry;
use crate::traits::TraitRelation;

/// Receives everything the day cycle wants shown.
pub trait PresentationSink {
    fn render_interaction(&mut self, view: &InteractionView);

    fn render_choice_outcome(&mut self, outcome: &ChoiceOutcome);

    /// `None` when no event fired. The cycle does not wait for an
    /// acknowledgement in that case.
    fn render_event_summary(&mut self, summary: Option<&EventSummary>);

    fn render_day_summary(&mut self, summary: &DaySummary);

    fn render_resource_ledger(&mut self, resources: &[ResourceEntry]);

    fn render_item_registry(&mut self, items: &[ItemEntry]);

    fn render_objective_registry(&mut self, objectives: &[ObjectiveEntry]);
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitView {
    pub name: String,
    pub description: String,
}

/// A choice trait, tagged by how the current character sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitTag {
    pub name: String,
    pub relation: TraitRelation,
}

/// One choice as offered: what it does at the current tier and whether it
/// can be taken.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChoicePreview {
    pub index: usize,
    pub description: String,
    pub traits: Vec<TraitTag>,
    pub resources: Vec<ResourceChange>,
    pub events: Vec<EventChange>,
    pub chances: Vec<ChancePreview>,
    pub affordable: bool,
}

/// A character presenting a decision.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionView {
    pub day: u32,
    /// Position of this character in today's cohort, from zero.
    pub position: usize,
    pub cohort_size: usize,
    pub character: String,
    pub opinion: i32,
    pub tier: OpinionTier,
    pub traits: Vec<TraitView>,
    pub decision: String,
    pub description: String,
    pub choices: Vec<ChoicePreview>,
}

/// What happened when a choice was taken.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChoiceOutcome {
    pub character: String,
    pub result: String,
    pub chances: Vec<ChanceResult>,
    pub resources: Vec<ResourceChange>,
    pub events: Vec<EventChange>,
    /// Net opinion change of the character, constant items excluded.
    pub opinion_change: i32,
}

impl ChoiceOutcome {
    /// Display lines: the result, each chance with its changes, the choice's
    /// own resource changes, then the event counter changes.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.result.clone()];
        for chance in &self.chances {
            lines.push(chance.text.clone());
            lines.extend(chance.changes.iter().map(ToString::to_string));
        }
        lines.extend(self.resources.iter().map(ToString::to_string));
        lines.extend(self.events.iter().map(ToString::to_string));
        lines
    }
}

impl core::fmt::Display for ChoiceOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FiredEvent {
    pub name: String,
    pub description: String,
    pub changes: Vec<ResourceChange>,
}

/// Every event that fired in one daily check.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventSummary {
    pub events: Vec<FiredEvent>,
}

impl core::fmt::Display for EventSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{}\n{}", event.name, event.description)?;
            for change in &event.changes {
                write!(f, "\n{change}")?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySummary {
    pub day: u32,
    pub people: usize,
}

impl core::fmt::Display for DaySummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Day {} has ended. You dealt with {} people", self.day, self.people)
    }
}
