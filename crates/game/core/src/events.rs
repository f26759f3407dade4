//! World events: counters fed by choices that fire once per day at most.
//!
//! Two trigger semantics share one registry:
//!
//! - [`EventKind::Chance`]: the counter is a percentage, clamped to
//!   `[0, 100]`, and the event fires when a daily roll lands below it.
//! - [`EventKind::Goal`]: the counter accumulates without bound and the event
//!   fires once it reaches the goal.
//!
//! Firing applies the event's resource effects at multiplier 1.0 and resets
//! the counter to zero.

use crate::effect::{ResourceChange, ResourceEffect};
use crate::env::RngOracle;
use crate::link::EntityKind;
use crate::registry::{EventId, Registry};
use crate::resources::ResourceLedger;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Chance,
    Goal { goal: i32 },
}

/// Result of a single event check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Fired,
    NotFired,
}

impl Trigger {
    pub fn fired(self) -> bool {
        matches!(self, Self::Fired)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventEntity {
    pub name: String,
    pub description: String,
    pub kind: EventKind,
    counter: i32,
    pub effects: Vec<ResourceEffect>,
}

impl EventEntity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: EventKind,
        counter: i32,
        effects: Vec<ResourceEffect>,
    ) -> Self {
        let mut event = Self {
            name: name.into(),
            description: description.into(),
            kind,
            counter: 0,
            effects,
        };
        event.add(counter);
        event
    }

    pub fn counter(&self) -> i32 {
        self.counter
    }

    pub fn add(&mut self, amount: i32) {
        let counter = self.counter.saturating_add(amount);
        self.counter = match self.kind {
            EventKind::Chance => counter.clamp(0, 100),
            EventKind::Goal { .. } => counter,
        };
    }

    /// Checks the trigger condition and fires on success.
    ///
    /// Goal events never consume a draw, so the RNG stream only advances for
    /// chance events.
    pub fn check(&mut self, ledger: &mut ResourceLedger, rng: &mut dyn RngOracle) -> Trigger {
        let fires = match self.kind {
            EventKind::Chance => {
                let roll = rng.percent();
                tracing::debug!(event = %self.name, roll, counter = self.counter, "event roll");
                (roll as i64) < i64::from(self.counter)
            }
            EventKind::Goal { goal } => self.counter >= goal,
        };
        if !fires {
            return Trigger::NotFired;
        }

        for effect in &self.effects {
            effect.apply_flat(ledger);
        }
        self.counter = 0;
        Trigger::Fired
    }

    /// Flat previews of what firing does.
    pub fn preview(&self, ledger: &ResourceLedger) -> Vec<ResourceChange> {
        self.effects.iter().map(|e| e.preview_flat(ledger)).collect()
    }
}

#[derive(Clone, Debug)]
pub struct EventRegistry {
    events: Registry<EventId, EventEntity>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self {
            events: Registry::new(EntityKind::Event),
        }
    }

    pub fn registry(&self) -> &Registry<EventId, EventEntity> {
        &self.events
    }

    pub(crate) fn registry_mut(&mut self) -> &mut Registry<EventId, EventEntity> {
        &mut self.events
    }

    pub fn get(&self, id: EventId) -> &EventEntity {
        self.events.get(id)
    }

    pub fn add(&mut self, id: EventId, amount: i32) {
        self.events.get_mut(id).add(amount);
    }

    /// Checks every event once, in registry order. Returns the ones that fired.
    pub fn check_all(&mut self, ledger: &mut ResourceLedger, rng: &mut dyn RngOracle) -> Vec<EventId> {
        let mut fired = Vec::new();
        for (id, event) in self.events.iter_mut() {
            if event.check(ledger, rng).fired() {
                tracing::info!(event = %event.name, "event fired");
                fired.push(id);
            }
        }
        fired
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}
