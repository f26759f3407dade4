//! Event effects: push an event's counter up (or down).

use crate::events::EventRegistry;
use crate::registry::EventId;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventEffect {
    pub event: EventId,
    pub amount: i32,
}

impl EventEffect {
    pub fn new(event: EventId, amount: i32) -> Self {
        Self { event, amount }
    }

    pub fn apply(&self, events: &mut EventRegistry) -> EventChange {
        events.add(self.event, self.amount);
        self.preview(events)
    }

    pub fn preview(&self, events: &EventRegistry) -> EventChange {
        EventChange {
            event: events.get(self.event).name.clone(),
            amount: self.amount,
        }
    }
}

/// An event counter change, ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventChange {
    pub event: String,
    pub amount: i32,
}

impl core::fmt::Display for EventChange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} chance has increased by {}", self.event, self.amount)
    }
}
