//! Effect primitives resolved against the ledger and the event registry.
//!
//! A choice carries four kinds of effects, always resolved in this order:
//!
//! 1. [`ResourceEffect`]s, scaled by the current character's opinion tier
//! 2. [`EventEffect`]s, feeding event counters
//! 3. [`ChanceEffect`]s, each rolling once and applying one branch at x1.0
//! 4. the [`OpinionEffect`], applied straight to the character
mod chance;
mod event;
mod opinion;
mod resource;

pub use chance::{ChanceEffect, ChanceOutcome, ChancePreview, ChanceResult};
pub use event::{EventChange, EventEffect};
pub use opinion::OpinionEffect;
pub use resource::{ResourceChange, ResourceEffect, scale_amount};
