//! Injected environment for the engine.
//!
//! The engine draws every random number through [`RngOracle`] so that hosts
//! can supply a seeded generator and tests can supply scripted draws.
mod rng;

pub use rng::{PcgRng, RngOracle};
