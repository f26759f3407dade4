//! Character opinion and the cost/gain tiers it selects.
//!
//! | opinion        | cost x | gain x |
//! |----------------|--------|--------|
//! | >= 100         | 0.25   | 4.0    |
//! | [50, 100)      | 0.5    | 2.0    |
//! | (-50, 50)      | 1.0    | 1.0    |
//! | (-100, -50]    | 2.0    | 0.5    |
//! | <= -100        | 4.0    | 0.25   |

use crate::config::GameConfig;

/// A character's disposition toward the ruler, always within [-100, 100].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "i32", into = "i32"))]
pub struct Opinion(i32);

impl Opinion {
    pub const MIN: Opinion = Opinion(GameConfig::OPINION_MIN);
    pub const MAX: Opinion = Opinion(GameConfig::OPINION_MAX);
    pub const NEUTRAL: Opinion = Opinion(0);

    /// Creates an opinion, clamping out-of-range input.
    pub fn new(value: i32) -> Self {
        Self(value.clamp(GameConfig::OPINION_MIN, GameConfig::OPINION_MAX))
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Adds `amount` and clamps. Returns the change actually applied.
    pub fn add(&mut self, amount: i32) -> i32 {
        let before = self.0;
        *self = Self::new(before.saturating_add(amount));
        self.0 - before
    }

    pub fn tier(self) -> OpinionTier {
        OpinionTier::from_opinion(self)
    }
}

impl From<i32> for Opinion {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<Opinion> for i32 {
    fn from(opinion: Opinion) -> Self {
        opinion.0
    }
}

/// Cost and gain multipliers derived from an opinion bracket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum OpinionTier {
    Adored,
    Favored,
    #[default]
    Neutral,
    Disfavored,
    Despised,
}

impl OpinionTier {
    pub fn from_opinion(opinion: Opinion) -> Self {
        match opinion.value() {
            v if v >= 100 => Self::Adored,
            v if v >= 50 => Self::Favored,
            v if v > -50 => Self::Neutral,
            v if v > -100 => Self::Disfavored,
            _ => Self::Despised,
        }
    }

    /// Multiplier applied to negative amounts.
    pub const fn cost_multiplier(self) -> f64 {
        match self {
            Self::Adored => 0.25,
            Self::Favored => 0.5,
            Self::Neutral => 1.0,
            Self::Disfavored => 2.0,
            Self::Despised => 4.0,
        }
    }

    /// Multiplier applied to positive amounts.
    pub const fn gain_multiplier(self) -> f64 {
        match self {
            Self::Adored => 4.0,
            Self::Favored => 2.0,
            Self::Neutral => 1.0,
            Self::Disfavored => 0.5,
            Self::Despised => 0.25,
        }
    }

    pub const fn multipliers(self) -> (f64, f64) {
        (self.cost_multiplier(), self.gain_multiplier())
    }

    /// Multiplier for a given signed amount. Zero is inert.
    pub const fn multiplier_for(self, amount: i32) -> f64 {
        if amount < 0 {
            self.cost_multiplier()
        } else if amount > 0 {
            self.gain_multiplier()
        } else {
            1.0
        }
    }
}
