/// How a people-served objective compares the running total to its threshold.
///
/// The shipped rules complete the objective only when the total lands exactly
/// on the threshold. A cohort size that steps over the threshold leaves the
/// objective permanently incomplete under `Exact`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ThresholdMatch {
    #[default]
    Exact,
    AtLeast,
}

impl ThresholdMatch {
    pub fn matches(self, value: u32, threshold: u32) -> bool {
        match self {
            Self::Exact => value == threshold,
            Self::AtLeast => value >= threshold,
        }
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of distinct characters received each day.
    pub cohort_size: usize,
    /// Weight moved by the adaptive reweighting after every selection.
    pub weight_step: u32,
    /// Opinion change per matching (or opposing) trait pair.
    pub trait_opinion_step: i32,
    /// Comparison used by people-served objectives.
    pub people_threshold: ThresholdMatch,
    /// Seed for the engine RNG. `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl GameConfig {
    // ===== fixed rule bounds =====
    pub const OPINION_MIN: i32 = -100;
    pub const OPINION_MAX: i32 = 100;
    pub const MIN_WEIGHT: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_COHORT_SIZE: usize = 5;
    pub const DEFAULT_WEIGHT_STEP: u32 = 5;
    pub const DEFAULT_TRAIT_OPINION_STEP: i32 = 5;

    pub fn new() -> Self {
        Self {
            cohort_size: Self::DEFAULT_COHORT_SIZE,
            weight_step: Self::DEFAULT_WEIGHT_STEP,
            trait_opinion_step: Self::DEFAULT_TRAIT_OPINION_STEP,
            people_threshold: ThresholdMatch::Exact,
            seed: None,
        }
    }

    pub fn with_cohort_size(mut self, cohort_size: usize) -> Self {
        self.cohort_size = cohort_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_people_threshold(mut self, people_threshold: ThresholdMatch) -> Self {
        self.people_threshold = people_threshold;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_threshold_requires_landing_on_value() {
        assert!(!ThresholdMatch::Exact.matches(4, 5));
        assert!(ThresholdMatch::Exact.matches(5, 5));
        assert!(!ThresholdMatch::Exact.matches(6, 5));
        assert!(ThresholdMatch::AtLeast.matches(6, 5));
    }

    #[test]
    fn threshold_match_parses_snake_case() {
        assert_eq!("at_least".parse::<ThresholdMatch>().ok(), Some(ThresholdMatch::AtLeast));
        assert_eq!(ThresholdMatch::Exact.to_string(), "exact");
    }
}
