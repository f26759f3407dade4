/// Where the day cycle is suspended, waiting for outside input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// `start` has not been called yet.
    #[default]
    #[strum(serialize = "not started")]
    NotStarted,
    /// A decision is on screen; waits for a choice index.
    #[strum(serialize = "awaiting a choice")]
    AwaitChoice,
    /// The outcome of a choice is on screen.
    #[strum(serialize = "showing a choice outcome")]
    AwaitResultAck,
    /// At least one event fired and its summary is on screen.
    #[strum(serialize = "showing fired events")]
    AwaitEventAck,
    /// The day summary is on screen.
    #[strum(serialize = "showing the day summary")]
    AwaitDayAck,
}

impl Phase {
    pub const fn accepts_ack(self) -> bool {
        matches!(
            self,
            Self::AwaitResultAck | Self::AwaitEventAck | Self::AwaitDayAck
        )
    }
}

/// External signal that resumes the cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    Choice(usize),
    Ack,
}

impl core::fmt::Display for Input {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Choice(index) => write!(f, "choice {index}"),
            Self::Ack => f.write_str("acknowledgement"),
        }
    }
}

/// Internal steps run back to back until the next suspension point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Step {
    DayStart,
    BeginInteraction,
    CheckEvents,
    EndDay,
    IncrementDay,
}
