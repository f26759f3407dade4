//! The day cycle: the state machine that sequences a day at court.
//!
//! ```text
//! DayStart -> select cohort
//!   for each character in the cohort:
//!     BeginInteraction -> [AwaitChoice] -> resolve -> [AwaitResultAck]
//! CheckEvents -> [AwaitEventAck, only if something fired]
//! EndDay (daily items) -> [AwaitDayAck]
//! IncrementDay (objectives) -> DayStart
//! ```
//!
//! Bracketed phases are suspension points. The cycle runs synchronously from
//! one suspension point to the next inside [`DayCycle::select_choice`] or
//! [`DayCycle::acknowledge`] and renders through a [`PresentationSink`] as it
//! goes. There are no timeouts; a missing acknowledgement simply leaves the
//! cycle where it is.

mod errors;
mod phase;
mod presentation;
mod resolve;

pub use errors::CycleError;
pub use phase::{Input, Phase};
pub use presentation::{
    ChoiceOutcome, ChoicePreview, DaySummary, EventSummary, FiredEvent, InteractionView,
    PresentationSink, TraitTag, TraitView,
};

use phase::Step;
use resolve::{Resolver, Slot};

use crate::env::RngOracle;
use crate::items::ActiveModifiers;
use crate::objectives::Progress;
use crate::registry::CharacterId;
use crate::world::World;

/// The character currently at court and what was enabled for them.
#[derive(Clone, Copy, Debug)]
struct Interaction {
    character: CharacterId,
    decision: usize,
    modifiers: ActiveModifiers,
}

/// Owns the world and the RNG and advances the game on outside input.
pub struct DayCycle<R: RngOracle> {
    world: World,
    rng: R,
    phase: Phase,
    day: u32,
    people_served: u32,
    cohort: Vec<CharacterId>,
    position: usize,
    interaction: Option<Interaction>,
    last_view: Option<InteractionView>,
}

impl<R: RngOracle> DayCycle<R> {
    pub fn new(world: World, rng: R) -> Self {
        Self {
            world,
            rng,
            phase: Phase::NotStarted,
            day: 1,
            people_served: 0,
            cohort: Vec::new(),
            position: 0,
            interaction: None,
            last_view: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Characters received since the game started.
    pub fn people_served(&self) -> u32 {
        self.people_served
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Today's cohort in order of reception.
    pub fn cohort(&self) -> &[CharacterId] {
        &self.cohort
    }

    /// The interaction on screen, while a choice is awaited.
    pub fn interaction_view(&self) -> Option<&InteractionView> {
        match self.phase {
            Phase::AwaitChoice => self.last_view.as_ref(),
            _ => None,
        }
    }

    pub fn into_world(self) -> World {
        self.world
    }

    /// Renders the initial registries and runs day one up to the first choice.
    pub fn start(&mut self, sink: &mut dyn PresentationSink) -> Result<(), CycleError> {
        if self.phase != Phase::NotStarted {
            return Err(CycleError::UnexpectedInput {
                phase: self.phase,
                input: Input::Ack,
            });
        }
        sink.render_resource_ledger(&self.world.resource_snapshot());
        sink.render_item_registry(&self.world.item_snapshot());
        sink.render_objective_registry(&self.world.objective_snapshot());
        self.run(Step::DayStart, sink)
    }

    pub fn handle(&mut self, input: Input, sink: &mut dyn PresentationSink) -> Result<(), CycleError> {
        match input {
            Input::Choice(index) => self.select_choice(index, sink),
            Input::Ack => self.acknowledge(sink),
        }
    }

    /// Resolves the chosen option of the current decision.
    ///
    /// # Errors
    ///
    /// Rejects the input, leaving the phase unchanged, when no choice is
    /// awaited, the index is out of range, or the choice is unaffordable.
    pub fn select_choice(&mut self, index: usize, sink: &mut dyn PresentationSink) -> Result<(), CycleError> {
        let interaction = match (self.phase, self.interaction) {
            (Phase::AwaitChoice, Some(interaction)) => interaction,
            (phase, _) => {
                return Err(CycleError::UnexpectedInput {
                    phase,
                    input: Input::Choice(index),
                });
            }
        };

        let World {
            config,
            traits,
            resources,
            events,
            items: _,
            objectives: _,
            roster,
        } = &mut self.world;
        let character = roster.get_mut(interaction.character);

        let choices = &character.decisions[interaction.decision].choices;
        let Some(choice) = choices.get(index) else {
            return Err(CycleError::ChoiceOutOfRange {
                index,
                available: choices.len(),
            });
        };
        if !choice.can_afford(resources) {
            return Err(CycleError::Unaffordable { index });
        }

        let mut resolver = Resolver {
            traits,
            resources,
            events,
            trait_step: config.trait_opinion_step,
        };
        let outcome = resolver.resolve(character, interaction.decision, index, &mut self.rng);

        let (opinion, decision) = character.interaction_mut(interaction.decision);
        interaction.modifiers.disable(opinion, decision);
        self.interaction = None;

        sink.render_choice_outcome(&outcome);
        sink.render_resource_ledger(&self.world.resource_snapshot());
        self.enter(Phase::AwaitResultAck);
        Ok(())
    }

    /// Dismisses whatever is on screen and runs to the next suspension point.
    pub fn acknowledge(&mut self, sink: &mut dyn PresentationSink) -> Result<(), CycleError> {
        let next = match self.phase {
            Phase::AwaitResultAck if self.position + 1 < self.cohort.len() => {
                self.position += 1;
                Step::BeginInteraction
            }
            Phase::AwaitResultAck => Step::CheckEvents,
            Phase::AwaitEventAck => Step::EndDay,
            Phase::AwaitDayAck => Step::IncrementDay,
            phase => {
                return Err(CycleError::UnexpectedInput {
                    phase,
                    input: Input::Ack,
                });
            }
        };
        self.run(next, sink)
    }

    fn enter(&mut self, phase: Phase) {
        tracing::debug!(from = %self.phase, to = %phase, day = self.day, "phase transition");
        self.phase = phase;
    }

    /// Runs internal steps until one of them suspends.
    fn run(&mut self, mut step: Step, sink: &mut dyn PresentationSink) -> Result<(), CycleError> {
        loop {
            step = match step {
                Step::DayStart => {
                    self.begin_day()?;
                    Step::BeginInteraction
                }
                Step::BeginInteraction => {
                    self.begin_interaction(sink)?;
                    return Ok(());
                }
                Step::CheckEvents => {
                    if self.check_events(sink) {
                        return Ok(());
                    }
                    Step::EndDay
                }
                Step::EndDay => {
                    self.end_day(sink);
                    return Ok(());
                }
                Step::IncrementDay => {
                    self.increment_day(sink);
                    Step::DayStart
                }
            };
        }
    }

    fn begin_day(&mut self) -> Result<(), CycleError> {
        let config = &self.world.config;
        self.cohort = self
            .world
            .roster
            .select_cohort(config.cohort_size, config.weight_step, &mut self.rng)?;
        self.position = 0;
        tracing::info!(day = self.day, cohort = self.cohort.len(), "day started");
        Ok(())
    }

    fn begin_interaction(&mut self, sink: &mut dyn PresentationSink) -> Result<(), CycleError> {
        let id = self.cohort[self.position];
        let step = self.world.config.weight_step;

        let character = self.world.roster.get_mut(id);
        let decision = character.select_decision(step, &mut self.rng)?;
        self.people_served += 1;

        let (opinion, offered) = character.interaction_mut(decision);
        let modifiers = self.world.items.enable_constant(opinion, offered);
        self.interaction = Some(Interaction {
            character: id,
            decision,
            modifiers,
        });

        let view = resolve::interaction_view(
            &self.world,
            id,
            decision,
            Slot {
                day: self.day,
                position: self.position,
                cohort_size: self.cohort.len(),
            },
        );
        sink.render_interaction(&view);
        self.last_view = Some(view);
        self.enter(Phase::AwaitChoice);
        Ok(())
    }

    /// Returns `true` when the cycle suspends on the event summary.
    fn check_events(&mut self, sink: &mut dyn PresentationSink) -> bool {
        let fired = self
            .world
            .events
            .check_all(&mut self.world.resources, &mut self.rng);
        if fired.is_empty() {
            tracing::debug!(day = self.day, "no event fired");
            sink.render_event_summary(None);
            return false;
        }

        let summary = EventSummary {
            events: fired
                .iter()
                .map(|id| {
                    let event = self.world.events.get(*id);
                    FiredEvent {
                        name: event.name.clone(),
                        description: event.description.clone(),
                        changes: event.preview(&self.world.resources),
                    }
                })
                .collect(),
        };
        sink.render_event_summary(Some(&summary));
        sink.render_resource_ledger(&self.world.resource_snapshot());
        self.enter(Phase::AwaitEventAck);
        true
    }

    fn end_day(&mut self, sink: &mut dyn PresentationSink) {
        let daily = self.world.items.apply_daily(&mut self.world.resources);
        if !daily.is_empty() {
            tracing::debug!(changes = daily.len(), "daily items applied");
        }
        sink.render_resource_ledger(&self.world.resource_snapshot());

        let summary = DaySummary {
            day: self.day,
            people: self.cohort.len(),
        };
        tracing::info!(day = self.day, people = summary.people, "day ended");
        sink.render_day_summary(&summary);
        self.enter(Phase::AwaitDayAck);
    }

    fn increment_day(&mut self, sink: &mut dyn PresentationSink) {
        self.day += 1;
        let progress = Progress {
            days: self.day,
            people_served: self.people_served,
            people_match: self.world.config.people_threshold,
        };
        let completed = self.world.objectives.check_all(
            progress,
            &self.world.resources,
            &mut self.world.items,
        );
        if completed.is_empty() {
            tracing::debug!(day = self.day, "no objective completed");
        }
        sink.render_item_registry(&self.world.item_snapshot());
        sink.render_objective_registry(&self.world.objective_snapshot());
    }
}
