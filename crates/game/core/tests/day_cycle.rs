use std::collections::VecDeque;

use game_core::definition::{
    CatalogDefinition, ChanceEffectDef, CharacterDef, ChoiceDef, DecisionDef, EventDef,
    EventEffectDef, ItemDef, ItemKindDef, ObjectiveDef, ObjectiveTargetDef, ResourceDef,
    ResourceEffectDef, TraitDef,
};
use game_core::{
    ChoiceOutcome, ConstantEffect, CycleError, DayCycle, DaySummary, ErrorSeverity, EventKind,
    EventSummary, GameConfig, GameError, Input, InteractionView, ItemEntry, ObjectiveEntry,
    OpinionTier, PcgRng, Phase, PresentationSink, ResourceEntry, RngOracle, World, link,
};

/// Seeded generator whose percent rolls can be scripted.
struct ScriptedRng {
    inner: PcgRng,
    percents: VecDeque<u32>,
}

impl ScriptedRng {
    fn new(seed: u64, percents: impl IntoIterator<Item = u32>) -> Self {
        Self {
            inner: PcgRng::seed_from_u64(seed),
            percents: percents.into_iter().collect(),
        }
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn percent(&mut self) -> u32 {
        self.percents.pop_front().unwrap_or_else(|| self.inner.percent())
    }
}

#[derive(Debug)]
enum Rendered {
    Interaction(InteractionView),
    Outcome(ChoiceOutcome),
    Events(Option<EventSummary>),
    Day(DaySummary),
    Resources(Vec<ResourceEntry>),
    Items(Vec<ItemEntry>),
    Objectives(Vec<ObjectiveEntry>),
}

#[derive(Default)]
struct Recorder {
    rendered: Vec<Rendered>,
}

impl Recorder {
    fn last_interaction(&self) -> &InteractionView {
        self.rendered
            .iter()
            .rev()
            .find_map(|r| match r {
                Rendered::Interaction(view) => Some(view),
                _ => None,
            })
            .expect("an interaction was rendered")
    }

    fn last_outcome(&self) -> &ChoiceOutcome {
        self.rendered
            .iter()
            .rev()
            .find_map(|r| match r {
                Rendered::Outcome(outcome) => Some(outcome),
                _ => None,
            })
            .expect("an outcome was rendered")
    }

    fn event_summaries(&self) -> Vec<&Option<EventSummary>> {
        self.rendered
            .iter()
            .filter_map(|r| match r {
                Rendered::Events(summary) => Some(summary),
                _ => None,
            })
            .collect()
    }

    fn last_items(&self) -> &[ItemEntry] {
        self.rendered
            .iter()
            .rev()
            .find_map(|r| match r {
                Rendered::Items(items) => Some(items.as_slice()),
                _ => None,
            })
            .expect("items were rendered")
    }
}

impl PresentationSink for Recorder {
    fn render_interaction(&mut self, view: &InteractionView) {
        self.rendered.push(Rendered::Interaction(view.clone()));
    }

    fn render_choice_outcome(&mut self, outcome: &ChoiceOutcome) {
        self.rendered.push(Rendered::Outcome(outcome.clone()));
    }

    fn render_event_summary(&mut self, summary: Option<&EventSummary>) {
        self.rendered.push(Rendered::Events(summary.cloned()));
    }

    fn render_day_summary(&mut self, summary: &DaySummary) {
        self.rendered.push(Rendered::Day(*summary));
    }

    fn render_resource_ledger(&mut self, resources: &[ResourceEntry]) {
        self.rendered.push(Rendered::Resources(resources.to_vec()));
    }

    fn render_item_registry(&mut self, items: &[ItemEntry]) {
        self.rendered.push(Rendered::Items(items.to_vec()));
    }

    fn render_objective_registry(&mut self, objectives: &[ObjectiveEntry]) {
        self.rendered.push(Rendered::Objectives(objectives.to_vec()));
    }
}

const COURTIERS: [(&str, i32); 5] = [
    ("Duke", 60),
    ("Bishop", 0),
    ("Merchant", 0),
    ("General", 0),
    ("Jester", 0),
];

fn petition() -> DecisionDef {
    DecisionDef {
        name: "Petition".into(),
        description: "A request for funds".into(),
        weight: 1,
        choices: vec![
            ChoiceDef {
                description: "Build a granary".into(),
                result: "The granary rises.".into(),
                traits: vec!["Kind".into()],
                resources: vec![ResourceEffectDef::new("Gold", -30)],
                events: vec![EventEffectDef::new("Harvest", 10)],
                ..ChoiceDef::default()
            },
            ChoiceDef {
                description: "Refuse".into(),
                result: "You send them away.".into(),
                traits: vec!["Cruel".into()],
                ..ChoiceDef::default()
            },
            ChoiceDef {
                description: "Build a palace".into(),
                result: "Marble everywhere.".into(),
                resources: vec![ResourceEffectDef::new("Gold", -5_000)],
                ..ChoiceDef::default()
            },
            ChoiceDef {
                description: "Gamble".into(),
                result: "You roll the dice.".into(),
                chances: vec![ChanceEffectDef {
                    success_text: "Fortune smiles".into(),
                    fail_text: "Fortune frowns".into(),
                    chance: 50,
                    on_success: vec![ResourceEffectDef::new("Gold", 100)],
                    on_fail: vec![ResourceEffectDef::new("Gold", -10)],
                }],
                opinion: 200,
                ..ChoiceDef::default()
            },
        ],
    }
}

fn content() -> CatalogDefinition {
    CatalogDefinition {
        traits: vec![
            TraitDef {
                name: "Kind".into(),
                description: "Cares for the realm".into(),
                opposite: Some("Cruel".into()),
            },
            TraitDef {
                name: "Cruel".into(),
                description: "Cares for nothing".into(),
                opposite: Some("Kind".into()),
            },
        ],
        resources: vec![
            ResourceDef {
                name: "Gold".into(),
                amount: 1_000,
            },
            ResourceDef {
                name: "Food".into(),
                amount: 50,
            },
        ],
        events: vec![
            EventDef {
                name: "Riot".into(),
                description: "The mob rises".into(),
                kind: EventKind::Chance,
                counter: 0,
                effects: vec![ResourceEffectDef::new("Gold", -100)],
            },
            EventDef {
                name: "Harvest".into(),
                description: "The granaries overflow".into(),
                kind: EventKind::Goal { goal: 10 },
                counter: 0,
                effects: vec![ResourceEffectDef::new("Food", 25)],
            },
        ],
        items: vec![
            ItemDef {
                name: "Excalibur".into(),
                description: "Courtiers are in awe".into(),
                kind: ItemKindDef::Constant(ConstantEffect::OpinionBonus(10)),
            },
            ItemDef {
                name: "Granary".into(),
                description: "Food every day".into(),
                kind: ItemKindDef::Daily(ResourceEffectDef::new("Food", 5)),
            },
        ],
        objectives: vec![
            ObjectiveDef {
                name: "Popular".into(),
                description: "Receive five people".into(),
                target: ObjectiveTargetDef::People { threshold: 5 },
                reward: "Excalibur".into(),
            },
            ObjectiveDef {
                name: "Survivor".into(),
                description: "Reach day two".into(),
                target: ObjectiveTargetDef::Days { threshold: 2 },
                reward: "Granary".into(),
            },
        ],
        characters: COURTIERS
            .iter()
            .map(|(name, opinion)| CharacterDef {
                name: (*name).into(),
                opinion: *opinion,
                weight: 10,
                traits: vec!["Kind".into()],
                decisions: vec![petition()],
            })
            .collect(),
    }
}

fn amount(world: &World, resource: &str) -> i32 {
    let id = world.resources.registry().lookup(resource).found().unwrap();
    world.resources.amount(id)
}

fn base_opinion(name: &str) -> i32 {
    COURTIERS.iter().find(|(n, _)| *n == name).unwrap().1
}

fn cycle(config: GameConfig, percents: Vec<u32>) -> DayCycle<ScriptedRng> {
    let world = link(&content(), &config).unwrap();
    DayCycle::new(world, ScriptedRng::new(17, percents))
}

#[test]
fn full_day_runs_events_items_and_objectives() {
    let mut cycle = cycle(GameConfig::new(), vec![]);
    let mut sink = Recorder::default();

    cycle.start(&mut sink).unwrap();
    assert_eq!(cycle.phase(), Phase::AwaitChoice);
    assert_eq!(cycle.day(), 1);
    assert_eq!(cycle.cohort().len(), 5);

    let mut expected_gold = 1_000;
    for position in 0..5 {
        let view = sink.last_interaction().clone();
        assert_eq!(view.position, position);
        assert_eq!(view.opinion, base_opinion(&view.character));
        assert!(view.choices[0].affordable);
        assert!(!view.choices[2].affordable);

        // Only the Duke is favored: his costs are halved.
        let cost = if view.character == "Duke" { -15 } else { -30 };
        assert_eq!(view.choices[0].resources[0].amount, cost);
        expected_gold += cost;

        cycle.select_choice(0, &mut sink).unwrap();
        assert_eq!(cycle.phase(), Phase::AwaitResultAck);
        assert_eq!(
            sink.last_outcome().lines(),
            vec![
                "The granary rises.".to_string(),
                format!("{cost} Gold lost."),
                "Harvest chance has increased by 10".to_string(),
            ]
        );
        cycle.acknowledge(&mut sink).unwrap();
    }

    // Harvest reached its goal; the riot counter is still zero.
    assert_eq!(cycle.phase(), Phase::AwaitEventAck);
    let summaries = sink.event_summaries();
    let summary = summaries.last().unwrap().as_ref().unwrap();
    assert_eq!(summary.events.len(), 1);
    assert_eq!(summary.events[0].name, "Harvest");
    assert_eq!(amount(cycle.world(), "Gold"), expected_gold);
    assert_eq!(amount(cycle.world(), "Food"), 75);

    cycle.acknowledge(&mut sink).unwrap();
    assert_eq!(cycle.phase(), Phase::AwaitDayAck);
    assert!(matches!(
        sink.rendered.last(),
        Some(Rendered::Day(DaySummary { day: 1, people: 5 }))
    ));

    // Objectives are checked after the day counter moves to 2.
    cycle.acknowledge(&mut sink).unwrap();
    assert_eq!(cycle.day(), 2);
    assert_eq!(cycle.people_served(), 6);
    let items = sink.last_items();
    assert!(items.iter().all(|item| item.owned), "{items:?}");
    assert_eq!(cycle.phase(), Phase::AwaitChoice);

    // Every courtier liked the granary (+5) and Excalibur adds 10 while present.
    let view = sink.last_interaction().clone();
    assert_eq!(view.day, 2);
    assert_eq!(view.opinion, base_opinion(&view.character) + 5 + 10);
}

#[test]
fn constant_item_is_reverted_after_each_interaction() {
    let mut cycle = cycle(GameConfig::new(), vec![]);
    let mut sink = Recorder::default();
    cycle.start(&mut sink).unwrap();
    for _ in 0..5 {
        cycle.select_choice(0, &mut sink).unwrap();
        cycle.acknowledge(&mut sink).unwrap();
    }
    cycle.acknowledge(&mut sink).unwrap();
    cycle.acknowledge(&mut sink).unwrap();
    assert_eq!(cycle.day(), 2);

    let id = cycle.cohort()[0];
    let name = cycle.world().roster.get(id).name.clone();

    // Refusing offends a kind character.
    cycle.select_choice(1, &mut sink).unwrap();
    let opinion = cycle.world().roster.get(id).opinion.value();
    assert_eq!(opinion, base_opinion(&name) + 5 - 5);
    assert_eq!(sink.last_outcome().opinion_change, -5);
}

#[test]
fn rejected_input_leaves_phase_unchanged() {
    let mut cycle = cycle(GameConfig::new(), vec![]);
    let mut sink = Recorder::default();

    let err = cycle.acknowledge(&mut sink).unwrap_err();
    assert_eq!(
        err,
        CycleError::UnexpectedInput {
            phase: Phase::NotStarted,
            input: Input::Ack
        }
    );

    cycle.start(&mut sink).unwrap();
    let rendered = sink.rendered.len();

    let err = cycle.handle(Input::Ack, &mut sink).unwrap_err();
    assert_eq!(err.severity(), ErrorSeverity::Validation);
    assert_eq!(cycle.phase(), Phase::AwaitChoice);

    let err = cycle.select_choice(9, &mut sink).unwrap_err();
    assert_eq!(
        err,
        CycleError::ChoiceOutOfRange {
            index: 9,
            available: 4
        }
    );

    let err = cycle.select_choice(2, &mut sink).unwrap_err();
    assert_eq!(err, CycleError::Unaffordable { index: 2 });
    assert_eq!(err.severity(), ErrorSeverity::Recoverable);

    assert_eq!(cycle.phase(), Phase::AwaitChoice);
    assert_eq!(sink.rendered.len(), rendered);
    assert_eq!(amount(cycle.world(), "Gold"), 1_000);
    assert!(cycle.interaction_view().is_some());

    cycle.handle(Input::Choice(1), &mut sink).unwrap();
    assert!(cycle.interaction_view().is_none());
    let err = cycle.select_choice(0, &mut sink).unwrap_err();
    assert!(matches!(
        err,
        CycleError::UnexpectedInput {
            phase: Phase::AwaitResultAck,
            ..
        }
    ));
}

#[test]
fn quiet_day_skips_event_acknowledgement() {
    let mut cycle = cycle(GameConfig::new(), vec![]);
    let mut sink = Recorder::default();
    cycle.start(&mut sink).unwrap();
    for _ in 0..5 {
        cycle.select_choice(1, &mut sink).unwrap();
        cycle.acknowledge(&mut sink).unwrap();
    }

    assert_eq!(cycle.phase(), Phase::AwaitDayAck);
    assert_eq!(sink.event_summaries(), vec![&None]);
    assert_eq!(amount(cycle.world(), "Food"), 50);
}

#[test]
fn chance_effects_follow_scripted_rolls_at_flat_multiplier() {
    // Roll 49 succeeds at 50%, roll 50 fails.
    let config = GameConfig::new().with_cohort_size(2);
    let mut cycle = cycle(config, vec![49, 50]);
    let mut sink = Recorder::default();
    cycle.start(&mut sink).unwrap();

    let first = sink.last_interaction().character.clone();
    cycle.select_choice(3, &mut sink).unwrap();
    let outcome = sink.last_outcome().clone();
    assert_eq!(outcome.character, first);
    assert_eq!(outcome.chances[0].text, "Fortune smiles");
    // Chance branches resolve at x1.0 whatever the tier.
    assert_eq!(outcome.chances[0].changes[0].amount, 100);
    assert_eq!(amount(cycle.world(), "Gold"), 1_100);
    cycle.acknowledge(&mut sink).unwrap();

    cycle.select_choice(3, &mut sink).unwrap();
    let outcome = sink.last_outcome().clone();
    assert_eq!(outcome.chances[0].text, "Fortune frowns");
    assert_eq!(amount(cycle.world(), "Gold"), 1_090);
    assert_eq!(
        outcome.lines(),
        vec!["You roll the dice.", "Fortune frowns", "-10 Gold lost."]
    );

    // Opinion effects clamp at the top of the range.
    let id = cycle.cohort()[1];
    assert_eq!(cycle.world().roster.get(id).opinion.value(), 100);
}

#[test]
fn exact_people_threshold_is_configurable() {
    // With three people a day the total goes 3, 6, ... and never lands on 5.
    let exact = GameConfig::new().with_cohort_size(3);
    let at_least = exact.clone().with_people_threshold(game_core::ThresholdMatch::AtLeast);

    for (config, unlocked) in [(exact, false), (at_least, true)] {
        let mut cycle = cycle(config, vec![]);
        let mut sink = Recorder::default();
        cycle.start(&mut sink).unwrap();
        for _day in 0..2 {
            for _ in 0..3 {
                cycle.select_choice(1, &mut sink).unwrap();
                cycle.acknowledge(&mut sink).unwrap();
            }
            cycle.acknowledge(&mut sink).unwrap();
        }
        let excalibur = sink
            .last_items()
            .iter()
            .find(|item| item.name == "Excalibur")
            .unwrap();
        assert_eq!(excalibur.owned, unlocked);
    }
}

#[test]
fn identical_seeds_replay_identically() {
    let play = || {
        let mut cycle = cycle(GameConfig::new(), vec![]);
        let mut sink = Recorder::default();
        cycle.start(&mut sink).unwrap();
        let mut order = Vec::new();
        for _day in 0..3 {
            for _ in 0..5 {
                order.push(sink.last_interaction().character.clone());
                cycle.select_choice(1, &mut sink).unwrap();
                cycle.acknowledge(&mut sink).unwrap();
            }
            cycle.acknowledge(&mut sink).unwrap();
        }
        order
    };
    assert_eq!(play(), play());
}

/// Favored courtiers paying a tithe, with a ring that moves every choice
/// amount by +20 once day two is reached.
fn ring_court() -> CatalogDefinition {
    let mut content = content();
    content.items[1] = ItemDef {
        name: "Ring".into(),
        description: "Every bargain leans your way".into(),
        kind: ItemKindDef::Constant(ConstantEffect::ChoiceAmountDelta(20)),
    };
    content.objectives[1].reward = "Ring".into();
    for character in &mut content.characters {
        character.opinion = 60;
        character.decisions = vec![DecisionDef {
            name: "Tithe".into(),
            description: "The church asks for its due".into(),
            weight: 1,
            choices: vec![
                ChoiceDef {
                    description: "Pay the tithe".into(),
                    result: "Paid.".into(),
                    resources: vec![ResourceEffectDef::new("Gold", -10)],
                    ..ChoiceDef::default()
                },
                ChoiceDef {
                    description: "Build walls".into(),
                    result: "Walls rise.".into(),
                    resources: vec![ResourceEffectDef::new("Gold", -30)],
                    ..ChoiceDef::default()
                },
            ],
        }];
    }
    content
}

#[test]
fn choice_amount_delta_keeps_base_tier_and_is_reverted() {
    let world = link(&ring_court(), &GameConfig::new()).unwrap();
    let mut cycle = DayCycle::new(world, ScriptedRng::new(17, vec![]));
    let mut sink = Recorder::default();
    cycle.start(&mut sink).unwrap();

    // Day one: no ring, favored tier halves both costs.
    let view = sink.last_interaction().clone();
    assert_eq!(view.tier, OpinionTier::Favored);
    assert_eq!(view.choices[0].resources[0].amount, -5);
    assert_eq!(view.choices[1].resources[0].amount, -15);
    for _ in 0..5 {
        cycle.select_choice(0, &mut sink).unwrap();
        cycle.acknowledge(&mut sink).unwrap();
    }
    cycle.acknowledge(&mut sink).unwrap();
    assert_eq!(cycle.day(), 2);
    assert_eq!(amount(cycle.world(), "Gold"), 975);
    assert!(sink.last_items().iter().any(|item| item.name == "Ring" && item.owned));

    for _ in 0..2 {
        // -10 + 20 turns the tithe into a gain, still scaled as a cost.
        let view = sink.last_interaction().clone();
        assert_eq!(view.tier, OpinionTier::Favored);
        assert_eq!(view.choices[0].resources[0].amount, 5);
        assert_eq!(view.choices[1].resources[0].amount, -5);
        assert!(view.choices.iter().all(|choice| choice.affordable));

        let id = cycle.cohort()[view.position];
        let gold = amount(cycle.world(), "Gold");
        cycle.select_choice(0, &mut sink).unwrap();
        assert_eq!(sink.last_outcome().resources[0].amount, 5);
        assert_eq!(amount(cycle.world(), "Gold"), gold + 5);

        let decision = &cycle.world().roster.get(id).decisions[0];
        for choice in &decision.choices {
            let effect = &choice.resource_effects[0];
            assert_eq!(effect.effective_amount(), effect.amount);
        }
        cycle.acknowledge(&mut sink).unwrap();
    }
}
