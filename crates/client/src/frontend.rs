//! Line-oriented terminal presentation and input.
use std::io::{self, BufRead, Write};

use game_core::{
    ChoiceOutcome, ChoicePreview, CycleError, DaySummary, EventSummary, GameError, Input,
    InteractionView, ItemEntry, ObjectiveEntry, Phase, PresentationSink, ResourceEntry,
    TraitRelation,
};

const RULE: &str = "----------------------------------------";

/// Writes everything the day cycle renders as plain text.
///
/// The sink cannot fail its caller, so the first write error is held until
/// [`TerminalSink::take_error`] collects it.
pub struct TerminalSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn take_error(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => self.out.flush(),
        }
    }

    /// Shows a rejected input without leaving the current screen.
    pub fn notice(&mut self, message: &str) {
        self.line(&format!("! {message}"));
    }

    /// Writes `text` without a line break and flushes it.
    pub fn show_prompt(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = write!(self.out, "{text}").and_then(|()| self.out.flush()) {
            self.error = Some(err);
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{text}") {
            self.error = Some(err);
        }
    }

    fn choice(&mut self, choice: &ChoicePreview) {
        let marker = if choice.affordable { "" } else { " (cannot afford)" };
        self.line(&format!("  [{}] {}{marker}", choice.index + 1, choice.description));
        for tag in &choice.traits {
            let sign = match tag.relation {
                TraitRelation::Matching => "+",
                TraitRelation::Opposing => "-",
                TraitRelation::Neutral => " ",
            };
            self.line(&format!("      {sign} {}", tag.name));
        }
        for change in &choice.resources {
            self.line(&format!("      {change}"));
        }
        for change in &choice.events {
            self.line(&format!("      {change}"));
        }
        for chance in &choice.chances {
            for odds in &chance.odds {
                self.line(&format!("      {odds}"));
            }
        }
    }
}

impl<W: Write> PresentationSink for TerminalSink<W> {
    fn render_interaction(&mut self, view: &InteractionView) {
        self.line(RULE);
        self.line(&format!(
            "Day {} - petitioner {} of {}",
            view.day,
            view.position + 1,
            view.cohort_size
        ));
        self.line(&format!("{} (opinion {}, {})", view.character, view.opinion, view.tier));
        for held in &view.traits {
            self.line(&format!("  {}: {}", held.name, held.description));
        }
        self.line("");
        self.line(&view.decision);
        self.line(&view.description);
        for choice in &view.choices {
            self.choice(choice);
        }
    }

    fn render_choice_outcome(&mut self, outcome: &ChoiceOutcome) {
        self.line("");
        for line in outcome.lines() {
            self.line(&line);
        }
        if outcome.opinion_change != 0 {
            self.line(&format!(
                "{}'s opinion of you changed by {}",
                outcome.character, outcome.opinion_change
            ));
        }
    }

    fn render_event_summary(&mut self, summary: Option<&EventSummary>) {
        if let Some(summary) = summary {
            self.line(RULE);
            self.line(&summary.to_string());
        }
    }

    fn render_day_summary(&mut self, summary: &DaySummary) {
        self.line(RULE);
        self.line(&summary.to_string());
    }

    fn render_resource_ledger(&mut self, resources: &[ResourceEntry]) {
        let ledger = resources
            .iter()
            .map(|entry| format!("{}: {}", entry.name, entry.amount))
            .collect::<Vec<_>>()
            .join(" | ");
        self.line(&format!("[{ledger}]"));
    }

    fn render_item_registry(&mut self, items: &[ItemEntry]) {
        self.line("Items:");
        for item in items {
            let owned = if item.owned { "*" } else { " " };
            self.line(&format!("  {owned} {} ({})", item.to_string().replace('\n', " - "), item.kind));
        }
    }

    fn render_objective_registry(&mut self, objectives: &[ObjectiveEntry]) {
        self.line("Objectives:");
        for objective in objectives {
            self.line(&format!("  {}", objective.to_string().replace('\n', " - ")));
        }
    }
}

/// What the player typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Input),
    Quit,
}

/// Parses one line for the given phase. Choices are numbered from one.
pub fn parse_command(line: &str, phase: Phase) -> Result<Command, String> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }
    match phase {
        Phase::AwaitChoice => match line.parse::<usize>() {
            Ok(number) if number > 0 => Ok(Command::Play(Input::Choice(number - 1))),
            _ => Err(format!("enter a choice number, got {line:?}")),
        },
        phase if phase.accepts_ack() => Ok(Command::Play(Input::Ack)),
        phase => Err(format!("nothing to answer while {phase}")),
    }
}

/// Reads commands line by line.
pub struct TerminalInput<R: BufRead> {
    input: R,
    buf: String,
}

impl<R: BufRead> TerminalInput<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            buf: String::new(),
        }
    }

    /// Next raw line, or `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<&str>> {
        self.buf.clear();
        if self.input.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(self.buf.as_str()))
    }
}

/// Text shown for an input the day cycle turned down.
pub fn rejection_notice(err: &CycleError) -> String {
    if err.severity().is_recoverable() {
        format!("{err}; pick another choice")
    } else {
        err.to_string()
    }
}

/// Prompt shown before reading input in `phase`.
pub fn prompt(phase: Phase) -> &'static str {
    match phase {
        Phase::AwaitChoice => "Choose> ",
        _ => "[enter]> ",
    }
}
