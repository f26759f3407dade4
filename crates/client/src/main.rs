//! Court client binary.
//!
//! The composition root: reads configuration, loads and links the content in
//! the data directory, then plays the day cycle on stdin and stdout.
//!
//! ```bash
//! COURT_SEED=7 COURT_MAX_DAYS=10 cargo run -p court-client
//! ```

mod config;
mod frontend;
mod logging;

use std::io;

use anyhow::{Context, Result};
use game_content::ContentFactory;
use game_core::{DayCycle, GameError, PcgRng, link};

use config::ClientConfig;
use frontend::{Command, TerminalInput, TerminalSink, parse_command, prompt, rejection_notice};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    let factory = ContentFactory::new(config.data_dir.clone());
    let game_config = factory.load_config()?;
    let catalog = factory.load_catalog()?;
    let seed = config.resolve_seed(game_config.seed);
    let world = link(&catalog, &game_config).context("Failed to link court content")?;

    tracing::info!(
        data_dir = %config.data_dir.display(),
        seed,
        characters = world.roster.len(),
        "court assembled"
    );

    let mut sink = TerminalSink::new(io::stdout().lock());
    let mut input = TerminalInput::new(io::stdin().lock());
    let mut cycle = DayCycle::new(world, PcgRng::seed_from_u64(seed));

    cycle.start(&mut sink)?;
    sink.take_error()?;

    while !config.past_last_day(cycle.day()) {
        sink.show_prompt(prompt(cycle.phase()));
        sink.take_error()?;

        let Some(line) = input.next_line()? else {
            break;
        };
        let command = match parse_command(line, cycle.phase()) {
            Ok(command) => command,
            Err(message) => {
                sink.notice(&message);
                continue;
            }
        };
        let Command::Play(next) = command else {
            break;
        };

        if let Err(err) = cycle.handle(next, &mut sink) {
            if err.severity().is_internal() {
                return Err(err.into());
            }
            tracing::debug!(
                code = err.error_code(),
                severity = err.severity().as_str(),
                %err,
                "input rejected"
            );
            sink.notice(&rejection_notice(&err));
        }
        sink.take_error()?;
    }

    tracing::info!(
        day = cycle.day(),
        people = cycle.people_served(),
        "court adjourned"
    );
    Ok(())
}
