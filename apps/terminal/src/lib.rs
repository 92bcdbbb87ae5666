pub mod config;
pub mod error;
pub mod history;
pub mod prompt;
pub mod session;

use std::io::{self, BufRead, Write};
use std::time::Instant;

use numquiz_core::{format_number, SessionSummary};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::error::Result;
use crate::history::HistoryStore;
use crate::session::{Advance, GameSession};

const SKIP_COMMANDS: [&str; 3] = ["s", "skip", "تخطي"];
const QUIT_COMMANDS: [&str; 3] = ["q", "quit", "خروج"];

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::from_env()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let summary = play(&mut rng, &config, stdin.lock(), &mut stdout)?;

    if let Some(summary) = summary {
        let store = HistoryStore::new(&config.history_path);
        store.append(summary)?;

        let stats = store.statistics();
        let format = config.settings.number_format;
        writeln!(
            stdout,
            "مجموع الألعاب: {}، الدقة: {}%",
            format_number(stats.total_games as i64, format),
            format_number(stats.accuracy.round() as i64, format)
        )?;
    }

    Ok(())
}

/// Play one game, reading answers line by line from `input` and writing
/// prompts to `output`.
///
/// Returns the summary of the game, or `None` when it ended before any
/// question was answered. End of input ends the game early.
pub fn play<R, I, O>(rng: &mut R, config: &AppConfig, input: I, output: &mut O) -> Result<Option<SessionSummary>>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    let mut session = GameSession::start(rng, config.game_type, config.settings.clone())?;
    let format = config.settings.number_format;
    let mut lines = input.lines();

    writeln!(
        output,
        "{} - {}",
        config.game_type.label(),
        config.settings.difficulty.label()
    )?;
    if let Some(limit) = session.time_limit() {
        writeln!(output, "الوقت لكل سؤال: {} ثانية", format_number(i64::from(limit), format))?;
    }
    writeln!(output, "للتخطي اكتب s، وللخروج اكتب q")?;

    while let Some(question) = session.current_question().cloned() {
        let (position, total) = session.progress();
        writeln!(output)?;
        writeln!(
            output,
            "السؤال {} من {}",
            format_number(position as i64, format),
            format_number(total as i64, format)
        )?;
        for line in prompt::question_lines(&question, format) {
            writeln!(output, "{line}")?;
        }

        let started = Instant::now();
        let answer = loop {
            write!(output, "> ")?;
            output.flush()?;
            match lines.next() {
                Some(line) => {
                    let line = line?;
                    let trimmed = line.trim().to_string();
                    if !trimmed.is_empty() {
                        break Some(trimmed);
                    }
                }
                None => break None,
            }
        };
        let elapsed = started.elapsed().as_secs_f64();

        let Some(answer) = answer else {
            return finish_early(&mut session, output);
        };

        let feedback = if QUIT_COMMANDS.contains(&answer.as_str()) {
            return finish_early(&mut session, output);
        } else if SKIP_COMMANDS.contains(&answer.as_str()) {
            session.skip(elapsed)?
        } else {
            session.submit(prompt::interpret_input(&question, &answer), elapsed)?
        };

        for line in prompt::feedback_lines(&feedback) {
            writeln!(output, "{line}")?;
        }

        if let Advance::Finished(summary) = session.advance()? {
            write_summary(&summary, output)?;
            return Ok(Some(summary));
        }
    }

    Ok(session.end())
}

fn finish_early<O: Write>(session: &mut GameSession, output: &mut O) -> Result<Option<SessionSummary>> {
    let summary = session.end();
    if let Some(summary) = &summary {
        writeln!(output)?;
        write_summary(summary, output)?;
    }
    Ok(summary)
}

fn write_summary<O: Write>(summary: &SessionSummary, output: &mut O) -> Result<()> {
    writeln!(output)?;
    for line in prompt::summary_lines(summary) {
        writeln!(output, "{line}")?;
    }
    Ok(())
}
