//! Line-oriented text frontend.
//!
//! Each turn the map of seen cells, the stat summary and the tail of the event
//! log are printed, then one command is read from the input.

use std::io::Write;

use anyhow::{Context, Result};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use game_core::{Command, Direction, Position, TurnOutcome, WorldSnapshot};
use runtime::{RuntimeHandle, SnapshotConsumer};

const HELP: &str = "\
commands:
  w/a/s/d, up/down/left/right   move (bumping opens doors and attacks)
  i X Y, interact X Y           open, attack, or walk toward a cell
  x X Y, look X Y               describe a cell (free)
  ., wait                       pass the turn
  ?, help                       this text
  q, quit                       leave";

/// One parsed input line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    Command(Command),
    Help,
    Nothing,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command '{0}' (type ? for help)")]
    Unknown(String),
    #[error("'{0}' needs a target: {0} X Y")]
    MissingTarget(String),
    #[error("'{0}' is not a coordinate")]
    BadCoordinate(String),
}

/// Parses one line of player input.
pub fn parse_command(line: &str) -> Result<Input, InputError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Input::Nothing);
    };
    let verb = verb.to_ascii_lowercase();

    let command = match verb.as_str() {
        "w" | "up" => Command::Move(Direction::Up),
        "s" | "down" => Command::Move(Direction::Down),
        "a" | "left" => Command::Move(Direction::Left),
        "d" | "right" => Command::Move(Direction::Right),
        "." | "wait" => Command::NoOp,
        "q" | "quit" => Command::Quit,
        "?" | "help" => return Ok(Input::Help),
        "i" | "interact" => Command::Interact {
            target: parse_target(&verb, words)?,
        },
        "x" | "look" => Command::Inspect {
            target: parse_target(&verb, words)?,
        },
        _ => return Err(InputError::Unknown(verb)),
    };
    Ok(Input::Command(command))
}

fn parse_target<'a>(
    verb: &str,
    mut words: impl Iterator<Item = &'a str>,
) -> Result<Position, InputError> {
    let mut coordinate = || -> Result<i32, InputError> {
        let word = words
            .next()
            .ok_or_else(|| InputError::MissingTarget(verb.to_owned()))?;
        word.parse()
            .map_err(|_| InputError::BadCoordinate(word.to_owned()))
    };
    let x = coordinate()?;
    let y = coordinate()?;
    Ok(Position::new(x, y))
}

/// Text for one snapshot: header, seen map, stats, and the last log lines.
pub fn render_snapshot(snapshot: &WorldSnapshot, log_lines: usize) -> String {
    let mut out = format!("== {} == turn {}\n", snapshot.level_id, snapshot.turn);
    for row in snapshot.render_rows() {
        out.push_str(&row);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&snapshot.stats.join("  "));
    out.push('\n');

    let log = &snapshot.level.events;
    for line in log.iter().skip(log.len().saturating_sub(log_lines)) {
        out.push_str("> ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Drives the runtime from an input stream, printing snapshots to `output`.
pub struct TextFrontend {
    handle: RuntimeHandle,
    consumer: SnapshotConsumer,
    log_lines: usize,
}

impl TextFrontend {
    pub fn new(handle: RuntimeHandle, consumer: SnapshotConsumer, log_lines: usize) -> Self {
        Self {
            handle,
            consumer,
            log_lines,
        }
    }

    /// Runs until quit, end of input, or the simulation stopping.
    ///
    /// End of input counts as quitting.
    pub async fn run<R, W>(mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        'snapshots: while let Some(snapshot) = self.consumer.recv().await {
            write!(output, "{}", render_snapshot(&snapshot, self.log_lines))?;
            if !snapshot.player.alive {
                writeln!(output, "You are dead. Type q to leave.")?;
            }

            loop {
                output.flush()?;
                let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                    info!("input closed");
                    if let Err(err) = self.handle.submit(Command::Quit).await {
                        debug!(%err, "runtime already stopped");
                    }
                    break 'snapshots;
                };

                let command = match parse_command(&line) {
                    Ok(Input::Command(command)) => command,
                    Ok(Input::Help) => {
                        writeln!(output, "{HELP}")?;
                        continue;
                    }
                    Ok(Input::Nothing) => continue,
                    Err(err) => {
                        writeln!(output, "{err}")?;
                        continue;
                    }
                };

                debug!(?command, "submitting");
                let report = self.handle.submit(command).await?;
                match report.outcome {
                    TurnOutcome::Control => break 'snapshots,
                    TurnOutcome::PlayerDead => writeln!(output, "The dead do not act.")?,
                    TurnOutcome::Advanced | TurnOutcome::Free => {}
                }
                if let Err(rejected) = &report.player_action {
                    writeln!(output, "! {rejected}")?;
                }
                // Every non-control command publishes a snapshot.
                continue 'snapshots;
            }
        }

        output.flush()?;
        Ok(())
    }
}
