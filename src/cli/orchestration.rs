//! Command workflow orchestration logic
//!
//! Commands are executed here without touching the terminal. Each one returns a
//! `CommandOutcome` that `ui::display_outcome` prints, which keeps the binary a thin
//! layer over clap and lets the workflows be called programmatically.

use anyhow::{Context, Result};

use crate::config::{Config, Equality};
use crate::domain::{Version, VersionBump};
use crate::ui::formatter::{format_components, format_ordering};

/// A command the front end can run, independent of how it was parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Check every input against the SemVer grammar
    Validate { versions: Vec<String> },

    /// Compare two versions by precedence
    Compare { left: String, right: String },

    /// Produce the next major, minor or patch release
    Bump { part: VersionBump, version: String },

    /// Order versions by precedence; `descending` overrides the config when set
    Sort {
        versions: Vec<String>,
        descending: Option<bool>,
    },

    /// Show the components of a version
    Inspect { version: String },
}

/// One line of command output and how it should be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Plain(String),
    Success(String),
    Status(String),
    Error(String),
}

/// Result of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub lines: Vec<Line>,

    /// False when the command ran but found a problem, e.g. an invalid input to
    /// `validate`; the binary exits with status 1 in that case
    pub success: bool,
}

impl CommandOutcome {
    fn ok(lines: Vec<Line>) -> Self {
        CommandOutcome {
            lines,
            success: true,
        }
    }
}

fn parse(value: &str) -> Result<Version> {
    Version::from_string(value).with_context(|| format!("cannot use '{}'", value))
}

fn run_validate(versions: &[String]) -> CommandOutcome {
    let mut lines = Vec::with_capacity(versions.len());
    let mut success = true;

    for value in versions {
        match Version::from_string(value) {
            Ok(version) => lines.push(Line::Success(version.to_string())),
            Err(e) => {
                success = false;
                lines.push(Line::Error(e.to_string()));
            }
        }
    }

    CommandOutcome { lines, success }
}

fn run_compare(left: &str, right: &str, config: &Config) -> Result<CommandOutcome> {
    let left = parse(left)?;
    let right = parse(right)?;
    let ordering = left.compare(&right);

    let mut lines = vec![Line::Plain(format_ordering(ordering).to_string())];
    if config.compare.equality == Equality::Identity
        && left.has_same_precedence_as(&right)
        && !left.equals(&right)
    {
        lines.push(Line::Status(format!(
            "{} and {} have the same precedence but are not identical",
            left, right
        )));
        return Ok(CommandOutcome {
            lines,
            success: false,
        });
    }

    Ok(CommandOutcome::ok(lines))
}

fn run_bump(part: VersionBump, version: &str) -> Result<CommandOutcome> {
    let version = parse(version)?;
    let bumped = version
        .bump(part)
        .with_context(|| format!("cannot bump {} of '{}'", part, version))?;

    tracing::debug!(from = %version, to = %bumped, %part, "bumped version");
    Ok(CommandOutcome::ok(vec![Line::Plain(bumped.to_string())]))
}

fn run_sort(versions: &[String], descending: Option<bool>, config: &Config) -> Result<CommandOutcome> {
    let mut parsed = versions
        .iter()
        .map(|value| parse(value))
        .collect::<Result<Vec<_>>>()?;

    if descending.unwrap_or(config.sort.descending) {
        parsed.sort_by(|a, b| b.compare(a));
    } else {
        Version::sort_by_precedence(&mut parsed);
    }

    if config.sort.dedupe {
        parsed.dedup_by(|later, earlier| later.has_same_precedence_as(earlier));
    }

    Ok(CommandOutcome::ok(
        parsed
            .into_iter()
            .map(|version| Line::Plain(version.to_string()))
            .collect(),
    ))
}

fn run_inspect(version: &str) -> Result<CommandOutcome> {
    let version = parse(version)?;
    Ok(CommandOutcome::ok(
        format_components(&version)
            .into_iter()
            .map(Line::Plain)
            .collect(),
    ))
}

/// Run a single command against the given configuration
///
/// # Returns
///
/// * `Ok(CommandOutcome)` - Lines to print and whether the command succeeded
/// * `Err` - If an input that the command needs cannot be parsed or bumped
pub fn run_command(command: &Command, config: &Config) -> Result<CommandOutcome> {
    tracing::debug!(?command, "running command");

    match command {
        Command::Validate { versions } => Ok(run_validate(versions)),
        Command::Compare { left, right } => run_compare(left, right, config),
        Command::Bump { part, version } => run_bump(*part, version),
        Command::Sort {
            versions,
            descending,
        } => run_sort(versions, *descending, config),
        Command::Inspect { version } => run_inspect(version),
    }
}
