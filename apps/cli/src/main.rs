//! `chain-demo`: validates a sample person built from command-line flags.
//!
//! Prints `true` or `false` on stdout. Diagnostics go to stderr through the
//! logging subscriber.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chain_validator::prelude::*;
use chain_validator_log::Format;
use clap::{Parser, ValueEnum};
use tracing::debug;

#[derive(Parser)]
#[command(name = "chain-demo")]
#[command(about = "Validate a sample person against a rule chain", long_about = None)]
struct Cli {
    /// First name
    #[arg(long, default_value = "Mario")]
    name: String,

    /// Last name
    #[arg(long, default_value = "Rossi")]
    surname: String,

    /// Age in years
    #[arg(long, default_value_t = 25)]
    age: u32,

    /// Mark the person as a developer
    #[arg(long)]
    developer: bool,

    /// Programming skill as NAME:LEVEL (repeatable)
    #[arg(long = "skill", value_parser = parse_skill, default_values = ["C++:5", "Java:2"])]
    skills: Vec<Skill>,

    /// Position of the primary skill in the skill list
    #[arg(long, default_value_t = 0)]
    primary_skill: usize,

    /// Chain configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// What to do when a rule panics (overrides the config file)
    #[arg(long, value_enum)]
    fault_policy: Option<Policy>,

    /// Log output format
    #[arg(long, value_enum, env = "CHAIN_LOG_FORMAT")]
    log_format: Option<LogFormat>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Skill {
    name: String,
    level: u8,
}

struct Person {
    name: String,
    surname: String,
    age: u32,
    developer: bool,
    skills: Vec<Skill>,
    primary_skill: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum Policy {
    Fail,
    Propagate,
}

impl From<Policy> for FaultPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Fail => Self::Fail,
            Policy::Propagate => Self::Propagate,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormat> for Format {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
            LogFormat::Json => Self::Json,
        }
    }
}

fn parse_skill(raw: &str) -> Result<Skill, String> {
    let (name, level) = raw
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:LEVEL, got '{raw}'"))?;
    if name.is_empty() {
        return Err(format!("missing skill name in '{raw}'"));
    }
    let level = level
        .parse()
        .map_err(|e| format!("invalid level in '{raw}': {e}"))?;
    Ok(Skill {
        name: name.to_string(),
        level,
    })
}

fn load_config(cli: &Cli) -> Result<ChainConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            ChainConfig::from_json_str(&raw)?
        }
        None => ChainConfig::default(),
    };
    if let Some(policy) = cli.fault_policy {
        config = config.with_fault_policy(policy.into());
    }
    Ok(config)
}

fn knows_cpp(skills: &[Skill]) -> bool {
    skills.iter().any(|s| s.name == "C++")
}

fn has_strong_skill(skills: &[Skill]) -> bool {
    skills.iter().any(|s| s.level >= 3)
}

/// Routes panic reports to `tracing` at debug level.
///
/// Rule faults are already reported through the chain's sink, so the default
/// hook's stderr output would duplicate them.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| (*s).to_owned())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_default();
        let location = info.location().map(ToString::to_string).unwrap_or_default();
        debug!(%payload, %location, "rule panic caught");
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log_config = chain_validator_log::Config::from_env();
    if let Some(format) = cli.log_format {
        log_config.format = format.into();
    }
    chain_validator_log::init_with(log_config)?;
    install_panic_hook();

    let config = load_config(&cli)?;
    debug!(?config, "chain configuration");

    let person = Person {
        name: cli.name,
        surname: cli.surname,
        age: cli.age,
        developer: cli.developer,
        skills: cli.skills,
        primary_skill: cli.primary_skill,
    };

    let chain = ChainBuilder::of(&person)
        .link_with_message(|p| &p.name, |n| n == "Mario", "Invalid name")
        .link_with_message(|p| &p.surname, |s| s == "Rossi", "Invalid surname")
        .link(|p| &p.age, |age| *age > 18)
        .link_with_message(|p| &p.developer, |dev| *dev, "The person must be a developer!")
        .link_with_message(
            |p| p.skills.as_slice(),
            knows_cpp.and(has_strong_skill),
            "The person must know C++ and have a strong skill",
        )
        .link_map_with_message(
            |p| p.skills.first().map(|s| s.level),
            |level| level.is_some(),
            "The person must list at least one skill",
        )
        .link_map_with_message(
            |p| p.skills[p.primary_skill].level,
            |level| *level >= 3,
            "The primary skill must be at least level 3",
        )
        .with_config(config)
        .bond();

    let valid = chain.validate()?;
    println!("{valid}");
    Ok(())
}
