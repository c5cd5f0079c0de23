//! Command-line runner for Skirmish.
//!
//! Run with: `skirmish <command>`. Logs go to stderr at `warn` unless
//! `RUST_LOG` says otherwise; `RUST_LOG=skirmish_core=trace` shows every
//! exchange as it is resolved.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use skirmish_core::{
    round_robin, Battle, BattleId, BattleResolver, BattleRules, BattleService, CreatureId,
    CreatureStore, Roster, Side,
};
use tracing_subscriber::EnvFilter;

/// Resolve creature battles from a roster file
#[derive(Parser)]
#[command(name = "skirmish")]
#[command(about = "Deterministic creature battles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fight two creatures from the roster
    Fight(FightArgs),

    /// Run a round-robin tournament over the whole roster
    Tournament(TournamentArgs),
}

/// Options shared by every command
#[derive(Args)]
struct Common {
    /// JSON array of creatures
    #[arg(long)]
    roster: PathBuf,

    /// JSON rules file (defaults apply when omitted)
    #[arg(long)]
    rules: Option<PathBuf>,
}

#[derive(Args)]
struct FightArgs {
    #[command(flatten)]
    common: Common,

    /// Id of combatant A
    a: u64,

    /// Id of combatant B
    b: u64,

    /// Print every exchange
    #[arg(long)]
    log: bool,

    /// Print the full battle report as JSON
    #[arg(long, conflicts_with = "log")]
    json: bool,
}

#[derive(Args)]
struct TournamentArgs {
    #[command(flatten)]
    common: Common,

    /// Print standings as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Fight(args) => fight(&args, &mut out),
        Command::Tournament(args) => tournament(&args, &mut out),
    }
}

fn load(common: &Common) -> Result<(Roster, BattleResolver)> {
    let roster = Roster::from_path(&common.roster)
        .with_context(|| format!("loading roster {}", common.roster.display()))?;
    let rules = match &common.rules {
        Some(path) => load_rules(path)?,
        None => BattleRules::default(),
    };
    let resolver = BattleResolver::new(rules).context("invalid battle rules")?;
    tracing::info!(creatures = roster.len(), ?rules, "roster loaded");
    Ok((roster, resolver))
}

fn load_rules(path: &Path) -> Result<BattleRules> {
    BattleRules::from_path(path).with_context(|| format!("loading rules {}", path.display()))
}

fn fight(args: &FightArgs, out: &mut impl Write) -> Result<()> {
    let (roster, resolver) = load(&args.common)?;
    let (a, b) = (CreatureId::new(args.a), CreatureId::new(args.b));
    let service = BattleService::with_resolver(roster, resolver);
    let mut battle = Battle::new(BattleId::new(1), a, b);

    if !(args.log || args.json) {
        let winner = service.fight(&mut battle)?;
        writeln!(out, "winner: {}", display_name(service.store(), winner))?;
        return Ok(());
    }

    let report = service.fight_with_log(&mut battle)?;

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    let names = [display_name(service.store(), a), display_name(service.store(), b)];
    for exchange in &report.exchanges {
        let (attacker, defender) = match exchange.attacker {
            Side::A => (&names[0], &names[1]),
            Side::B => (&names[1], &names[0]),
        };
        writeln!(
            out,
            "#{:<4} {attacker} hits {defender} for {} ({:?}), {} hp left",
            exchange.number, exchange.damage, exchange.initiative, exchange.defender_hp
        )?;
    }
    writeln!(
        out,
        "winner: {}",
        display_name(service.store(), report.outcome.winner)
    )?;
    Ok(())
}

fn display_name(store: &impl CreatureStore, id: CreatureId) -> String {
    store
        .creature(id)
        .map_or_else(|| id.to_string(), ToString::to_string)
}

fn tournament(args: &TournamentArgs, out: &mut impl Write) -> Result<()> {
    let (roster, resolver) = load(&args.common)?;
    let standings = round_robin(&resolver, &roster)?;

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&standings)?)?;
        return Ok(());
    }

    writeln!(out, "{:<4} {:<24} {:>5} {:>6}", "rank", "creature", "wins", "losses")?;
    for (rank, record) in standings.records.iter().enumerate() {
        writeln!(
            out,
            "{:<4} {:<24} {:>5} {:>6}",
            rank + 1,
            display_name(&roster, record.id),
            record.wins,
            record.losses
        )?;
    }
    Ok(())
}
