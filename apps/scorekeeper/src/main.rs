//! Scorekeeper CLI - score single rounds, manage the saved roster and replay
//! scripted games through the round state machine.

mod output;
mod telemetry;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use scorekeeper::domain::bonus::{BonusTally, CounterBonus, ExclusiveBonus};
use scorekeeper::domain::rules::valid_bid_range;
use scorekeeper::domain::scoring::{base_score, bonus_contribution};
use scorekeeper::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use scorekeeper::services::script::{self, Script};
use scorekeeper::{
    find_mode, open_store, AppError, GameFlow, GameSession, KeyValueStore, Roster,
    RosterService, StorageConfig, GAME_MODES,
};
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Skull King score tracker")]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available game modes
    Modes,
    /// Score one player's round
    Score(ScoreArgs),
    /// Show or edit the saved player roster
    Players {
        #[command(subcommand)]
        action: Option<PlayersAction>,
    },
    /// Replay a scripted game and print the standings
    Play(PlayArgs),
}

#[derive(clap::Args)]
struct ScoreArgs {
    #[arg(long)]
    bid: u8,

    #[arg(long)]
    tricks: u8,

    /// Cards dealt this round
    #[arg(long)]
    cards: u8,

    /// Exclusive bonus claimed (green, yellow, purple, dark, skull_king); repeatable
    #[arg(long = "bonus")]
    bonuses: Vec<String>,

    #[arg(long, default_value_t = 0)]
    treasure: i32,

    #[arg(long, default_value_t = 0)]
    mermaid: i32,

    #[arg(long, default_value_t = 0)]
    pirate: i32,
}

/// Positions are 1-based on the command line.
#[derive(Subcommand)]
enum PlayersAction {
    Show,
    Add,
    Remove { position: usize },
    Rename { position: usize, name: String },
    Move { from: usize, to: usize },
    Reset,
}

#[derive(clap::Args)]
struct PlayArgs {
    /// Game mode id (see `scorekeeper modes`)
    #[arg(long)]
    mode: String,

    /// JSON file with every round's bids, tricks and bonuses
    #[arg(long)]
    script: PathBuf,

    /// Print the final session as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    telemetry::init_tracing(level, args.log_json);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = %e.code(), "{e}");
            eprintln!("error [{}]: {e}", e.code());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Modes => {
            output::print_modes(&GAME_MODES);
            Ok(())
        }
        Command::Score(score_args) => score(&score_args),
        Command::Players { action } => players(action.unwrap_or(PlayersAction::Show)),
        Command::Play(play_args) => play(&play_args),
    }
}

fn score(args: &ScoreArgs) -> Result<(), AppError> {
    let range = valid_bid_range(args.cards);
    if !range.contains(&args.bid) {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!("bid must be in range 0..={}", args.cards),
        )
        .into());
    }
    if !range.contains(&args.tricks) {
        return Err(DomainError::validation(
            ValidationKind::InvalidTricks,
            format!("tricks must be in range 0..={}", args.cards),
        )
        .into());
    }

    let mut tally = BonusTally::new()
        .with_count(CounterBonus::Treasure, args.treasure)
        .with_count(CounterBonus::Mermaid, args.mermaid)
        .with_count(CounterBonus::Pirate, args.pirate);
    for name in &args.bonuses {
        let flag: ExclusiveBonus = name.parse()?;
        tally = tally.with_flag(flag, true);
    }

    let base = base_score(args.bid, args.tricks, args.cards);
    let bonus = bonus_contribution(&tally);
    output::print_score(base, bonus);
    Ok(())
}

fn open_roster() -> Result<RosterService<Box<dyn KeyValueStore>>, AppError> {
    let config = StorageConfig::from_env()?;
    debug!(?config, "Storage configured");
    Ok(RosterService::load(open_store(&config)))
}

fn players(action: PlayersAction) -> Result<(), AppError> {
    let mut service = open_roster()?;
    match action {
        PlayersAction::Show => {}
        PlayersAction::Add => {
            service.add_player()?;
        }
        PlayersAction::Remove { position } => {
            service.remove_player(seat(position)?)?;
        }
        PlayersAction::Rename { position, name } => {
            service.rename_player(seat(position)?, name)?;
        }
        PlayersAction::Move { from, to } => {
            service.move_player(seat(from)?, seat(to)?)?;
        }
        PlayersAction::Reset => service.reset(),
    }
    output::print_roster(service.names());
    Ok(())
}

fn seat(position: usize) -> Result<usize, AppError> {
    position.checked_sub(1).ok_or_else(|| {
        DomainError::validation(ValidationKind::InvalidPlayer, "positions start at 1").into()
    })
}

fn play(args: &PlayArgs) -> Result<(), AppError> {
    let mode = find_mode(&args.mode).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::GameMode,
            format!("no game mode '{}'", args.mode),
        )
    })?;
    let script = Script::load(&args.script)?;

    let mut session = GameSession::new();
    session.set_mode(mode);
    match &script.players {
        Some(names) => {
            let roster = Roster::from_names(names.clone()).ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::RosterSize,
                    format!("script lists {} players", names.len()),
                )
            })?;
            session.set_players(roster.validated_names()?);
        }
        None => open_roster()?.start_game(&mut session)?,
    }

    let flow = script::replay(&script, GameFlow::start(session)?)?;
    if args.json {
        output::print_session_json(&flow)?;
    } else {
        output::print_standings(&flow);
    }
    Ok(())
}
