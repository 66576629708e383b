//! Plain-text and JSON rendering for the CLI.

use scorekeeper::domain::game_modes::{CardSchedule, GameMode};
use scorekeeper::{AppError, GameFlow};
use serde::Serialize;

pub fn print_modes(modes: &[GameMode]) {
    for mode in modes {
        let schedule = match mode.schedule {
            CardSchedule::Ascending => "round r deals r cards".to_string(),
            CardSchedule::Fixed { cards } => format!("every round deals {cards} cards"),
            CardSchedule::Paired { .. } => {
                let hands: Vec<String> = (1..=mode.rounds)
                    .filter_map(|r| mode.cards_per_round(r))
                    .map(|c| c.to_string())
                    .collect();
                format!("deals {}", hands.join(","))
            }
        };
        println!("{:<14} {:<14} {:>2} rounds  {schedule}", mode.id, mode.name, mode.rounds);
        println!("{:<14} {}", "", mode.description);
    }
}

pub fn print_score(base: i32, bonus: i32) {
    println!("base:  {base:>5}");
    println!("bonus: {bonus:>5}");
    println!("score: {:>5}", base + bonus);
}

pub fn print_roster(names: &[String]) {
    for (i, name) in names.iter().enumerate() {
        println!("{:>2}. {name}", i + 1);
    }
}

pub fn print_standings(flow: &GameFlow) {
    let played = flow
        .session()
        .players()
        .first()
        .map_or(0, |p| p.rounds().len());
    if flow.is_complete() {
        println!("Final standings ({} rounds, {})", played, flow.mode().name);
    } else {
        println!(
            "Standings after {} of {} rounds ({})",
            played,
            flow.total_rounds(),
            flow.mode().name
        );
    }
    for standing in flow.session().standings() {
        println!("{:>2}. {:<20} {:>6}", standing.rank, standing.name, standing.total);
    }
}

#[derive(Serialize)]
struct PlayReport<'a> {
    mode: &'a str,
    complete: bool,
    session: &'a scorekeeper::GameSession,
    standings: Vec<scorekeeper::Standing>,
}

pub fn print_session_json(flow: &GameFlow) -> Result<(), AppError> {
    let report = PlayReport {
        mode: flow.mode().id,
        complete: flow.is_complete(),
        session: flow.session(),
        standings: flow.session().standings(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
