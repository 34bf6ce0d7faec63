//! Exhibition runner: many independent computer-vs-computer matches played
//! in parallel, summarised as one JSON object on stdout.

use clap::{Parser, ValueEnum};
use gridstrike::{
    init_logging, parse_fleet, BoardSize, GameStatus, Match, NightmareAi, Player, ReactiveAi,
    Side, STANDARD_FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;

#[derive(ValueEnum, Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum AiKind {
    Reactive,
    Nightmare,
}

#[derive(Parser)]
#[command(author, version, about = "Run many AI vs AI matches and report the results", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = BoardSize::Standard)]
    size: BoardSize,
    #[arg(long, value_enum, default_value_t = AiKind::Nightmare)]
    first: AiKind,
    #[arg(long, value_enum, default_value_t = AiKind::Reactive)]
    second: AiKind,
    #[arg(long, help = "Comma separated ship lengths (default 5,3,2,2,1)")]
    fleet: Option<String>,
}

#[derive(Serialize)]
struct Summary {
    games: usize,
    first: AiKind,
    second: AiKind,
    first_wins: usize,
    second_wins: usize,
    unfinished: usize,
    average_shots: f64,
}

struct GameOutcome {
    winner: Option<Side>,
    shots: usize,
}

fn make_ai<const N: usize>(kind: AiKind, fleet: &[usize]) -> Box<dyn Player<N>> {
    match kind {
        AiKind::Reactive => Box::new(ReactiveAi::new()),
        AiKind::Nightmare => Box::new(NightmareAi::<N>::new(fleet)),
    }
}

fn play_one<const N: usize>(args: &Args, fleet: &[usize], index: usize) -> anyhow::Result<GameOutcome> {
    let mut rng = SmallRng::seed_from_u64(args.seed ^ ((index as u64) << 32) ^ index as u64);
    let mut game = Match::<N>::new(make_ai(args.first, fleet), make_ai(args.second, fleet));
    for report in game.setup(&mut rng, fleet)? {
        report.ensure_complete().map_err(|e| anyhow::anyhow!(e))?;
    }
    // every cell of both grids can be attacked at most once
    let status = game.run(&mut rng, 2 * N * N)?;
    let winner = match status {
        GameStatus::Won(side) => Some(side),
        GameStatus::InProgress => None,
    };
    Ok(GameOutcome {
        winner,
        shots: game.turns(),
    })
}

fn simulate<const N: usize>(args: &Args, fleet: &[usize]) -> anyhow::Result<Summary> {
    let outcomes = (0..args.games)
        .into_par_iter()
        .map(|i| play_one::<N>(args, fleet, i))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let count = |side: Side| outcomes.iter().filter(|o| o.winner == Some(side)).count();
    let total_shots: usize = outcomes.iter().map(|o| o.shots).sum();
    Ok(Summary {
        games: outcomes.len(),
        first: args.first,
        second: args.second,
        first_wins: count(Side::First),
        second_wins: count(Side::Second),
        unfinished: outcomes.iter().filter(|o| o.winner.is_none()).count(),
        average_shots: if outcomes.is_empty() {
            0.0
        } else {
            total_shots as f64 / outcomes.len() as f64
        },
    })
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let fleet = match &args.fleet {
        Some(spec) => parse_fleet(spec).map_err(|e| anyhow::anyhow!(e))?,
        None => STANDARD_FLEET.to_vec(),
    };
    let summary = match args.size {
        BoardSize::Small => simulate::<8>(&args, &fleet)?,
        BoardSize::Standard => simulate::<10>(&args, &fleet)?,
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
