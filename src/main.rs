use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand, ValueEnum};
use gridstrike::{
    init_logging, parse_fleet, ui, AttackResult, BoardSize, CliPlayer, GameStatus, KnowledgeGrid, Match,
    NightmareAi, Player, ReactiveAi, Side, TurnReport, STANDARD_FLEET,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Turn-based grid combat in the terminal", long_about = None)]
struct Cli {
    #[arg(long, value_enum, global = true, default_value_t = BoardSize::Standard)]
    size: BoardSize,
    #[arg(long, global = true, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, global = true, help = "Comma separated ship lengths (default 5,3,2,2,1)")]
    fleet: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AiKind {
    Reactive,
    Nightmare,
}

#[derive(Subcommand)]
enum Commands {
    /// Two players taking turns at the same terminal.
    Pvp,
    /// Play against a computer opponent.
    Vs {
        #[arg(long, value_enum, default_value_t = AiKind::Reactive)]
        ai: AiKind,
        #[arg(long, help = "Show a probability board and suggested shot each turn")]
        hints: bool,
    },
    /// Watch two computer opponents play each other.
    Watch {
        #[arg(long, value_enum, default_value_t = AiKind::Nightmare)]
        first: AiKind,
        #[arg(long, value_enum, default_value_t = AiKind::Nightmare)]
        second: AiKind,
        #[arg(long, help = "Wait for Enter between turns")]
        pause: bool,
    },
}

fn make_ai<const N: usize>(kind: AiKind, fleet: &[usize]) -> Box<dyn Player<N>> {
    match kind {
        AiKind::Reactive => Box::new(ReactiveAi::new()),
        AiKind::Nightmare => Box::new(NightmareAi::<N>::new(fleet)),
    }
}

fn human<const N: usize>(name: &str, hint_fleet: Option<&[usize]>) -> Box<dyn Player<N>> {
    let player = CliPlayer::new(name);
    match hint_fleet {
        Some(fleet) => Box::new(player.with_hints(fleet)),
        None => Box::new(player),
    }
}

fn wait_for_enter() -> anyhow::Result<()> {
    print!("Press Enter to continue...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

fn announce<const N: usize>(game: &Match<N>, report: &TurnReport) {
    let name = game.player(report.side).name();
    let verb = match report.shot.result {
        AttackResult::Hit => "HIT",
        AttackResult::Miss => "MISSED",
    };
    println!("{} {} at {}!", name, verb, ui::coord_to_string(report.shot.coord));
}

fn run<const N: usize>(cli: &Cli, fleet: &[usize]) -> anyhow::Result<()> {
    let mut rng = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let (first, second, humans): (Box<dyn Player<N>>, Box<dyn Player<N>>, [bool; 2]) =
        match &cli.command {
            Commands::Pvp => (
                human::<N>("Player 1", None),
                human::<N>("Player 2", None),
                [true, true],
            ),
            Commands::Vs { ai, hints } => (
                human::<N>("Player", hints.then_some(fleet)),
                make_ai::<N>(*ai, fleet),
                [true, false],
            ),
            Commands::Watch { first, second, .. } => (
                make_ai::<N>(*first, fleet),
                make_ai::<N>(*second, fleet),
                [false, false],
            ),
        };
    let pause = matches!(cli.command, Commands::Watch { pause: true, .. })
        || matches!(cli.command, Commands::Vs { .. });

    println!("{}", ui::rules());
    let mut game = Match::<N>::new(first, second);
    let reports = game.setup(&mut rng, fleet)?;
    for report in &reports {
        report.ensure_complete().map_err(|e| anyhow::anyhow!(e))?;
    }

    while game.status() == GameStatus::InProgress {
        let side = game.to_move();
        let idx = if side == Side::First { 0 } else { 1 };
        println!("\n--- {}'s Turn ---", game.player(side).name());
        if humans[idx] {
            println!("Your board:");
            print!("{}", ui::render_grid(game.grid(side), true));
            println!("Opponent board:");
            let seen = KnowledgeGrid::observed(game.grid(side.opponent()));
            print!("{}", ui::render_knowledge(&seen));
        }
        let report = game.play_turn(&mut rng)?;
        if !humans[idx] {
            announce(&game, &report);
            println!("{}'s board after the attack:", game.player(side.opponent()).name());
            print!("{}", ui::render_grid(game.grid(side.opponent()), humans[1 - idx]));
            if pause && report.status == GameStatus::InProgress {
                wait_for_enter()?;
            }
        }
    }

    if let GameStatus::Won(winner) = game.status() {
        println!("\n{} wins after {} shots!", game.player(winner).name(), game.turns());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let fleet = match &cli.fleet {
        Some(spec) => parse_fleet(spec).map_err(|e| anyhow::anyhow!(e))?,
        None => STANDARD_FLEET.to_vec(),
    };

    match cli.size {
        BoardSize::Small => run::<8>(&cli, &fleet),
        BoardSize::Standard => run::<10>(&cli, &fleet),
    }
}
