use broadside::{
    init_logging, play_match, AiPlayer, CliPlayer, FleetConfig, MatchReport, ShotEvent, Turn,
    BOARD_SIZE,
};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum First {
    Player,
    Opponent,
    Random,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the AI in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = First::Random)]
        first: First,
        #[arg(long, help = "Place your fleet at random instead of prompting")]
        auto_place: bool,
        #[arg(long, help = "Show the targeting density before each shot")]
        show_density: bool,
    },
    /// Watch two AI players fight it out.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn first_turn(first: First, rng: &mut SmallRng) -> Turn {
    match first {
        First::Player => Turn::Player,
        First::Opponent => Turn::Opponent,
        First::Random if rng.random() => Turn::Player,
        First::Random => Turn::Opponent,
    }
}

fn print_summary(report: &MatchReport, player: &str, opponent: &str) {
    println!("\n======================= GAME OVER =======================");
    for (name, side) in [(player, &report.player), (opponent, &report.opponent)] {
        println!(
            "{:>10}: {} shots, {} hits, {} misses, {} ships sunk, {}% accuracy",
            name,
            side.shots,
            side.stats.hits,
            side.stats.misses,
            side.stats.sunk_ships,
            side.stats.accuracy
        );
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = FleetConfig::standard();

    match cli.command {
        Commands::Play {
            seed,
            first,
            auto_place,
            show_density,
        } => {
            let mut rng = make_rng(seed);
            let first = first_turn(first, &mut rng);
            let mut human = CliPlayer::new()
                .with_auto_place(auto_place)
                .with_density(show_density);
            let mut ai = AiPlayer::new();
            println!(
                "{}",
                match first {
                    Turn::Player => "You start first!",
                    Turn::Opponent => "Opponent starts first.",
                }
            );
            let report = play_match::<BOARD_SIZE>(&config, &mut human, &mut ai, first, &mut rng, |_| {})
                .map_err(|e| anyhow::anyhow!(e))?;
            print_summary(&report, "You", "Opponent");
            match report.winner {
                Turn::Player => println!("\nVICTORY! You have sunk all enemy ships."),
                Turn::Opponent => println!("\nDEFEAT. All your ships have been destroyed."),
            }
        }
        Commands::Watch { seed } => {
            let mut rng = make_rng(seed);
            let first = first_turn(First::Random, &mut rng);
            let mut north = AiPlayer::new();
            let mut south = AiPlayer::new();
            let report = play_match::<BOARD_SIZE>(
                &config,
                &mut north,
                &mut south,
                first,
                &mut rng,
                |event: &ShotEvent| {
                    let who = match event.shooter {
                        Turn::Player => "North",
                        Turn::Opponent => "South",
                    };
                    match &event.outcome.sunk {
                        Some(ship) => println!("{} fires at {}: sunk {}", who, event.target, ship.kind()),
                        None if event.outcome.is_hit() => println!("{} fires at {}: hit", who, event.target),
                        None => println!("{} fires at {}: miss", who, event.target),
                    }
                },
            )
            .map_err(|e| anyhow::anyhow!(e))?;
            print_summary(&report, "North", "South");
        }
    }
    Ok(())
}
