use broadside::{play_match, AiPlayer, FleetConfig, Turn, BOARD_SIZE};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    broadside::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed1 ^ seed2.rotate_left(32));
    let first = if seed1 <= seed2 { Turn::Player } else { Turn::Opponent };

    let mut p1 = AiPlayer::new();
    let mut p2 = AiPlayer::new();
    let config = FleetConfig::standard();
    let report = play_match::<BOARD_SIZE>(&config, &mut p1, &mut p2, first, &mut rng, |_| {})
        .map_err(|e| anyhow::anyhow!(e))?;

    let winner = match report.winner {
        Turn::Player => "player1",
        Turn::Opponent => "player2",
    };
    let status = |side: Turn| if side == report.winner { "Won" } else { "Lost" };

    let result = json!({
        "player1": {
            "status": status(Turn::Player),
            "shots": report.player.shots,
            "accuracy": report.player.stats.accuracy,
        },
        "player2": {
            "status": status(Turn::Opponent),
            "shots": report.opponent.shots,
            "accuracy": report.opponent.stats.accuracy,
        },
        "first": first,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
