use broadside::{
    play_match, AiPlayer, CellState, Coordinate, FleetConfig, GameError, Grid, Player, ShipSpec,
    Turn, BOARD_SIZE, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_ai_vs_ai_runs_to_completion() {
    let config = FleetConfig::standard();
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut p1 = AiPlayer::new();
        let mut p2 = AiPlayer::new();
        let mut events = Vec::new();
        let report = play_match::<BOARD_SIZE>(&config, &mut p1, &mut p2, Turn::Player, &mut rng, |e| {
            events.push(e.clone())
        })
        .unwrap();

        let (winner, loser) = match report.winner {
            Turn::Player => (report.player, report.opponent),
            Turn::Opponent => (report.opponent, report.player),
        };
        assert_eq!(winner.stats.hits, TOTAL_SHIP_CELLS);
        assert_eq!(winner.stats.sunk_ships, 5);
        assert!(loser.stats.sunk_ships < 5);
        assert_eq!(winner.shots, winner.stats.total_shots);
        assert_eq!(loser.shots, loser.stats.total_shots);
        assert_eq!(events.len(), winner.shots + loser.shots);
        assert!(winner.shots <= BOARD_SIZE * BOARD_SIZE);

        let last = events.last().unwrap();
        assert_eq!(last.shooter, report.winner);
        assert!(last.outcome.all_sunk);
        // no cell is ever targeted twice by the same side
        for side in [Turn::Player, Turn::Opponent] {
            let mut seen: Vec<Coordinate> = events
                .iter()
                .filter(|e| e.shooter == side)
                .map(|e| e.target)
                .collect();
            let n = seen.len();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), n);
        }
    }
}

#[test]
fn test_ai_match_is_reproducible() {
    let config = FleetConfig::standard();
    let run = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut targets = Vec::new();
        let report = play_match::<BOARD_SIZE>(
            &config,
            &mut AiPlayer::new(),
            &mut AiPlayer::new(),
            Turn::Opponent,
            &mut rng,
            |e| targets.push(e.target),
        )
        .unwrap();
        (report, targets)
    };
    assert_eq!(run(77), run(77));
}

#[test]
fn test_ai_beats_fleet_on_small_board() {
    let config = FleetConfig::new(vec![ShipSpec::new(broadside::ShipKind::Destroyer, 2)]);
    let mut rng = SmallRng::seed_from_u64(3);
    let report = play_match::<4>(
        &config,
        &mut AiPlayer::new(),
        &mut AiPlayer::new(),
        Turn::Player,
        &mut rng,
        |_| {},
    )
    .unwrap();
    let winner = match report.winner {
        Turn::Player => report.player,
        Turn::Opponent => report.opponent,
    };
    assert_eq!(winner.stats.hits, 2);
    assert_eq!(winner.stats.sunk_ships, 1);
}

/// Keeps shooting the same corner.
struct Stubborn;

impl Player for Stubborn {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        config: &FleetConfig,
    ) -> Result<(Grid, broadside::Fleet), GameError> {
        broadside::generate_fleet(config, rng)
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _view: &Grid,
        _remaining: &[ShipSpec],
    ) -> Result<Coordinate, GameError> {
        Ok(Coordinate::new(0, 0))
    }
}

#[test]
fn test_stuck_player_is_stopped() {
    let config = FleetConfig::standard();
    let mut rng = SmallRng::seed_from_u64(9);
    let mut first_view = None;
    let result = play_match::<BOARD_SIZE>(
        &config,
        &mut Stubborn,
        &mut AiPlayer::new(),
        Turn::Player,
        &mut rng,
        |e| {
            if first_view.is_none() {
                first_view = Some(e.target);
            }
        },
    );
    assert_eq!(result, Err(GameError::NoTargetAvailable));
    assert_eq!(first_view, Some(Coordinate::new(0, 0)));
}

#[test]
fn test_ai_player_places_valid_fleet() {
    let mut rng = SmallRng::seed_from_u64(12);
    let mut ai = AiPlayer::new();
    let (grid, fleet): (Grid, _) = ai.place_fleet(&mut rng, &FleetConfig::standard()).unwrap();
    assert_eq!(grid.count(CellState::Ship), TOTAL_SHIP_CELLS);
    assert_eq!(fleet.len(), 5);
}
