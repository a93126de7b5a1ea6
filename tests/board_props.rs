use broadside::{
    generate_fleet, process_shot, CellState, Coordinate, Fleet, FleetConfig, Grid, Orientation,
    ShipKind, ShotResult, BOARD_SIZE,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

fn random_board(seed: u64) -> (Grid, Fleet) {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_fleet(&FleetConfig::standard(), &mut rng).unwrap()
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

/// Straightforward restatement of the placement rule.
fn reference_valid(grid: &Grid, origin: Coordinate, size: usize, o: Orientation) -> bool {
    let cells: Vec<Coordinate> = (0..size).map(|i| origin.step(o, i)).collect();
    if cells.iter().any(|c| c.row >= BOARD_SIZE || c.col >= BOARD_SIZE) {
        return false;
    }
    grid.cells()
        .filter(|(_, cell)| cell.state == CellState::Ship)
        .all(|(p, _)| cells.iter().all(|c| c.chebyshev(p) >= 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_matches_reference(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
        size in 2usize..=5,
        o in orientation(),
    ) {
        let (grid, _) = random_board(seed);
        let origin = Coordinate::new(row, col);
        prop_assert_eq!(
            grid.is_valid_placement(origin, size, o),
            reference_valid(&grid, origin, size, o)
        );
    }

    #[test]
    fn placements_keep_ships_apart(
        attempts in prop::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE, 2usize..=5, orientation()), 1..40)
    ) {
        let mut grid: Grid = Grid::new();
        let mut fleet = Fleet::new();
        for (row, col, size, o) in attempts {
            let origin = Coordinate::new(row, col);
            if grid.is_valid_placement(origin, size, o) {
                let (next, ship) = grid.place_ship(&fleet, ShipKind::Destroyer, origin, size, o);
                grid = next;
                fleet.push(ship);
            }
        }
        let ships = fleet.ships();
        for (i, a) in ships.iter().enumerate() {
            for b in &ships[i + 1..] {
                for &ca in a.coordinates() {
                    for &cb in b.coordinates() {
                        prop_assert!(ca.chebyshev(cb) >= 2);
                    }
                }
            }
        }
        let ship_cells: usize = ships.iter().map(|s| s.len()).sum();
        prop_assert_eq!(grid.count(CellState::Ship), ship_cells);
    }

    #[test]
    fn shot_idempotent(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE) {
        let (grid, fleet) = random_board(seed);
        let target = Coordinate::new(row, col);
        let first = process_shot(&grid, &fleet, target).unwrap();
        prop_assert_ne!(first.outcome.result, ShotResult::Duplicate);
        let second = process_shot(&first.grid, &first.fleet, target).unwrap();
        prop_assert_eq!(second.outcome.result, ShotResult::Duplicate);
        prop_assert_eq!(second.grid, first.grid);
        prop_assert_eq!(second.fleet, first.fleet);
    }

    #[test]
    fn sinking_is_monotonic_and_all_sunk_is_exact(seed in any::<u64>()) {
        let (mut grid, mut fleet) = random_board(seed);
        let mut targets: Vec<Coordinate> = grid.cells().map(|(c, _)| c).collect();
        targets.shuffle(&mut SmallRng::seed_from_u64(seed.wrapping_add(1)));

        for target in targets {
            let shot = process_shot(&grid, &fleet, target).unwrap();
            for (before, after) in fleet.ships().iter().zip(shot.fleet.ships()) {
                prop_assert!(after.hits() >= before.hits());
                if before.is_sunk() {
                    prop_assert!(after.is_sunk());
                }
                if after.is_sunk() {
                    for &c in after.coordinates() {
                        prop_assert_eq!(shot.grid.state(c), Some(CellState::Sunk));
                    }
                }
            }
            let every_ship_done = shot
                .fleet
                .ships()
                .iter()
                .all(|s| s.hits() == s.len());
            if shot.outcome.sunk.is_some() {
                prop_assert_eq!(shot.outcome.all_sunk, every_ship_done);
            } else {
                prop_assert!(!shot.outcome.all_sunk);
            }
            grid = shot.grid;
            fleet = shot.fleet;
        }
        prop_assert!(fleet.all_sunk());
        prop_assert_eq!(grid.count(CellState::Sunk), 17);
    }
}
