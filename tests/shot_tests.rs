use broadside::{
    create_empty_grid, process_shot, CellState, Coordinate, Fleet, GameError, Grid, Orientation,
    ShipKind, ShotResult,
};

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col)
}

/// Destroyer on A0-A1 and Cruiser on E5-G5.
fn two_ship_board() -> (Grid, Fleet) {
    let mut grid = create_empty_grid();
    let mut fleet = Fleet::new();
    for (kind, origin, size, o) in [
        (ShipKind::Destroyer, at(0, 0), 2, Orientation::Horizontal),
        (ShipKind::Cruiser, at(4, 5), 3, Orientation::Vertical),
    ] {
        let (next, ship) = grid.place_ship(&fleet, kind, origin, size, o);
        grid = next;
        fleet.push(ship);
    }
    (grid, fleet)
}

#[test]
fn test_miss_on_empty_and_restricted() {
    let (grid, fleet) = two_ship_board();

    let shot = process_shot(&grid, &fleet, at(9, 9)).unwrap();
    assert_eq!(shot.outcome.result, ShotResult::Miss);
    assert_eq!(shot.grid.state(at(9, 9)), Some(CellState::Miss));

    // halo cell next to the destroyer
    let shot = process_shot(&grid, &fleet, at(1, 0)).unwrap();
    assert_eq!(shot.outcome.result, ShotResult::Miss);
    assert!(shot.outcome.sunk.is_none());
    assert!(!shot.outcome.all_sunk);
    assert_eq!(shot.grid.state(at(1, 0)), Some(CellState::Miss));
}

#[test]
fn test_inputs_are_not_mutated() {
    let (grid, fleet) = two_ship_board();
    let before = (grid, fleet.clone());
    let shot = process_shot(&grid, &fleet, at(0, 0)).unwrap();
    assert_eq!((grid, fleet), before);
    assert_eq!(shot.grid.state(at(0, 0)), Some(CellState::Hit));
    assert_eq!(shot.fleet.ships()[0].hits(), 1);
}

#[test]
fn test_hit_then_sink() {
    let (grid, fleet) = two_ship_board();

    let shot = process_shot(&grid, &fleet, at(4, 5)).unwrap();
    assert_eq!(shot.outcome.result, ShotResult::Hit);
    assert!(shot.outcome.sunk.is_none());

    let shot = process_shot(&shot.grid, &shot.fleet, at(5, 5)).unwrap();
    assert_eq!(shot.outcome.result, ShotResult::Hit);
    assert_eq!(shot.grid.count(CellState::Hit), 2);

    let shot = process_shot(&shot.grid, &shot.fleet, at(6, 5)).unwrap();
    assert_eq!(shot.outcome.result, ShotResult::Hit);
    let sunk = shot.outcome.sunk.as_ref().expect("cruiser should sink");
    assert_eq!(sunk.kind(), ShipKind::Cruiser);
    assert!(sunk.is_sunk());
    assert!(!shot.outcome.all_sunk);

    // every footprint cell flips to sunk, prior hits included
    for c in [at(4, 5), at(5, 5), at(6, 5)] {
        assert_eq!(shot.grid.state(c), Some(CellState::Sunk));
    }
    assert_eq!(shot.grid.count(CellState::Hit), 0);
}

#[test]
fn test_all_sunk_on_last_ship() {
    let (mut grid, mut fleet) = two_ship_board();
    let targets = [at(0, 0), at(4, 5), at(5, 5), at(6, 5), at(0, 1)];
    for (i, &t) in targets.iter().enumerate() {
        let shot = process_shot(&grid, &fleet, t).unwrap();
        let last = i == targets.len() - 1;
        assert_eq!(shot.outcome.all_sunk, last, "after shot at {}", t);
        grid = shot.grid;
        fleet = shot.fleet;
    }
    assert!(fleet.all_sunk());
    assert_eq!(grid.count(CellState::Sunk), 5);
}

#[test]
fn test_duplicate_shots() {
    let (grid, fleet) = two_ship_board();
    for target in [at(9, 9), at(4, 5), at(0, 0)] {
        let first = process_shot(&grid, &fleet, target).unwrap();
        let second = process_shot(&first.grid, &first.fleet, target).unwrap();
        assert_eq!(second.outcome.result, ShotResult::Duplicate);
        assert!(!second.outcome.all_sunk);
        assert_eq!(second.grid, first.grid);
        assert_eq!(second.fleet, first.fleet);
    }

    // sunk cells are duplicates too
    let shot = process_shot(&grid, &fleet, at(0, 0)).unwrap();
    let shot = process_shot(&shot.grid, &shot.fleet, at(0, 1)).unwrap();
    assert!(shot.outcome.sunk.is_some());
    let again = process_shot(&shot.grid, &shot.fleet, at(0, 0)).unwrap();
    assert!(again.outcome.is_duplicate());
}

#[test]
fn test_out_of_bounds_and_unknown_ship() {
    let (grid, fleet) = two_ship_board();
    assert_eq!(
        process_shot(&grid, &fleet, at(10, 3)).unwrap_err(),
        GameError::OutOfBounds(at(10, 3))
    );
    // ship cells whose owner is missing from the registry
    assert_eq!(
        process_shot(&grid, &Fleet::new(), at(0, 0)).unwrap_err(),
        GameError::UnknownShip(at(0, 0))
    );
}
