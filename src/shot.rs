//! Shot resolution against one side's grid and fleet.

use crate::board::{CellState, Coordinate, Grid};
use crate::common::{GameError, ShotOutcome, ShotResult};
use crate::config::BOARD_SIZE;
use crate::ship::{Condition, Fleet};

/// Grid and fleet after a shot, with what the shooter learned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shot<const N: usize = BOARD_SIZE> {
    pub grid: Grid<N>,
    pub fleet: Fleet,
    pub outcome: ShotOutcome,
}

/// Fire at `target`. The inputs are left untouched; the updated grid and fleet
/// come back in the returned [`Shot`].
///
/// Resolved cells yield [`ShotResult::Duplicate`] and unchanged state. Sinking
/// a ship turns its whole footprint `Sunk`.
pub fn process_shot<const N: usize>(
    grid: &Grid<N>,
    fleet: &Fleet,
    target: Coordinate,
) -> Result<Shot<N>, GameError> {
    let cell = *grid.get(target).ok_or(GameError::OutOfBounds(target))?;
    let mut grid = *grid;
    let mut fleet = fleet.clone();

    let outcome = match cell.state {
        CellState::Hit | CellState::Miss | CellState::Sunk => ShotOutcome::duplicate(),
        CellState::Empty | CellState::Restricted => {
            set_state(&mut grid, target, CellState::Miss);
            ShotOutcome::miss()
        }
        CellState::Ship => {
            let ship = cell
                .ship
                .and_then(|id| fleet.get_mut(id))
                .ok_or(GameError::UnknownShip(target))?;
            set_state(&mut grid, target, CellState::Hit);
            match ship.register_hit() {
                Condition::Sunk => {
                    for &c in ship.coordinates() {
                        set_state(&mut grid, c, CellState::Sunk);
                    }
                    let sunk = ship.clone();
                    log::debug!("{} {} sunk by shot at {}", sunk.kind(), sunk.id(), target);
                    ShotOutcome {
                        result: ShotResult::Hit,
                        sunk: Some(sunk),
                        all_sunk: fleet.all_sunk(),
                    }
                }
                _ => ShotOutcome {
                    result: ShotResult::Hit,
                    sunk: None,
                    all_sunk: false,
                },
            }
        }
    };
    log::trace!("shot at {}: {:?}", target, outcome.result);
    Ok(Shot {
        grid,
        fleet,
        outcome,
    })
}

fn set_state<const N: usize>(grid: &mut Grid<N>, coord: Coordinate, state: CellState) {
    if let Some(cell) = grid.cell_mut(coord) {
        cell.state = state;
    }
}
