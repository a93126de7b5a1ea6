//! Random fleet placement with the retry-then-restart policy.

use rand::Rng;

use crate::board::{Coordinate, Grid};
use crate::common::GameError;
use crate::config::FleetConfig;
use crate::ship::{Fleet, Orientation};

/// Returns a valid random `(origin, orientation)` for a ship of `size`, trying
/// at most `attempts` samples.
pub fn random_placement<const N: usize, R: Rng + ?Sized>(
    grid: &Grid<N>,
    size: usize,
    attempts: usize,
    rng: &mut R,
) -> Option<(Coordinate, Orientation)> {
    for _ in 0..attempts {
        let orientation = if rng.random() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let origin = Coordinate::new(rng.random_range(0..N), rng.random_range(0..N));
        if grid.is_valid_placement(origin, size, orientation) {
            return Some((origin, orientation));
        }
    }
    None
}

/// Place every ship of `config` at random.
///
/// A ship that finds no spot within the configured attempts sends the whole
/// fleet back to an empty grid. After `max_restarts` restarts the fleet is
/// declared not to fit.
pub fn generate_fleet<const N: usize, R: Rng + ?Sized>(
    config: &FleetConfig,
    rng: &mut R,
) -> Result<(Grid<N>, Fleet), GameError> {
    for restart in 0..=config.max_restarts() {
        if let Some(placed) = try_place_fleet(config, rng) {
            return Ok(placed);
        }
        log::debug!("fleet placement exhausted, restart {}", restart + 1);
    }
    log::warn!(
        "giving up on {} ships after {} restarts",
        config.ship_count(),
        config.max_restarts()
    );
    Err(GameError::FleetDoesNotFit {
        restarts: config.max_restarts(),
    })
}

fn try_place_fleet<const N: usize, R: Rng + ?Sized>(
    config: &FleetConfig,
    rng: &mut R,
) -> Option<(Grid<N>, Fleet)> {
    let mut grid = Grid::<N>::new();
    let mut fleet = Fleet::new();
    for spec in config.expanded() {
        let (origin, orientation) =
            random_placement(&grid, spec.size, config.placement_attempts(), rng)?;
        let (next, ship) = grid.place_ship(&fleet, spec.kind, origin, spec.size, orientation);
        grid = next;
        fleet.push(ship);
    }
    Some((grid, fleet))
}
