use crate::{
    ai,
    board::{Coordinate, Grid},
    common::GameError,
    config::{FleetConfig, ShipSpec},
    placement,
    ship::Fleet,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Computer player: random fleet, density-based targeting.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl<const N: usize> Player<N> for AiPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        config: &FleetConfig,
    ) -> Result<(Grid<N>, Fleet), GameError> {
        placement::generate_fleet(config, rng)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &Grid<N>,
        remaining: &[ShipSpec],
    ) -> Result<Coordinate, GameError> {
        ai::best_move(view, remaining, rng)
    }
}
