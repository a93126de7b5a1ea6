use crate::{
    board::{Coordinate, Grid},
    common::{GameError, ShotOutcome},
    config::{FleetConfig, ShipSpec, BOARD_SIZE},
    ship::Fleet,
};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player<const N: usize = BOARD_SIZE> {
    /// Build a complete fleet for `config` on an empty board.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        config: &FleetConfig,
    ) -> Result<(Grid<N>, Fleet), GameError>;

    /// Choose the next target given the visible enemy board and the enemy
    /// ships still afloat.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &Grid<N>,
        remaining: &[ShipSpec],
    ) -> Result<Coordinate, GameError>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: &ShotOutcome) {}

    /// Inform the player of an enemy shot, with its own board afterwards.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _outcome: &ShotOutcome, _own: &Grid<N>) {}
}
