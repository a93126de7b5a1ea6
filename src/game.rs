use alloc::vec::Vec;

use crate::{
    board::{CellState, Coordinate, Grid},
    common::{GameError, ShotOutcome},
    config::{FleetConfig, ShipSpec, BOARD_SIZE},
    ship::{footprint, Fleet, Orientation, ShipId, ShipKind},
    shot::process_shot,
};

/// One of the two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Player,
    Opponent,
}

impl Turn {
    pub fn other(self) -> Self {
        match self {
            Turn::Player => Turn::Opponent,
            Turn::Opponent => Turn::Player,
        }
    }

    fn index(self) -> usize {
        match self {
            Turn::Player => 0,
            Turn::Opponent => 1,
        }
    }
}

/// Current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Placement,
    Playing,
    GameOver { winner: Turn },
}

/// Shooting statistics, read off the board that was shot at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardStats {
    /// Shots that struck a ship, sunk ones included.
    pub hits: usize,
    pub misses: usize,
    pub total_shots: usize,
    pub sunk_ships: usize,
    /// Hits as a rounded percentage of all shots.
    pub accuracy: u32,
}

impl BoardStats {
    pub fn of<const N: usize>(grid: &Grid<N>, fleet: &Fleet) -> Self {
        let hits = grid.count(CellState::Hit) + grid.count(CellState::Sunk);
        let misses = grid.count(CellState::Miss);
        let total_shots = hits + misses;
        let accuracy = if total_shots == 0 {
            0
        } else {
            ((hits * 200 + total_shots) / (2 * total_shots)) as u32
        };
        Self {
            hits,
            misses,
            total_shots,
            sunk_ships: fleet.sunk_count(),
            accuracy,
        }
    }
}

#[derive(Debug, Clone)]
struct Side<const N: usize> {
    grid: Grid<N>,
    fleet: Fleet,
    shots_fired: usize,
}

impl<const N: usize> Side<N> {
    fn new() -> Self {
        Self {
            grid: Grid::new(),
            fleet: Fleet::new(),
            shots_fired: 0,
        }
    }
}

/// Turn orchestrator: owns both boards and enforces placement, turn order and
/// the hit-shoots-again rule.
#[derive(Debug, Clone)]
pub struct GameEngine<const N: usize = BOARD_SIZE> {
    config: FleetConfig,
    sides: [Side<N>; 2],
    phase: GamePhase,
    turn: Turn,
}

impl<const N: usize> GameEngine<N> {
    /// Create a new engine in the placement phase with both boards empty.
    pub fn new(config: FleetConfig) -> Self {
        Self {
            config,
            sides: [Side::new(), Side::new()],
            phase: GamePhase::Placement,
            turn: Turn::Player,
        }
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Side whose shot is next.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn winner(&self) -> Option<Turn> {
        match self.phase {
            GamePhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// The board `side` defends.
    pub fn grid(&self, side: Turn) -> &Grid<N> {
        &self.sides[side.index()].grid
    }

    pub fn fleet(&self, side: Turn) -> &Fleet {
        &self.sides[side.index()].fleet
    }

    /// The enemy board as `shooter` sees it.
    pub fn target_view(&self, shooter: Turn) -> Grid<N> {
        self.grid(shooter.other()).fogged()
    }

    /// Enemy ships `shooter` still has to sink.
    pub fn enemy_remaining(&self, shooter: Turn) -> Vec<ShipSpec> {
        self.fleet(shooter.other()).afloat_specs()
    }

    pub fn shots_fired(&self, side: Turn) -> usize {
        self.sides[side.index()].shots_fired
    }

    /// How well `shooter` has done against the enemy board.
    pub fn stats(&self, shooter: Turn) -> BoardStats {
        let target = &self.sides[shooter.other().index()];
        BoardStats::of(&target.grid, &target.fleet)
    }

    /// Manifest entries `side` has not placed yet, counts reduced accordingly.
    pub fn remaining_to_place(&self, side: Turn) -> Vec<ShipSpec> {
        let fleet = self.fleet(side);
        self.config
            .ships()
            .iter()
            .filter_map(|spec| {
                let left = spec.count.saturating_sub(fleet.count_of(spec.kind));
                (left > 0).then(|| spec.with_count(left))
            })
            .collect()
    }

    /// Place one ship of `kind` on the board `side` defends.
    pub fn place_ship(
        &mut self,
        side: Turn,
        kind: ShipKind,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<ShipId, GameError> {
        if self.phase != GamePhase::Placement {
            return Err(GameError::WrongPhase);
        }
        let spec = self
            .config
            .spec(kind)
            .ok_or(GameError::ShipNotInManifest(kind))?;
        let s = &mut self.sides[side.index()];
        if s.fleet.count_of(kind) >= spec.count {
            return Err(GameError::ShipAlreadyPlaced(kind));
        }
        if !s.grid.is_valid_placement(origin, spec.size, orientation) {
            return Err(GameError::InvalidPlacement);
        }
        let (grid, ship) = s.grid.place_ship(&s.fleet, kind, origin, spec.size, orientation);
        let id = ship.id();
        s.grid = grid;
        s.fleet.push(ship);
        log::info!("{:?} placed {} at {}", side, kind, origin);
        Ok(id)
    }

    /// Install a complete, already placed fleet for `side`.
    ///
    /// The fleet must match the manifest and sit on `grid` the way
    /// [`Grid::place_ship`] would have put it: straight runs of the manifest
    /// length, cells tagged with the owning ship and no two ships touching.
    pub fn set_fleet(&mut self, side: Turn, grid: Grid<N>, fleet: Fleet) -> Result<(), GameError> {
        if self.phase != GamePhase::Placement {
            return Err(GameError::WrongPhase);
        }
        if !self.matches_manifest(&fleet) {
            return Err(GameError::FleetIncomplete);
        }
        if !self.layout_is_valid(&grid, &fleet) {
            return Err(GameError::InvalidPlacement);
        }
        let s = &mut self.sides[side.index()];
        s.grid = grid;
        s.fleet = fleet;
        Ok(())
    }

    /// Clear the board `side` defends so placement can start over.
    pub fn reset_placement(&mut self, side: Turn) -> Result<(), GameError> {
        if self.phase != GamePhase::Placement {
            return Err(GameError::WrongPhase);
        }
        self.sides[side.index()] = Side::new();
        Ok(())
    }

    /// Leave placement and hand the first shot to `first`.
    pub fn start(&mut self, first: Turn) -> Result<(), GameError> {
        if self.phase != GamePhase::Placement {
            return Err(GameError::WrongPhase);
        }
        if self.config.ship_count() == 0
            || !self.sides.iter().all(|s| self.matches_manifest(&s.fleet))
        {
            return Err(GameError::FleetIncomplete);
        }
        self.phase = GamePhase::Playing;
        self.turn = first;
        log::info!("game started, {:?} shoots first", first);
        Ok(())
    }

    /// Fire the current side's shot at `target` on the enemy board.
    ///
    /// A hit keeps the turn, a miss passes it. A duplicate changes nothing and
    /// is not counted as a shot. Sinking the last ship ends the game.
    pub fn fire(&mut self, target: Coordinate) -> Result<ShotOutcome, GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::WrongPhase);
        }
        let shooter = self.turn;
        let defender = &mut self.sides[shooter.other().index()];
        let shot = process_shot(&defender.grid, &defender.fleet, target)?;
        if shot.outcome.is_duplicate() {
            return Ok(shot.outcome);
        }
        defender.grid = shot.grid;
        defender.fleet = shot.fleet;
        self.sides[shooter.index()].shots_fired += 1;

        if shot.outcome.all_sunk {
            self.phase = GamePhase::GameOver { winner: shooter };
            log::info!("{:?} sank the last ship at {}", shooter, target);
        } else if !shot.outcome.is_hit() {
            self.turn = shooter.other();
        }
        Ok(shot.outcome)
    }

    fn matches_manifest(&self, fleet: &Fleet) -> bool {
        fleet.len() == self.config.ship_count()
            && self
                .config
                .ships()
                .iter()
                .all(|spec| fleet.count_of(spec.kind) == spec.count)
    }

    fn layout_is_valid(&self, grid: &Grid<N>, fleet: &Fleet) -> bool {
        let ships = fleet.ships();
        let shaped = ships.iter().all(|ship| {
            let Some((origin, spec)) = ship.origin().zip(self.config.spec(ship.kind())) else {
                return false;
            };
            footprint(origin, spec.size, ship.orientation(), N).as_deref()
                == Some(ship.coordinates())
                && ship.coordinates().iter().all(|&c| {
                    grid.get(c)
                        .is_some_and(|cell| cell.state == CellState::Ship && cell.ship == Some(ship.id()))
                })
        });
        if !shaped || grid.count(CellState::Ship) != self.config.total_cells() {
            return false;
        }
        ships.iter().enumerate().all(|(i, a)| {
            ships[i + 1..].iter().all(|b| {
                a.coordinates()
                    .iter()
                    .all(|&ca| b.coordinates().iter().all(|&cb| ca.chebyshev(cb) >= 2))
            })
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(FleetConfig::standard())
    }
}
