// Density-based targeting for the opponent board.
// Every call re-derives the scores from the grid; nothing is cached between turns.

use alloc::vec::Vec;
use rand::Rng;

use crate::{
    board::{CellState, Coordinate, Grid},
    common::GameError,
    config::{ShipSpec, BASE_WEIGHT, BOARD_SIZE, HUNT_WEIGHT, HUNT_WEIGHT_PER_HIT},
    ship::Orientation,
};

/// Targeting mode, derived fresh from the board each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// No unresolved hit: spread shots by raw placement density.
    Search,
    /// At least one `Hit` cell not yet part of a sunk ship.
    Hunt,
}

impl TargetMode {
    pub fn of<const N: usize>(grid: &Grid<N>) -> Self {
        if grid.cells().any(|(_, c)| c.state == CellState::Hit) {
            TargetMode::Hunt
        } else {
            TargetMode::Search
        }
    }

    /// Weight of one legal placement covering `hits` unresolved hits.
    pub fn weight(self, hits: usize) -> u64 {
        match self {
            TargetMode::Hunt if hits > 0 => HUNT_WEIGHT + HUNT_WEIGHT_PER_HIT * hits as u64,
            _ => BASE_WEIGHT,
        }
    }
}

/// Per-cell accumulated placement weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DensityMap<const N: usize = BOARD_SIZE> {
    scores: [[u64; N]; N],
    mode: TargetMode,
}

impl<const N: usize> DensityMap<N> {
    pub fn mode(&self) -> TargetMode {
        self.mode
    }

    pub fn score(&self, coord: Coordinate) -> u64 {
        self.scores
            .get(coord.row)
            .and_then(|r| r.get(coord.col))
            .copied()
            .unwrap_or(0)
    }

    pub fn max_score(&self) -> u64 {
        self.scores.iter().flatten().copied().max().unwrap_or(0)
    }

    /// All cells sharing the top score, empty when nothing scored.
    pub fn best_cells(&self) -> Vec<Coordinate> {
        let best = self.max_score();
        if best == 0 {
            return Vec::new();
        }
        let mut cells = Vec::new();
        for (r, row) in self.scores.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == best {
                    cells.push(Coordinate::new(r, c));
                }
            }
        }
        cells
    }

    /// Scores scaled to sum to one. Uniform when nothing scored.
    pub fn normalized(&self) -> [[f64; N]; N] {
        let total: u64 = self.scores.iter().flatten().sum();
        let mut matrix = [[0.0f64; N]; N];
        for r in 0..N {
            for c in 0..N {
                matrix[r][c] = if total == 0 {
                    1.0 / (N * N) as f64
                } else {
                    self.scores[r][c] as f64 / total as f64
                };
            }
        }
        matrix
    }
}

/// Accumulate, for every cell, the weights of all legal placements of the
/// `remaining` ships that would cover it.
///
/// A placement is illegal if it leaves the board, covers a `Miss` or `Sunk`
/// cell, or touches a `Sunk` cell (ships keep a one-cell gap). `Hit`, `Ship`,
/// `Restricted` and `Empty` all look like unknown water to the shooter.
pub fn density_map<const N: usize>(grid: &Grid<N>, remaining: &[ShipSpec]) -> DensityMap<N> {
    let mode = TargetMode::of(grid);
    let blocked = blocked_cells(grid);
    let mut scores = [[0u64; N]; N];

    for spec in remaining {
        if spec.size == 0 || spec.count == 0 {
            continue;
        }
        for orientation in Orientation::ALL {
            for row in 0..N {
                for col in 0..N {
                    let origin = Coordinate::new(row, col);
                    let end = origin.step(orientation, spec.size - 1);
                    if end.row >= N || end.col >= N {
                        continue;
                    }
                    let cells = (0..spec.size).map(|i| origin.step(orientation, i));

                    let mut hits = 0usize;
                    let mut valid = true;
                    for c in cells.clone() {
                        if blocked[c.row][c.col] {
                            valid = false;
                            break;
                        }
                        if grid.state(c) == Some(CellState::Hit) {
                            hits += 1;
                        }
                    }
                    if !valid {
                        continue;
                    }

                    let weight = mode.weight(hits) * spec.count as u64;
                    for c in cells {
                        if grid.state(c).is_some_and(|s| !s.is_resolved()) {
                            scores[c.row][c.col] += weight;
                        }
                    }
                }
            }
        }
    }

    DensityMap { scores, mode }
}

/// Cells no live ship can cover: misses, sunk cells and their neighbours.
fn blocked_cells<const N: usize>(grid: &Grid<N>) -> [[bool; N]; N] {
    let mut blocked = [[false; N]; N];
    for (coord, cell) in grid.cells() {
        match cell.state {
            CellState::Miss => blocked[coord.row][coord.col] = true,
            CellState::Sunk => {
                blocked[coord.row][coord.col] = true;
                for n in grid.neighbours(coord) {
                    blocked[n.row][n.col] = true;
                }
            }
            _ => {}
        }
    }
    blocked
}

/// Pick the next shot: a uniformly random cell among the top density scores,
/// or any unresolved cell when nothing scored.
pub fn best_move<const N: usize, R: Rng + ?Sized>(
    grid: &Grid<N>,
    remaining: &[ShipSpec],
    rng: &mut R,
) -> Result<Coordinate, GameError> {
    let map = density_map(grid, remaining);
    let best = map.best_cells();
    if !best.is_empty() {
        let pick = best[rng.random_range(0..best.len())];
        log::debug!(
            "{:?}: {} candidates at score {}, chose {}",
            map.mode(),
            best.len(),
            map.max_score(),
            pick
        );
        return Ok(pick);
    }

    let open: Vec<Coordinate> = grid
        .cells()
        .filter(|(_, c)| !c.state.is_resolved())
        .map(|(p, _)| p)
        .collect();
    if open.is_empty() {
        return Err(GameError::NoTargetAvailable);
    }
    log::warn!("no placement scored, falling back to a random open cell");
    Ok(open[rng.random_range(0..open.len())])
}
