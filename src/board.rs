//! Grid model: coordinates, cell states, the placement validator and ship
//! placement with its restricted halo.

use core::fmt;
use core::ops::RangeInclusive;
use core::str::FromStr;

use crate::common::GameError;
use crate::config::{BOARD_SIZE, COL_LABELS, ROW_LABELS};
use crate::ship::{footprint, Fleet, Orientation, Ship, ShipId, ShipKind};

/// A zero-based board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell `distance` steps away along `orientation`.
    pub fn step(self, orientation: Orientation, distance: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.row, self.col + distance),
            Orientation::Vertical => Self::new(self.row + distance, self.col),
        }
    }

    /// Largest of the row and column distances to `other`.
    pub fn chebyshev(self, other: Coordinate) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (ROW_LABELS.get(self.row), COL_LABELS.get(self.col)) {
            (Some(r), Some(c)) => write!(f, "{}{}", r, c),
            _ => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

impl FromStr for Coordinate {
    type Err = GameError;

    /// Parses board notation such as `A0` or `j9`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let row_ch = chars
            .next()
            .ok_or(GameError::InvalidCoordinate)?
            .to_ascii_uppercase();
        let row = ROW_LABELS
            .iter()
            .position(|&l| l == row_ch)
            .ok_or(GameError::InvalidCoordinate)?;
        let col: usize = chars
            .as_str()
            .parse()
            .map_err(|_| GameError::InvalidCoordinate)?;
        if col >= COL_LABELS.len() {
            return Err(GameError::InvalidCoordinate);
        }
        Ok(Coordinate::new(row, col))
    }
}

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
    Sunk,
    /// Halo around a placed ship; empty water no other ship may use.
    Restricted,
}

impl CellState {
    /// Free for placement purposes.
    pub fn is_vacant(self) -> bool {
        matches!(self, CellState::Empty | CellState::Restricted)
    }

    /// Already shot at; shooting again is a duplicate.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss | CellState::Sunk)
    }

    /// Single-character symbol used by text renderings.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Ship => 'S',
            CellState::Hit => 'X',
            CellState::Miss => 'o',
            CellState::Sunk => '#',
            CellState::Restricted => '-',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub state: CellState,
    pub ship: Option<ShipId>,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        state: CellState::Empty,
        ship: None,
    };
}

/// An `N`×`N` matrix of cells, one per side.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid<const N: usize = BOARD_SIZE> {
    cells: [[Cell; N]; N],
}

/// A standard 10×10 grid with every cell empty.
pub fn create_empty_grid() -> Grid {
    Grid::new()
}

impl<const N: usize> Grid<N> {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::EMPTY; N]; N],
        }
    }

    pub const fn size(&self) -> usize {
        N
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < N && coord.col < N
    }

    pub fn get(&self, coord: Coordinate) -> Option<&Cell> {
        self.cells.get(coord.row)?.get(coord.col)
    }

    /// State at `coord`; `None` off the board.
    pub fn state(&self, coord: Coordinate) -> Option<CellState> {
        self.get(coord).map(|c| c.state)
    }

    pub(crate) fn cell_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        self.cells.get_mut(coord.row)?.get_mut(coord.col)
    }

    /// Every cell with its position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, &Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (Coordinate::new(r, c), cell))
        })
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells().filter(|(_, c)| c.state == state).count()
    }

    /// The up to eight cells touching `coord`, diagonals included.
    pub fn neighbours(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> {
        let rows = coord.row.saturating_sub(1)..=(coord.row + 1).min(N - 1);
        rows.flat_map(move |r| {
            let cols = coord.col.saturating_sub(1)..=(coord.col + 1).min(N - 1);
            cols.map(move |c| Coordinate::new(r, c))
        })
        .filter(move |&c| c != coord)
    }

    /// `true` if a ship of `size` fits at `origin` and nothing but empty or
    /// restricted water lies within one cell of it.
    pub fn is_valid_placement(&self, origin: Coordinate, size: usize, orientation: Orientation) -> bool {
        if footprint(origin, size, orientation, N).is_none() {
            return false;
        }
        let (rows, cols) = halo_box::<N>(origin, size, orientation);
        rows.into_iter()
            .all(|r| cols.clone().all(|c| self.cells[r][c].state.is_vacant()))
    }

    /// Place a ship without re-validating, returning the new grid and ship.
    ///
    /// The caller must have checked [`Grid::is_valid_placement`]; the halo box
    /// turns `Restricted` and the footprint turns `Ship`. The new ship gets the
    /// next free id of `fleet`, which the caller is expected to push it onto.
    ///
    /// # Panics
    /// If the footprint leaves the board.
    pub fn place_ship(
        &self,
        fleet: &Fleet,
        kind: ShipKind,
        origin: Coordinate,
        size: usize,
        orientation: Orientation,
    ) -> (Self, Ship) {
        debug_assert!(self.is_valid_placement(origin, size, orientation));
        let mut grid = *self;
        let id = fleet.next_id();

        let (rows, cols) = halo_box::<N>(origin, size, orientation);
        for r in rows {
            for c in cols.clone() {
                let cell = &mut grid.cells[r][c];
                if cell.state == CellState::Empty {
                    cell.state = CellState::Restricted;
                }
            }
        }

        let coords: alloc::vec::Vec<Coordinate> =
            (0..size).map(|i| origin.step(orientation, i)).collect();
        for &c in &coords {
            grid.cells[c.row][c.col] = Cell {
                state: CellState::Ship,
                ship: Some(id),
            };
        }

        log::trace!("placed {} {} at {} {:?}", kind, id, origin, orientation);
        (grid, Ship::new(id, kind, orientation, coords))
    }

    /// What the shooter sees of this grid: unresolved cells read as empty
    /// water and ship ids are dropped.
    pub fn fogged(&self) -> Self {
        let mut view = Self::new();
        for (coord, cell) in self.cells() {
            if cell.state.is_resolved() {
                view.cells[coord.row][coord.col].state = cell.state;
            }
        }
        view
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                write!(f, "{}", cell.state.symbol())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

/// Rows and columns of the footprint grown by one cell each way, clipped to
/// the board.
fn halo_box<const N: usize>(
    origin: Coordinate,
    size: usize,
    orientation: Orientation,
) -> (RangeInclusive<usize>, RangeInclusive<usize>) {
    let (row_end, col_end) = match orientation {
        Orientation::Horizontal => (origin.row + 1, origin.col + size),
        Orientation::Vertical => (origin.row + size, origin.col + 1),
    };
    (
        origin.row.saturating_sub(1)..=row_end.min(N - 1),
        origin.col.saturating_sub(1)..=col_end.min(N - 1),
    )
}
