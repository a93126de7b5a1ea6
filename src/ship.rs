//! Ship definitions, the damage lifecycle and the per-side fleet registry.

use alloc::vec::Vec;
use core::fmt;

use crate::board::Coordinate;
use crate::config::ShipSpec;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along the columns of its origin row.
    Horizontal,
    /// Extends along the rows of its origin column.
    Vertical,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// The five ship classes of the fleet manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of a placed ship, unique within its fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub u32);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Damage state of a ship. Moves forward only: `Intact`, `Damaged`, `Sunk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    Intact,
    Damaged { hits: usize },
    Sunk,
}

/// Cells covered by a ship of `size` at `origin`, in order. `None` if any of
/// them would leave an `n`×`n` board.
pub fn footprint(
    origin: Coordinate,
    size: usize,
    orientation: Orientation,
    n: usize,
) -> Option<Vec<Coordinate>> {
    let (end_row, end_col) = match orientation {
        Orientation::Horizontal => (origin.row, origin.col + size.checked_sub(1)?),
        Orientation::Vertical => (origin.row + size.checked_sub(1)?, origin.col),
    };
    if end_row >= n || end_col >= n {
        return None;
    }
    Some((0..size).map(|i| origin.step(orientation, i)).collect())
}

/// A ship placed on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    id: ShipId,
    kind: ShipKind,
    orientation: Orientation,
    coordinates: Vec<Coordinate>,
    condition: Condition,
}

impl Ship {
    pub(crate) fn new(
        id: ShipId,
        kind: ShipKind,
        orientation: Orientation,
        coordinates: Vec<Coordinate>,
    ) -> Self {
        Self {
            id,
            kind,
            orientation,
            coordinates,
            condition: Condition::Intact,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells, starting at the origin.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// First cell of the ship; `None` for a ship with no cells.
    pub fn origin(&self) -> Option<Coordinate> {
        self.coordinates.first().copied()
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn hits(&self) -> usize {
        match self.condition {
            Condition::Intact => 0,
            Condition::Damaged { hits } => hits,
            Condition::Sunk => self.len(),
        }
    }

    pub fn is_sunk(&self) -> bool {
        self.condition == Condition::Sunk
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.coordinates.contains(&coord)
    }

    /// Count one more hit and return the new condition. A sunk ship stays sunk.
    pub fn register_hit(&mut self) -> Condition {
        let hits = match self.condition {
            Condition::Sunk => return Condition::Sunk,
            _ => self.hits() + 1,
        };
        self.condition = if hits >= self.len() {
            Condition::Sunk
        } else {
            Condition::Damaged { hits }
        };
        self.condition
    }

    /// Manifest entry describing a ship of this kind and length.
    pub fn spec(&self) -> ShipSpec {
        ShipSpec::new(self.kind, self.len())
    }
}

/// Registry of the ships placed on one side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    pub fn push(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.ships.iter().find(|s| s.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.id == id)
    }

    /// Id for the next ship added to this fleet.
    pub fn next_id(&self) -> ShipId {
        ShipId(self.ships.iter().map(|s| s.id.0 + 1).max().unwrap_or(0))
    }

    /// Number of ships of `kind` in the fleet.
    pub fn count_of(&self, kind: ShipKind) -> usize {
        self.ships.iter().filter(|s| s.kind == kind).count()
    }

    pub fn sunk_count(&self) -> usize {
        self.ships.iter().filter(|s| s.is_sunk()).count()
    }

    /// `true` when the fleet has ships and every one of them is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    /// One manifest entry per ship still afloat.
    pub fn afloat_specs(&self) -> Vec<ShipSpec> {
        self.ships
            .iter()
            .filter(|s| !s.is_sunk())
            .map(Ship::spec)
            .collect()
    }
}
