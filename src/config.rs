use alloc::vec::Vec;

use crate::ship::ShipKind;

pub const BOARD_SIZE: usize = 10;
pub const ROW_LABELS: [char; BOARD_SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];
pub const COL_LABELS: [char; BOARD_SIZE] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new(ShipKind::Carrier, 5),
    ShipSpec::new(ShipKind::Battleship, 4),
    ShipSpec::new(ShipKind::Cruiser, 3),
    ShipSpec::new(ShipKind::Submarine, 3),
    ShipSpec::new(ShipKind::Destroyer, 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Random samples tried per ship before the fleet generator starts over.
pub const PLACEMENT_ATTEMPTS: usize = 1000;
/// Full restarts the fleet generator may make before giving up.
pub const MAX_FLEET_RESTARTS: usize = 64;

/// Weight of a placement that covers no unresolved hit, and of every
/// placement while searching.
pub const BASE_WEIGHT: u64 = 1;
/// Hunt-mode weight of a placement covering at least one unresolved hit.
pub const HUNT_WEIGHT: u64 = 1000;
/// Extra hunt-mode weight per unresolved hit covered.
pub const HUNT_WEIGHT_PER_HIT: u64 = 100;

/// One manifest entry: a ship kind, its length and how many of it a fleet has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipSpec {
    pub kind: ShipKind,
    pub size: usize,
    pub count: usize,
}

impl ShipSpec {
    pub const fn new(kind: ShipKind, size: usize) -> Self {
        Self {
            kind,
            size,
            count: 1,
        }
    }

    pub const fn with_count(self, count: usize) -> Self {
        Self { count, ..self }
    }
}

/// The fleet manifest plus the limits the random generator works within.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetConfig {
    ships: Vec<ShipSpec>,
    placement_attempts: usize,
    max_restarts: usize,
}

impl FleetConfig {
    /// Manifest with custom ships and the default generator limits.
    pub fn new(ships: Vec<ShipSpec>) -> Self {
        Self {
            ships,
            placement_attempts: PLACEMENT_ATTEMPTS,
            max_restarts: MAX_FLEET_RESTARTS,
        }
    }

    /// The five-ship manifest: Carrier, Battleship, Cruiser, Submarine, Destroyer.
    pub fn standard() -> Self {
        Self::new(SHIPS.to_vec())
    }

    pub fn with_placement_attempts(mut self, attempts: usize) -> Self {
        self.placement_attempts = attempts;
        self
    }

    pub fn with_max_restarts(mut self, restarts: usize) -> Self {
        self.max_restarts = restarts;
        self
    }

    pub fn ships(&self) -> &[ShipSpec] {
        &self.ships
    }

    pub fn placement_attempts(&self) -> usize {
        self.placement_attempts
    }

    pub fn max_restarts(&self) -> usize {
        self.max_restarts
    }

    /// Manifest entry for `kind`, if the fleet has one.
    pub fn spec(&self, kind: ShipKind) -> Option<ShipSpec> {
        self.ships.iter().copied().find(|s| s.kind == kind)
    }

    /// Number of ships in a complete fleet.
    pub fn ship_count(&self) -> usize {
        self.ships.iter().map(|s| s.count).sum()
    }

    /// Number of cells a complete fleet occupies.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(|s| s.size * s.count).sum()
    }

    /// Each ship of the manifest once, in placement order.
    pub fn expanded(&self) -> impl Iterator<Item = ShipSpec> + '_ {
        self.ships
            .iter()
            .flat_map(|s| core::iter::repeat(ShipSpec { count: 1, ..*s }).take(s.count))
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self::standard()
    }
}
