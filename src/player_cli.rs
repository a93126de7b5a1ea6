#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    ai::{self, DensityMap},
    board::{CellState, Coordinate, Grid},
    common::{GameError, ShotOutcome},
    config::{FleetConfig, ShipSpec, BOARD_SIZE, COL_LABELS, ROW_LABELS},
    placement,
    ship::{Fleet, Orientation},
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Human player reading commands from stdin.
#[derive(Debug, Default)]
pub struct CliPlayer {
    auto_place: bool,
    show_density: bool,
    own: Grid,
}

impl CliPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the placement prompts and place the whole fleet at random.
    pub fn with_auto_place(mut self, auto_place: bool) -> Self {
        self.auto_place = auto_place;
        self
    }

    /// Print the targeting density next to the board before each shot.
    pub fn with_density(mut self, show_density: bool) -> Self {
        self.show_density = show_density;
        self
    }
}

fn read_line() -> Result<String, GameError> {
    io::stdout().flush().map_err(|_| GameError::InputClosed)?;
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => Err(GameError::InputClosed),
        Ok(_) => Ok(line.trim().to_string()),
    }
}

/// Parse a placement command such as `A0 H` or `c4 v`. Orientation defaults
/// to horizontal.
pub fn parse_placement(input: &str) -> Result<(Coordinate, Orientation), String> {
    let mut parts = input.split_whitespace();
    let coord = parts
        .next()
        .ok_or_else(|| "Please enter a coordinate (e.g., A0 H)".to_string())?;
    let origin: Coordinate = coord
        .parse()
        .map_err(|_| format!("Invalid coordinate '{}' - use a row A-J and a column 0-9", coord))?;
    let orientation = match parts.next().map(|s| s.to_ascii_uppercase()) {
        None => Orientation::Horizontal,
        Some(o) if o == "H" => Orientation::Horizontal,
        Some(o) if o == "V" => Orientation::Vertical,
        Some(o) => return Err(format!("Invalid orientation '{}' - use H or V", o)),
    };
    Ok((origin, orientation))
}

/// Print a board. With `reveal` unset, ships and their halos are hidden.
pub fn print_grid(grid: &Grid, reveal: bool) {
    print!("     ");
    for c in COL_LABELS.iter() {
        print!(" {}", c);
    }
    println!();
    for (r, label) in ROW_LABELS.iter().enumerate() {
        print!("   {} ", label);
        for c in 0..BOARD_SIZE {
            let state = grid
                .state(Coordinate::new(r, c))
                .unwrap_or(CellState::Empty);
            let ch = match state {
                CellState::Ship | CellState::Restricted if !reveal => CellState::Empty.symbol(),
                s => s.symbol(),
            };
            print!(" {}", ch);
        }
        println!();
    }
    if reveal {
        println!("   Legend: S=Ship  -=Halo  X=Hit  #=Sunk  o=Miss  .=Water");
    } else {
        println!("   Legend: X=Hit  #=Sunk  o=Miss  .=Unknown");
    }
}

/// Print the normalized targeting density.
pub fn print_probability_board(map: &DensityMap) {
    let pdf = map.normalized();
    println!("\nTargeting density ({:?} mode):", map.mode());
    print!("   ");
    for c in COL_LABELS.iter() {
        print!(" {:>4}", c);
    }
    println!();
    for (r, label) in ROW_LABELS.iter().enumerate() {
        print!(" {} ", label);
        for value in pdf[r].iter() {
            print!(" {:4.2}", value);
        }
        println!();
    }
}

impl Player for CliPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        config: &FleetConfig,
    ) -> Result<(Grid, Fleet), GameError> {
        if self.auto_place {
            let (grid, fleet) = placement::generate_fleet(config, rng)?;
            self.own = grid;
            println!("Fleet placed at random:");
            print_grid(&grid, true);
            return Ok((grid, fleet));
        }

        println!("\n==================== SHIP PLACEMENT ====================");
        println!("  Enter an origin and orientation, e.g. A0 H or C4 V.");
        println!("  Ships may not touch, not even diagonally.");
        println!("  ENTER places the current ship at random, 'reset' starts over.\n");

        'restart: loop {
            let mut grid: Grid = Grid::new();
            let mut fleet = Fleet::new();
            let total = config.ship_count();
            for (i, spec) in config.expanded().enumerate() {
                loop {
                    print_grid(&grid, true);
                    print!(
                        "\nShip {}/{}: {} (length {}) > ",
                        i + 1,
                        total,
                        spec.kind,
                        spec.size
                    );
                    let line = read_line()?;

                    if line.eq_ignore_ascii_case("reset") {
                        println!("Board cleared.");
                        continue 'restart;
                    }
                    let placed = if line.is_empty() {
                        placement::random_placement(&grid, spec.size, config.placement_attempts(), rng)
                            .ok_or_else(|| "No room left for this ship - try 'reset'".to_string())
                    } else {
                        parse_placement(&line).and_then(|(origin, orientation)| {
                            if grid.is_valid_placement(origin, spec.size, orientation) {
                                Ok((origin, orientation))
                            } else {
                                Err("Cannot place ship there. Check bounds and 1-cell spacing rule.".to_string())
                            }
                        })
                    };
                    match placed {
                        Ok((origin, orientation)) => {
                            let (next, ship) =
                                grid.place_ship(&fleet, spec.kind, origin, spec.size, orientation);
                            grid = next;
                            fleet.push(ship);
                            println!("Placed {} at {}", spec.kind, origin);
                            break;
                        }
                        Err(e) => println!("Error: {}", e),
                    }
                }
            }
            self.own = grid;
            println!("\nAll ships placed. Ready for battle.\n");
            return Ok((grid, fleet));
        }
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &Grid,
        remaining: &[ShipSpec],
    ) -> Result<Coordinate, GameError> {
        println!("\n======================= YOUR TURN =======================");
        println!("Enemy waters:");
        print_grid(view, false);
        println!("\nYour fleet:");
        print_grid(&self.own, true);
        if self.show_density {
            print_probability_board(&ai::density_map(view, remaining));
        }

        let suggestion = ai::best_move(view, remaining, rng)?;
        loop {
            print!("\nTarget [ENTER for {}] > ", suggestion);
            let line = read_line()?;
            if line.is_empty() {
                return Ok(suggestion);
            }
            match line.parse::<Coordinate>() {
                Ok(target) if view.state(target).is_some_and(CellState::is_resolved) => {
                    println!("You already shot there!");
                }
                Ok(target) => return Ok(target),
                Err(_) => println!("Invalid coordinate '{}' - e.g. A0, E5, J9", line),
            }
        }
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: &ShotOutcome) {
        if outcome.is_duplicate() {
            println!("You already shot at {}!", target);
        } else if let Some(ship) = &outcome.sunk {
            println!("You shot at {}: HIT! You SUNK the enemy {}!", target, ship.kind());
            if outcome.all_sunk {
                println!("CONGRATULATIONS! You destroyed all enemy ships.");
            }
        } else if outcome.is_hit() {
            println!("You shot at {}: HIT! Take another shot.", target);
        } else {
            println!("You shot at {}: MISS.", target);
        }
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: &ShotOutcome, own: &Grid) {
        self.own = *own;
        if let Some(ship) = &outcome.sunk {
            println!("Opponent shot at {}: HIT! Your {} has been sunk!", target, ship.kind());
            if outcome.all_sunk {
                println!("GAME OVER. All your ships are destroyed.");
            }
        } else if outcome.is_hit() {
            println!("Opponent shot at {}: HIT!", target);
        } else {
            println!("Opponent shot at {}: MISS.", target);
        }
    }
}
