//! Drives two [`Player`]s through a full game on a [`GameEngine`].

use rand::rngs::SmallRng;

use crate::{
    board::Coordinate,
    common::{GameError, ShotOutcome},
    config::FleetConfig,
    game::{BoardStats, GameEngine, Turn},
    player::Player,
};

/// A resolved (non-duplicate) shot, reported to the match observer.
#[derive(Debug, Clone)]
pub struct ShotEvent {
    pub shooter: Turn,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SideReport {
    pub shots: usize,
    pub stats: BoardStats,
}

/// Summary of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport {
    pub winner: Turn,
    pub player: SideReport,
    pub opponent: SideReport,
}

/// Play `player` against `opponent` until one fleet is sunk.
///
/// Both sides place their fleets, then shoot in turn; a hit earns another
/// shot. `on_shot` sees every resolved shot. A player that keeps choosing
/// resolved cells is stopped after `N * N` duplicates in a row.
pub fn play_match<'p, const N: usize>(
    config: &FleetConfig,
    player: &'p mut dyn Player<N>,
    opponent: &'p mut dyn Player<N>,
    first: Turn,
    rng: &mut SmallRng,
    mut on_shot: impl FnMut(&ShotEvent),
) -> Result<MatchReport, GameError> {
    let mut engine = GameEngine::<N>::new(config.clone());
    let (grid, fleet) = player.place_fleet(rng, config)?;
    engine.set_fleet(Turn::Player, grid, fleet)?;
    let (grid, fleet) = opponent.place_fleet(rng, config)?;
    engine.set_fleet(Turn::Opponent, grid, fleet)?;
    engine.start(first)?;

    let mut duplicates = 0usize;
    while engine.winner().is_none() {
        let shooter = engine.turn();
        let (current, other) = match shooter {
            Turn::Player => (&mut *player, &mut *opponent),
            Turn::Opponent => (&mut *opponent, &mut *player),
        };

        let view = engine.target_view(shooter);
        let remaining = engine.enemy_remaining(shooter);
        let target = current.select_target(rng, &view, &remaining)?;
        let outcome = engine.fire(target)?;
        current.handle_shot_result(target, &outcome);

        if outcome.is_duplicate() {
            duplicates += 1;
            if duplicates >= N * N {
                return Err(GameError::NoTargetAvailable);
            }
            continue;
        }
        duplicates = 0;
        other.handle_opponent_shot(target, &outcome, engine.grid(shooter.other()));
        on_shot(&ShotEvent {
            shooter,
            target,
            outcome,
        });
    }

    let winner = engine.winner().ok_or(GameError::WrongPhase)?;
    let side = |t: Turn| SideReport {
        shots: engine.shots_fired(t),
        stats: engine.stats(t),
    };
    log::info!(
        "match over: {:?} won after {} shots",
        winner,
        engine.shots_fired(winner)
    );
    Ok(MatchReport {
        winner,
        player: side(Turn::Player),
        opponent: side(Turn::Opponent),
    })
}
