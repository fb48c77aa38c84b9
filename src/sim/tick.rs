//! Fixed timestep simulation tick
//!
//! Advances the game state and handles the single "activate" trigger.

use super::collision::detect_crash;
use super::physics::{apply_gravity, apply_impulse};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap / start / restart (space, tap). Already past the identity gate.
    pub activate: bool,
    /// Attract mode - the simulation flaps for itself
    pub idle_mode: bool,
}

/// Handle one activation trigger.
///
/// - Idle: flap and start running
/// - Running: flap
/// - GameOver: reset the run, then behave as from Idle
pub fn activate(state: &mut GameState) {
    match state.phase {
        GamePhase::Idle => start_run(state, GameEvent::Started),
        GamePhase::Running => flap(state),
        GamePhase::GameOver => {
            state.reset_run();
            start_run(state, GameEvent::Restarted);
        }
    }
}

fn start_run(state: &mut GameState, event: GameEvent) {
    state.phase = GamePhase::Running;
    state.spawn_cursor = state.tuning.spawn_line();
    state.events.push(event);
    log::info!("Run started (best {})", state.best_score);
    flap(state);
}

fn flap(state: &mut GameState) {
    apply_impulse(&mut state.player, state.tuning.flap_impulse);
    state.events.push(GameEvent::Flapped);
}

/// Advance the game state by one timestep of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // A real press always counts, even with the pilot engaged
    if input.activate || (input.idle_mode && autopilot_wants_flap(state)) {
        activate(state);
    }

    // Idle and GameOver are frozen
    if !state.is_running() {
        return;
    }

    state.time_ticks += 1;
    let tuning = &state.tuning;

    apply_gravity(&mut state.player, tuning.gravity, dt);

    // The cursor rides one interval behind the newest obstacle, so it reaches
    // the spawn line exactly when that obstacle has travelled a full interval.
    // New obstacles are placed off the newest one rather than the scrolled
    // cursor so the spacing carries no rounding of its own.
    if state.obstacles.is_empty() || state.spawn_cursor <= tuning.spawn_line() {
        let cursor_x = state
            .obstacles
            .last()
            .map_or(state.spawn_cursor, |newest| newest.x + tuning.spawn_interval);
        let id = state.next_entity_id();
        let tuning = &state.tuning;
        let obstacle = state.generator.spawn_next(id, cursor_x, tuning);
        log::debug!("Spawned obstacle {} at x={:.1} gap_y={:.1}", id, obstacle.x, obstacle.gap_y);
        state.events.push(GameEvent::ObstacleSpawned {
            id,
            x: obstacle.x,
            gap_y: obstacle.gap_y,
        });
        state.obstacles.push(obstacle);
        state.spawn_cursor = cursor_x + tuning.spawn_interval;
    }

    let tuning = &state.tuning;
    let scroll = tuning.scroll_speed * dt;
    for obstacle in &mut state.obstacles {
        obstacle.x -= scroll;
    }
    state.spawn_cursor -= scroll;

    // Score each obstacle once its trailing edge clears the player's leading edge
    let player_x = state.player.pos.x;
    for obstacle in &mut state.obstacles {
        if !obstacle.passed && obstacle.x + tuning.obstacle_width < player_x {
            obstacle.passed = true;
            state.score += 1;
            state.events.push(GameEvent::Scored { score: state.score });
            log::debug!("Passed obstacle {}, score {}", obstacle.id, state.score);
            if state.score > state.best_score {
                state.best_score = state.score;
                state.events.push(GameEvent::NewBest {
                    best: state.best_score,
                });
            }
        }
    }

    if let Some(cause) = detect_crash(&state.player, &state.obstacles, tuning) {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::Crashed { cause });
        log::info!("Game over ({:?}), score {} best {}", cause, state.score, state.best_score);
    }

    // Off-screen columns can no longer score or collide
    let width = tuning.obstacle_width;
    state.obstacles.retain(|o| o.x + width >= 0.0);
}

/// Attract-mode pilot: start whenever stopped, otherwise flap when falling
/// below the centre of the next gap
fn autopilot_wants_flap(state: &GameState) -> bool {
    if !state.is_running() {
        return true;
    }

    let tuning = &state.tuning;
    let player = &state.player;
    let target = state
        .obstacles
        .iter()
        .find(|o| o.x + tuning.obstacle_width >= player.pos.x)
        .map(|o| o.gap_y + tuning.gap_height / 2.0)
        .unwrap_or(tuning.playfield_height / 2.0);

    let center = player.pos.y + player.size.y / 2.0;
    player.vy >= 0.0 && center > target + tuning.gap_height / 8.0
}
