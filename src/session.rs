//! Game session: the one owner of the simulation state
//!
//! Wires the pure simulation to its host. Input goes through the identity
//! gate here, frames go through the fixed-step clock, and events coming out
//! of the simulation are turned into store writes and log lines.

use crate::persistence::ScoreStore;
use crate::platform::FrameClock;
use crate::sim::{GameEvent, GamePhase, GameState, Snapshot, TickInput, activate, tick};
use crate::tuning::{Tuning, TuningError};

/// Oldest events are dropped beyond this when the host never collects them
const MAX_PENDING_EVENTS: usize = 512;

/// Controller owning the game state and the injected score store
#[derive(Debug)]
pub struct Session<S: ScoreStore> {
    state: GameState,
    store: S,
    clock: FrameClock,
    /// Events since the host last called `take_events`
    events: Vec<GameEvent>,
    /// Attract mode, the simulation plays itself
    pub idle_mode: bool,
}

impl<S: ScoreStore> Session<S> {
    /// Start an idle session, seeding the best score from the store.
    /// The tuning is validated here so the simulation never sees a bad one.
    pub fn new(seed: u64, tuning: Tuning, store: S) -> Result<Self, TuningError> {
        tuning.validate()?;
        let best = store.best_score();
        log::info!("Session ready (seed {}, best {})", seed, best);
        Ok(Self {
            state: GameState::new(seed, tuning, best),
            store,
            clock: FrameClock::default(),
            events: Vec::new(),
            idle_mode: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn best_score(&self) -> u64 {
        self.state.best_score
    }

    /// Whether an activation would be acted on right now
    pub fn accepts_input(&self) -> bool {
        self.store.has_identity()
    }

    /// Register the player's identity token, opening the input gate
    pub fn set_identity(&mut self, token: &str) {
        if let Err(e) = self.store.set_identity(token) {
            log::warn!("Failed to store identity: {}", e);
        }
    }

    /// The "activate" trigger (space, tap). Applied immediately; ignored
    /// without an identity. Returns whether it was accepted.
    pub fn activate(&mut self) -> bool {
        if !self.accepts_input() {
            log::debug!("Activation ignored: no identity");
            return false;
        }
        activate(&mut self.state);
        self.flush_events();
        true
    }

    /// Run exactly one tick, for hosts that tick once per display frame
    pub fn step(&mut self) {
        // The pilot restarts runs on its own, so it sits behind the same gate
        let input = TickInput {
            activate: false,
            idle_mode: self.idle_mode && self.accepts_input(),
        };
        let dt = self.clock.step();
        tick(&mut self.state, &input, dt);
        self.flush_events();
    }

    /// Feed one display frame; runs however many fixed ticks it covers.
    /// Returns the number of ticks run.
    pub fn frame(&mut self, frame_dt: f32) -> u32 {
        let ticks = self.clock.advance(frame_dt);
        for _ in 0..ticks {
            self.step();
        }
        ticks
    }

    /// Everything that happened since the last call, oldest first
    /// (flaps for hop effects, crash causes, new bests)
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    fn flush_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::NewBest { best } => {
                    // Losing a best score is not worth interrupting play for
                    if let Err(e) = self.store.set_best_score(best) {
                        log::warn!("Failed to save best score {}: {}", best, e);
                    }
                }
                GameEvent::Crashed { cause } => {
                    log::info!("Crashed into {:?} with score {}", cause, self.state.score);
                }
                _ => log::trace!("{:?}", event),
            }
            self.events.push(event);
        }
        if self.events.len() > MAX_PENDING_EVENTS {
            let excess = self.events.len() - MAX_PENDING_EVENTS;
            self.events.drain(..excess);
        }
    }
}
