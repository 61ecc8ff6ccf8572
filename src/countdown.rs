//! Time limit for a single game, counted in one-second ticks.
//!
//! The countdown is driven by the same loop that feeds swipes to the
//! controller, so an expiry can never interleave with a half-played turn.

use log::info;

use crate::game::GameState;

/// Two hours of one-second ticks.
pub const DEFAULT_LIMIT_TICKS: u64 = 7200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Stopped,
}

/// What a single tick observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not counting; nothing happened
    Idle,
    /// Counting, with the elapsed ticks after this one
    Counting(u64),
    /// The limit was reached on this tick; the caller should force a loss
    Expired,
}

#[derive(Debug, Clone)]
pub struct Countdown {
    limit: u64,
    elapsed: u64,
    phase: Phase,
}

impl Countdown {
    pub fn new(limit: u64) -> Self {
        Countdown {
            limit,
            elapsed: 0,
            phase: Phase::Idle,
        }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }

    pub fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.elapsed)
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Back to idle at zero, ready for a new game
    pub fn reset(&mut self) {
        self.elapsed = 0;
        self.phase = Phase::Idle;
    }

    /// React to the controller state after a move.
    ///
    /// The first move of a game that leaves it Running starts the count from
    /// zero; any terminal state stops it.
    pub fn observe(&mut self, state: GameState) {
        match (self.phase, state.is_terminal()) {
            (_, true) => self.phase = Phase::Stopped,
            (Phase::Idle, false) => {
                self.elapsed = 0;
                self.phase = Phase::Running;
            }
            (Phase::Running | Phase::Stopped, false) => {}
        }
    }

    /// Advance by one second
    pub fn tick(&mut self) -> Tick {
        if self.phase != Phase::Running {
            return Tick::Idle;
        }
        self.elapsed += 1;
        if self.elapsed >= self.limit {
            self.phase = Phase::Stopped;
            info!("countdown expired after {} ticks", self.elapsed);
            return Tick::Expired;
        }
        Tick::Counting(self.elapsed)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT_TICKS)
    }
}
