use std::fmt;

use crate::constants::{MAX_SIMULATION_TIME, REST_SPEED_THRESHOLD};

use super::kinematics::State;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum FlightPhase {
    Flying,
    GroundCrossing,
    Stopped(Termination),
}

/// Why a run stopped.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Termination {
    Resting,
    BounceLimitReached,
    /// Safety ceiling on simulated time; not a physical outcome.
    TimedOut,
}

impl Termination {
    pub fn is_physical(&self) -> bool {
        !matches!(self, Termination::TimedOut)
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Termination::Resting => "resting",
            Termination::BounceLimitReached => "bounce limit reached",
            Termination::TimedOut => "timed out",
        };
        f.write_str(label)
    }
}

/// Decides after every accepted step whether the run continues.
#[derive(Debug, Clone)]
pub struct TerminationPolicy {
    pub max_bounces: u32,
    pub bounces: u32,
    pub phase: FlightPhase,
    time_limit: f64,
}

impl TerminationPolicy {
    pub fn new(max_bounces: u32) -> Self {
        Self::with_time_limit(max_bounces, MAX_SIMULATION_TIME)
    }

    pub fn with_time_limit(max_bounces: u32, time_limit: f64) -> Self {
        TerminationPolicy {
            max_bounces,
            bounces: 0,
            phase: FlightPhase::Flying,
            time_limit,
        }
    }

    pub fn record_crossing(&mut self) {
        self.bounces += 1;
        self.phase = FlightPhase::GroundCrossing;
    }

    /// Checked against the launch row before any stepping.
    pub fn check_initial(&mut self, state: &State) -> Option<Termination> {
        if Self::is_settled(state) {
            return self.stop(Termination::Resting);
        }
        None
    }

    /// Checked after each recorded step, in priority order.
    pub fn check(&mut self, state: &State) -> Option<Termination> {
        if self.phase == FlightPhase::GroundCrossing {
            if self.bounces >= self.max_bounces {
                return self.stop(Termination::BounceLimitReached);
            }
            if state.is_slower_than(REST_SPEED_THRESHOLD) {
                return self.stop(Termination::Resting);
            }
            self.phase = FlightPhase::Flying;
        }

        if Self::is_settled(state) {
            return self.stop(Termination::Resting);
        }

        if state.time > self.time_limit {
            return self.stop(Termination::TimedOut);
        }

        None
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self.phase, FlightPhase::Stopped(_))
    }

    fn is_settled(state: &State) -> bool {
        state.is_on_ground() && state.is_slower_than(REST_SPEED_THRESHOLD)
    }

    fn stop(&mut self, termination: Termination) -> Option<Termination> {
        self.phase = FlightPhase::Stopped(termination);
        Some(termination)
    }
}
