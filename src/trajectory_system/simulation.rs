use log::{debug, info, warn};

use crate::constants::{
    DEFAULT_GROUND_FRICTION, DEFAULT_LAUNCH_ANGLE, DEFAULT_LAUNCH_SPEED, DEFAULT_MAX_BOUNCES,
    DEFAULT_RESTITUTION, DEFAULT_TIME_STEP, GRAVITY, MAX_SIMULATION_TIME,
};
use crate::errors::ConfigError;
use crate::telemetry_system::telemetry::{Telemetry, TrajectoryPoint};

use super::collision::GroundCollision;
use super::forces::ForceModel;
use super::kinematics::State;
use super::termination::{Termination, TerminationPolicy};

/// Launch parameters and environment for one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub v0: f64,
    /// Launch angle in degrees above the horizontal.
    pub angle: f64,
    pub h0: f64,
    pub g: f64,
    pub drag_coeff: f64,
    pub include_drag: bool,
    pub dt: f64,
    pub restitution: f64,
    pub ground_friction: f64,
    pub max_bounces: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            v0: DEFAULT_LAUNCH_SPEED,
            angle: DEFAULT_LAUNCH_ANGLE,
            h0: 0.0,
            g: GRAVITY,
            drag_coeff: 0.0,
            include_drag: true,
            dt: DEFAULT_TIME_STEP,
            restitution: DEFAULT_RESTITUTION,
            ground_friction: DEFAULT_GROUND_FRICTION,
            max_bounces: DEFAULT_MAX_BOUNCES,
        }
    }
}

impl SimulationConfig {
    pub fn new(v0: f64, angle: f64, h0: f64, g: f64) -> Self {
        SimulationConfig {
            v0,
            angle,
            h0,
            g,
            ..Self::default()
        }
    }

    pub fn with_drag(mut self, drag_coeff: f64, include_drag: bool) -> Self {
        self.drag_coeff = drag_coeff;
        self.include_drag = include_drag;
        self
    }

    pub fn with_time_step(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_bounce(mut self, restitution: f64, ground_friction: f64) -> Self {
        self.restitution = restitution;
        self.ground_friction = ground_friction;
        self
    }

    pub fn with_max_bounces(mut self, max_bounces: u32) -> Self {
        self.max_bounces = max_bounces;
        self
    }

    /// Same launch with the medium switched off, for side-by-side comparison.
    pub fn without_drag(&self) -> Self {
        self.with_drag(0.0, false)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("v0", self.v0),
            ("angle", self.angle),
            ("h0", self.h0),
            ("g", self.g),
            ("drag coefficient", self.drag_coeff),
            ("dt", self.dt),
            ("restitution", self.restitution),
            ("ground friction", self.ground_friction),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name });
            }
        }

        if self.dt <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep(self.dt));
        }
        if self.max_bounces == 0 {
            return Err(ConfigError::ZeroMaxBounces);
        }

        for (name, value) in [
            ("v0", self.v0),
            ("h0", self.h0),
            ("g", self.g),
            ("drag coefficient", self.drag_coeff),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        for (name, value) in [
            ("restitution", self.restitution),
            ("ground friction", self.ground_friction),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { name, value });
            }
        }

        Ok(())
    }

    fn force_model(&self) -> ForceModel {
        ForceModel::new(self.g, self.drag_coeff, self.include_drag)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub trajectory: Vec<TrajectoryPoint>,
    pub elapsed: f64,
    pub telemetry: Telemetry,
    pub termination: Termination,
    pub bounces: u32,
}

impl SimulationResult {
    /// `(trajectory, total elapsed time, telemetry)`.
    pub fn into_parts(self) -> (Vec<TrajectoryPoint>, f64, Telemetry) {
        (self.trajectory, self.elapsed, self.telemetry)
    }
}

/// Runs a single projectile flight to termination.
///
/// The run is deterministic for a given config. Every accepted step appends
/// one trajectory point and one telemetry row, starting with the launch state;
/// a ground crossing is recorded at its backtracked contact point.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationResult, ConfigError> {
    config.validate()?;

    let forces = config.force_model();
    let collision = GroundCollision::new(config.restitution, config.ground_friction);
    let mut policy = TerminationPolicy::new(config.max_bounces);

    let mut state = State::launch(config.v0, config.angle, config.h0, &forces);
    let mut telemetry = Telemetry::new();
    let mut trajectory = Vec::new();

    record(&state, &mut trajectory, &mut telemetry);

    let termination = match policy.check_initial(&state) {
        Some(termination) => termination,
        None => loop {
            let previous = state;
            state.step(config.dt, &forces);

            if let Some(impact) = collision.resolve(&previous, &mut state, config.dt) {
                telemetry.record_impact(impact.position.x, impact.time);
                policy.record_crossing();
                debug!(
                    "Bounce {} at x = {:.3} m, t = {:.3} s",
                    policy.bounces, impact.position.x, impact.time
                );
            }

            record(&state, &mut trajectory, &mut telemetry);

            if let Some(termination) = policy.check(&state) {
                break termination;
            }
        },
    };

    match termination {
        Termination::TimedOut => warn!(
            "Simulation hit the {:.0} s time ceiling after {} bounces",
            MAX_SIMULATION_TIME, policy.bounces
        ),
        _ => info!(
            "Simulation finished ({}) at t = {:.3} s after {} bounces",
            termination, state.time, policy.bounces
        ),
    }

    Ok(SimulationResult {
        trajectory,
        elapsed: state.time,
        telemetry,
        termination,
        bounces: policy.bounces,
    })
}

fn record(state: &State, trajectory: &mut Vec<TrajectoryPoint>, telemetry: &mut Telemetry) {
    telemetry.collect_data(state);
    trajectory.push(TrajectoryPoint {
        x: state.position.x,
        y: state.position.y,
    });
}
