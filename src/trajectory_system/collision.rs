use crate::utils::vector2d::Vector2D;

use super::kinematics::State;

/// Inelastic bounce off the flat ground at `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundCollision {
    pub restitution: f64,
    pub ground_friction: f64,
}

/// Where and when a step crossed the ground, after backtracking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub position: Vector2D,
    pub time: f64,
    pub alpha: f64,
}

impl GroundCollision {
    pub fn new(restitution: f64, ground_friction: f64) -> Self {
        GroundCollision {
            restitution,
            ground_friction,
        }
    }

    /// Falling through the floor: below ground and still moving down.
    pub fn is_crossing(state: &State) -> bool {
        state.position.y < 0.0 && state.velocity.y < 0.0
    }

    /// Fraction of the step at which the straight line from `y_prev` to
    /// `y_new` meets the ground. A flat step resolves to the pre-step point.
    pub fn crossing_fraction(y_prev: f64, y_new: f64) -> f64 {
        let denom = y_prev - y_new;
        if denom != 0.0 {
            y_prev / denom
        } else {
            0.0
        }
    }

    /// Backtracks `state` to the ground crossing between `previous` and the
    /// post-step `state`, then applies the bounce response. Returns `None`
    /// (leaving `state` untouched) if the step did not cross the ground.
    ///
    /// Acceleration is not re-evaluated here, so the recorded row carries the
    /// pre-bounce value.
    pub fn resolve(&self, previous: &State, state: &mut State, delta_time: f64) -> Option<Impact> {
        if !Self::is_crossing(state) {
            return None;
        }

        let alpha = Self::crossing_fraction(previous.position.y, state.position.y);

        let crossing = previous.position.lerp(&state.position, alpha);
        state.position = Vector2D::new(crossing.x, 0.0);
        state.time = previous.time + alpha * delta_time;

        state.velocity = self.bounce(state.velocity);

        Some(Impact {
            position: state.position,
            time: state.time,
            alpha,
        })
    }

    /// Post-bounce velocity: vertical reflected and scaled by restitution,
    /// horizontal reduced by ground friction.
    pub fn bounce(&self, velocity: Vector2D) -> Vector2D {
        Vector2D::new(
            velocity.x * (1.0 - self.ground_friction),
            -velocity.y * self.restitution,
        )
    }
}
