use crate::utils::vector2d::Vector2D;

use super::forces::ForceModel;

/// Kinematic state of the projectile, evolved in place across steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
    pub time: f64,
}

impl State {
    /// Launch state at `x = 0`, with the acceleration already evaluated so the
    /// first telemetry row carries a real value.
    pub fn launch(speed: f64, angle_deg: f64, height: f64, forces: &ForceModel) -> Self {
        let velocity = Vector2D::from_polar_degrees(speed, angle_deg);
        State {
            position: Vector2D::new(0.0, height),
            velocity,
            acceleration: forces.acceleration(velocity),
            time: 0.0,
        }
    }

    /// Semi-implicit Euler: velocity from the previous acceleration, position
    /// from the updated velocity, then acceleration re-evaluated for the next
    /// step.
    pub fn step(&mut self, delta_time: f64, forces: &ForceModel) {
        self.velocity = self.velocity + self.acceleration * delta_time;
        self.position = self.position + self.velocity * delta_time;
        self.time += delta_time;

        self.acceleration = forces.acceleration(self.velocity);
    }

    pub fn get_altitude(&self) -> f64 {
        self.position.y
    }

    pub fn is_on_ground(&self) -> bool {
        self.position.y == 0.0
    }

    /// Both velocity components strictly below `threshold` in magnitude.
    pub fn is_slower_than(&self, threshold: f64) -> bool {
        self.velocity.x.abs() < threshold && self.velocity.y.abs() < threshold
    }
}
