use crate::utils::vector2d::Vector2D;

/// Gravity plus optional quadratic drag, applied per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceModel {
    pub gravity: f64,
    pub drag_coefficient: f64,
    pub include_drag: bool,
}

impl ForceModel {
    pub fn new(gravity: f64, drag_coefficient: f64, include_drag: bool) -> Self {
        ForceModel {
            gravity,
            drag_coefficient,
            include_drag,
        }
    }

    pub fn acceleration(&self, velocity: Vector2D) -> Vector2D {
        let gravity_vector = Vector2D::new(0.0, -self.gravity);

        if self.include_drag {
            gravity_vector + self.calculate_drag(velocity)
        } else {
            gravity_vector
        }
    }

    /// `-c * sign(v) * |v|` on each axis independently.
    pub fn calculate_drag(&self, velocity: Vector2D) -> Vector2D {
        -self.drag_coefficient * velocity.signum().component_mul(&velocity.abs())
    }
}
