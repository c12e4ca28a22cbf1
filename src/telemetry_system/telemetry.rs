use std::fmt;

use serde::Serialize;

use crate::trajectory_system::kinematics::State;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
}

/// Full kinematic state at one accepted step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TelemetryRow {
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub ax: f64,
    pub ay: f64,
}

impl From<&State> for TelemetryRow {
    fn from(state: &State) -> Self {
        TelemetryRow {
            t: state.time,
            x: state.position.x,
            y: state.position.y,
            vx: state.velocity.x,
            vy: state.velocity.y,
            ax: state.acceleration.x,
            ay: state.acceleration.y,
        }
    }
}

impl TelemetryRow {
    pub fn point(&self) -> TrajectoryPoint {
        TrajectoryPoint {
            x: self.x,
            y: self.y,
        }
    }

    pub fn speed(&self) -> f64 {
        (self.vx.powi(2) + self.vy.powi(2)).sqrt()
    }
}

/// Time-ordered rows plus first-impact metadata for the whole run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Telemetry {
    pub rows: Vec<TelemetryRow>,
    pub first_impact_x: Option<f64>,
    pub first_impact_t: Option<f64>,
}

impl Telemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect_data(&mut self, state: &State) {
        self.rows.push(TelemetryRow::from(state));
    }

    /// Latches the first impact; later calls are ignored.
    pub fn record_impact(&mut self, x: f64, t: f64) {
        if self.first_impact_x.is_none() {
            self.first_impact_x = Some(x);
            self.first_impact_t = Some(t);
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn trajectory(&self) -> Vec<TrajectoryPoint> {
        self.rows.iter().map(TelemetryRow::point).collect()
    }

    pub fn summary(&self) -> FlightSummary {
        let max_height = self.rows.iter().map(|row| row.y).fold(0.0, f64::max);
        let max_speed = self.rows.iter().map(TelemetryRow::speed).fold(0.0, f64::max);
        let last = self.rows.last();

        FlightSummary {
            max_height,
            max_speed,
            range: last.map_or(0.0, |row| row.x),
            flight_time: last.map_or(0.0, |row| row.t),
            first_impact_x: self.first_impact_x,
            first_impact_t: self.first_impact_t,
            samples: self.rows.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightSummary {
    pub max_height: f64,
    pub max_speed: f64,
    pub range: f64,
    pub flight_time: f64,
    pub first_impact_x: Option<f64>,
    pub first_impact_t: Option<f64>,
    pub samples: usize,
}

impl FlightSummary {
    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_distance(distance: f64) -> String {
        if distance.abs() >= 1000.0 {
            format!("{:.2} km", distance / 1000.0)
        } else {
            format!("{:.2} m", distance)
        }
    }
}

impl fmt::Display for FlightSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max Height: {}", Self::format_distance(self.max_height))?;
        writeln!(f, "Max Speed: {:.2} m/s", self.max_speed)?;
        writeln!(f, "Range: {}", Self::format_distance(self.range))?;
        writeln!(f, "Flight Time: {}", Self::format_time(self.flight_time))?;
        match (self.first_impact_x, self.first_impact_t) {
            (Some(x), Some(t)) => writeln!(
                f,
                "First Impact: {} at {}",
                Self::format_distance(x),
                Self::format_time(t)
            )?,
            _ => writeln!(f, "First Impact: none")?,
        }
        write!(f, "Samples: {}", self.samples)
    }
}
