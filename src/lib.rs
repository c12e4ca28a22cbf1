pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use control::environment::{Medium, Planet};
pub use control::scenario::{Scenario, ScenarioStore};
pub use errors::{ConfigError, ExportError, ScenarioError, SimulationError};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::simulation::{simulate, SimulationConfig, SimulationResult};
pub use trajectory_system::termination::Termination;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::export::{write_csv, write_csv_file};
pub use telemetry_system::telemetry::{FlightSummary, Telemetry, TelemetryRow, TrajectoryPoint};

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
