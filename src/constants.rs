// Physical Constants
pub const GRAVITY: f64 = 9.81; // m/s²

// Simulation Parameters
pub const MAX_SIMULATION_TIME: f64 = 60.0; // s
pub const REST_SPEED_THRESHOLD: f64 = 0.05; // m/s, per axis

// Defaults used by SimulationConfig::default()
pub const DEFAULT_LAUNCH_SPEED: f64 = 50.0; // m/s
pub const DEFAULT_LAUNCH_ANGLE: f64 = 45.0; // degrees
pub const DEFAULT_TIME_STEP: f64 = 0.01; // s
pub const DEFAULT_RESTITUTION: f64 = 0.6;
pub const DEFAULT_GROUND_FRICTION: f64 = 0.05;
pub const DEFAULT_MAX_BOUNCES: u32 = 20;

// Telemetry export
pub const TELEMETRY_HEADER: [&str; 7] = ["t", "x", "y", "vx", "vy", "ax", "ay"];
