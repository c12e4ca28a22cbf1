use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),

    #[error("Maximum bounce count must be at least 1")]
    ZeroMaxBounces,

    #[error("{name} must lie in [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} must be a finite number")]
    NonFinite { name: &'static str },
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Scenario store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scenario store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No scenario named '{0}'")]
    NotFound(String),

    #[error("Unknown planet '{0}'")]
    UnknownPlanet(String),

    #[error("Unknown medium '{0}'")]
    UnknownMedium(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}
