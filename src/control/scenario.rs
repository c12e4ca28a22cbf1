use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_BOUNCES, DEFAULT_TIME_STEP};
use crate::errors::ScenarioError;
use crate::trajectory_system::simulation::SimulationConfig;

use super::environment::{Medium, Planet};

/// A named launch setup as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub v0: f64,
    pub angle: f64,
    pub h0: f64,
    pub planet: Planet,
    pub medium: Medium,
    pub air_res: bool,
    pub restitution: f64,
    pub ground_friction: f64,
}

impl Scenario {
    pub fn to_config(&self) -> SimulationConfig {
        SimulationConfig {
            v0: self.v0,
            angle: self.angle,
            h0: self.h0,
            g: self.planet.gravity(),
            drag_coeff: self.medium.drag_coefficient(),
            include_drag: self.air_res,
            dt: DEFAULT_TIME_STEP,
            restitution: self.restitution,
            ground_friction: self.ground_friction,
            max_bounces: DEFAULT_MAX_BOUNCES,
        }
    }
}

/// JSON file mapping scenario names to [`Scenario`] records.
///
/// Saves are read-modify-write of the whole file with no locking; concurrent
/// writers can lose each other's updates.
#[derive(Debug, Clone)]
pub struct ScenarioStore {
    path: PathBuf,
}

impl ScenarioStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        ScenarioStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file reads as an empty store.
    pub fn load_all(&self) -> Result<BTreeMap<String, Scenario>, ScenarioError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn names(&self) -> Result<Vec<String>, ScenarioError> {
        Ok(self.load_all()?.into_keys().collect())
    }

    pub fn get(&self, name: &str) -> Result<Scenario, ScenarioError> {
        self.load_all()?
            .remove(name)
            .ok_or_else(|| ScenarioError::NotFound(name.to_string()))
    }

    /// Inserts or replaces `name`.
    pub fn save(&self, name: &str, scenario: &Scenario) -> Result<(), ScenarioError> {
        let mut scenarios = self.load_all()?;
        scenarios.insert(name.to_string(), scenario.clone());
        self.write_all(&scenarios)?;
        log::info!("Saved scenario '{}' to {}", name, self.path.display());
        Ok(())
    }

    pub fn remove(&self, name: &str) -> Result<Scenario, ScenarioError> {
        let mut scenarios = self.load_all()?;
        let removed = scenarios
            .remove(name)
            .ok_or_else(|| ScenarioError::NotFound(name.to_string()))?;
        self.write_all(&scenarios)?;
        Ok(removed)
    }

    fn write_all(&self, scenarios: &BTreeMap<String, Scenario>) -> Result<(), ScenarioError> {
        let json = serde_json::to_string_pretty(scenarios)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
