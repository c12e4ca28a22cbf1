use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::GRAVITY;
use crate::errors::ScenarioError;

/// Surface gravity presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Earth,
    Moon,
    Mars,
    Jupiter,
    #[serde(rename = "Gravity-Less")]
    GravityLess,
}

impl Planet {
    pub const ALL: [Planet; 5] = [
        Planet::Earth,
        Planet::Moon,
        Planet::Mars,
        Planet::Jupiter,
        Planet::GravityLess,
    ];

    pub fn gravity(&self) -> f64 {
        match self {
            Planet::Earth => GRAVITY,
            Planet::Moon => 1.62,
            Planet::Mars => 3.73,
            Planet::Jupiter => 24.79,
            Planet::GravityLess => 0.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Earth => "Earth",
            Planet::Moon => "Moon",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::GravityLess => "Gravity-Less",
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Planet::ALL
            .iter()
            .copied()
            .find(|planet| planet.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScenarioError::UnknownPlanet(s.to_string()))
    }
}

/// Medium the projectile travels through, with its drag coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Medium {
    Vacuum,
    Air,
    Water,
}

impl Medium {
    pub const ALL: [Medium; 3] = [Medium::Vacuum, Medium::Air, Medium::Water];

    pub fn drag_coefficient(&self) -> f64 {
        match self {
            Medium::Vacuum => 0.0,
            Medium::Air => 0.4,
            Medium::Water => 0.2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Medium::Vacuum => "Vacuum",
            Medium::Air => "Air",
            Medium::Water => "Water",
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Medium {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Medium::ALL
            .iter()
            .copied()
            .find(|medium| medium.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScenarioError::UnknownMedium(s.to_string()))
    }
}
