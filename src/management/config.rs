use std::fs::File;
use bevy::prelude::*;
use ron::de::from_reader;
use serde::{Deserialize, Serialize};
use crate::core::crab::ScuttleDirection;
use crate::core::obstacle_error::ObstacleError;

pub const DEFAULT_CONFIG_PATH: &str = "assets/obstacles.ron";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum SeededOrNot {
    Seeded(u64),
    Unseeded,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CrabPlacement {
    pub x: f32,
    pub z: f32,
    pub direction: ScuttleDirection,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DolphinPlacement {
    pub x: f32,
    pub z: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CrabSettings {
    // Asset path, relative to the asset root.
    pub model: String,
    pub base_scale: f32,
    // Per-tick probability of an unprompted turn.
    pub flip_chance: f64,
    pub placements: Vec<CrabPlacement>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DolphinSettings {
    pub model: String,
    pub base_scale: f32,
    pub placements: Vec<DolphinPlacement>,
}

/// Everything tunable about obstacle population, read from RON.
#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ObstacleConfig {
    pub seed: SeededOrNot,
    pub crab: CrabSettings,
    pub dolphin: DolphinSettings,
}

impl Default for CrabSettings {
    fn default() -> Self {
        CrabSettings {
            model: "models/crab.glb".to_string(),
            base_scale: 0.1,
            flip_chance: 0.001,
            placements: vec![
                CrabPlacement { x: -12.0, z: 5.0, direction: ScuttleDirection::Forward },
                CrabPlacement { x: 10.0, z: 1.0, direction: ScuttleDirection::Backward },
                CrabPlacement { x: -25.0, z: 2.0, direction: ScuttleDirection::Forward },
                CrabPlacement { x: 32.0, z: 1.0, direction: ScuttleDirection::Backward },
            ],
        }
    }
}

impl Default for DolphinSettings {
    fn default() -> Self {
        DolphinSettings {
            model: "models/dolphin.glb".to_string(),
            base_scale: 0.03,
            placements: vec![
                DolphinPlacement { x: 80.0, z: 15.0 },
                DolphinPlacement { x: 120.0, z: -25.0 },
                DolphinPlacement { x: 60.0, z: -15.0 },
                DolphinPlacement { x: 100.0, z: 25.0 },
            ],
        }
    }
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        ObstacleConfig {
            seed: SeededOrNot::Unseeded,
            crab: CrabSettings::default(),
            dolphin: DolphinSettings::default(),
        }
    }
}

impl ObstacleConfig {
    pub fn import(path: &str) -> Result<Self, ObstacleError> {
        let file = File::open(path).map_err(|source| ObstacleError::ConfigRead {
            path: path.to_string(),
            source,
        })?;

        from_reader(file).map_err(|source| ObstacleError::ConfigParse {
            path: path.to_string(),
            source,
        })
    }

    pub fn import_or_default(path: &str) -> Self {
        match Self::import(path) {
            Ok(config) => {
                info!("Loaded obstacle config from {}", path);
                config
            }
            Err(ObstacleError::ConfigRead { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                debug!("No obstacle config at {}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}
