use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use crate::core::crab::CrabAnimState;
use crate::core::dolphin::DolphinAnimState;
use crate::core::pose::Pose;

/// A live obstacle: one scene instance plus the state that animates it.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
#[require(Transform, Visibility)]
pub struct Obstacle {
    pub kind: ObstacleKind,
}

#[derive(Reflect, Debug, Clone)]
pub enum ObstacleKind {
    Crab(CrabAnimState),
    Dolphin(DolphinAnimState),
}

#[derive(Serialize, Deserialize, Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleTag {
    Crab,
    Dolphin,
}

impl Obstacle {
    pub fn crab(state: CrabAnimState) -> Self {
        Obstacle { kind: ObstacleKind::Crab(state) }
    }

    pub fn dolphin(state: DolphinAnimState) -> Self {
        Obstacle { kind: ObstacleKind::Dolphin(state) }
    }

    pub fn tag(&self) -> ObstacleTag {
        match self.kind {
            ObstacleKind::Crab(_) => ObstacleTag::Crab,
            ObstacleKind::Dolphin(_) => ObstacleTag::Dolphin,
        }
    }

    /// Runs one animation tick. `stochastic_flip` only matters for crabs.
    pub fn advance(&mut self, time: f32, stochastic_flip: bool) -> Pose {
        match &mut self.kind {
            ObstacleKind::Crab(crab) => crab.advance(stochastic_flip),
            ObstacleKind::Dolphin(dolphin) => dolphin.advance(time),
        }
    }
}

impl ObstacleTag {
    pub fn label(self) -> &'static str {
        match self {
            ObstacleTag::Crab => "Crab",
            ObstacleTag::Dolphin => "Dolphin",
        }
    }
}

