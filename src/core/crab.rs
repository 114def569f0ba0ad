use std::f32::consts::{PI, TAU};
use bevy::prelude::*;
use bevy_inspector_egui::prelude::*;
use serde::{Deserialize, Serialize};
use crate::core::pose::Pose;

// Resting height the bob and lift are added to.
pub const CRAB_BASE_HEIGHT: f32 = 1.0;
pub const WALK_CYCLE_STEP: f32 = 0.15;
// Shortest span after which every walk-cycle harmonic repeats.
pub const WALK_CYCLE_PERIOD: f32 = 20.0 * PI;

#[derive(Serialize, Deserialize, Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScuttleDirection {
    #[default]
    Forward,
    Backward,
}

impl ScuttleDirection {
    pub fn sign(self) -> f32 {
        match self {
            ScuttleDirection::Forward => 1.0,
            ScuttleDirection::Backward => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            ScuttleDirection::Forward => ScuttleDirection::Backward,
            ScuttleDirection::Backward => ScuttleDirection::Forward,
        }
    }
}

/// Per-crab animation record.
///
/// `lateral` and `heading` carry the crab's Z position and yaw from tick to
/// tick; everything else in the pose is recomputed from `walk_cycle`.
#[derive(Reflect, InspectorOptions, Debug, Clone, PartialEq)]
#[reflect(InspectorOptions)]
pub struct CrabAnimState {
    pub walk_cycle: f32,
    #[inspector(min = 0.0)]
    pub bob_amplitude: f32,
    // Not read by the update; kept for tuning in the inspector.
    pub rotation_speed: f32,
    #[inspector(min = 0.0)]
    pub scuttle_range: f32,
    pub original_z: f32,
    pub platform_x: f32,
    pub direction: ScuttleDirection,
    #[inspector(min = 0.0)]
    pub speed: f32,
    pub lateral: f32,
    pub heading: f32,
    pub base_scale: f32,
}

impl CrabAnimState {
    /// Advances the crab by one tick and returns its new pose.
    ///
    /// `stochastic_flip` is the outcome of this tick's random direction-change
    /// roll; pass `false` for a fully deterministic walk.
    pub fn advance(&mut self, stochastic_flip: bool) -> Pose {
        self.lateral += self.direction.sign() * self.speed;
        if (self.lateral - self.original_z).abs() > self.scuttle_range {
            self.turn_around();
        }

        self.walk_cycle = (self.walk_cycle + WALK_CYCLE_STEP).rem_euclid(WALK_CYCLE_PERIOD);
        let phase = self.walk_cycle;

        let bob = phase.sin() * self.bob_amplitude;
        let lift = (phase * 3.0).sin() * 0.05;
        let roll = (phase * 2.0).sin() * 0.1;
        let pitch = (phase * 1.5).sin() * 0.08;
        self.heading += (phase * 0.8).sin() * 0.1 * 0.01;
        let breathe = 1.0 + (phase * 4.0).sin() * 0.02;

        // Random turns only change heading and direction; this tick's step is already taken.
        if stochastic_flip {
            self.turn_around();
        }
        self.heading = self.heading.rem_euclid(TAU);

        Pose {
            translation: Vec3::new(self.platform_x, CRAB_BASE_HEIGHT + bob + lift, self.lateral),
            pitch,
            yaw: self.heading,
            roll,
            scale: self.base_scale * breathe,
        }
    }

    fn turn_around(&mut self) {
        self.direction = self.direction.flipped();
        self.heading += PI;
    }
}
