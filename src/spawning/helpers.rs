use std::f32::consts::TAU;
use bevy::prelude::*;
use bevy_prng::WyRand;
use rand::{Rng, SeedableRng};
use crate::management::config::SeededOrNot;

#[derive(Resource)]
pub struct ObstacleRng(WyRand);

impl ObstacleRng {
    pub fn new(seed: u64) -> Self {
        ObstacleRng(WyRand::seed_from_u64(seed))
    }

    pub fn from_setting(seed: &SeededOrNot) -> Self {
        match seed {
            SeededOrNot::Seeded(s) => Self::new(*s),
            SeededOrNot::Unseeded => Self::new(rand::random::<u64>()),
        }
    }

    // base + U[0, 1) * extent
    pub fn spread(&mut self, base: f32, extent: f32) -> f32 {
        base + self.0.gen::<f32>() * extent
    }

    pub fn angle(&mut self) -> f32 {
        self.spread(0.0, TAU)
    }

    // Non-finite probabilities never fire.
    pub fn chance(&mut self, probability: f64) -> bool {
        if !probability.is_finite() {
            return false;
        }
        self.0.gen_bool(probability.clamp(0.0, 1.0))
    }
}
