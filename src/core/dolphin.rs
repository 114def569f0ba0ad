use std::f32::consts::{PI, TAU};
use bevy::prelude::*;
use bevy_inspector_egui::prelude::*;
use crate::core::easing::ease_in_out_quad;
use crate::core::pose::Pose;

pub const WATER_LEVEL: f32 = -1.0;
// sin(jump_phase) above this means the dolphin is in the air.
pub const JUMP_THRESHOLD: f32 = 0.7;
// sin(jump_phase) below this sends a swimming dolphin down to swim_depth.
pub const DIVE_THRESHOLD: f32 = 0.3;
const JUMP_PHASE_RATE: f32 = 0.02;
// Shortest span after which cos(a), sin(0.7a) and sin(2a) all repeat.
pub const SWIM_ANGLE_PERIOD: f32 = 20.0 * PI;

#[derive(Reflect, InspectorOptions, Debug, Clone, PartialEq)]
#[reflect(InspectorOptions)]
pub struct DolphinAnimState {
    pub center_x: f32,
    pub center_z: f32,
    pub jump_phase: f32,
    #[inspector(min = 0.0)]
    pub jump_height: f32,
    #[inspector(min = 0.0)]
    pub jump_frequency: f32,
    pub swim_depth: f32,
    pub swim_angle: f32,
    #[inspector(min = 0.0)]
    pub swim_radius: f32,
    pub swim_speed: f32,
    pub rotation_offset: f32,
    pub base_rotation: f32,
    pub underwater: bool,
    pub base_scale: f32,
}

impl DolphinAnimState {
    /// Planar offset from the swim centre for the current `swim_angle`.
    ///
    /// The 0.7 factor on the Z term keeps the path from closing into a circle
    /// and traces a lopsided figure-eight instead.
    pub fn swim_offset(&self) -> Vec2 {
        Vec2::new(
            self.swim_angle.cos() * self.swim_radius,
            (self.swim_angle * 0.7).sin() * self.swim_radius * 0.6,
        )
    }

    pub fn jump_cycle(&self) -> f32 {
        self.jump_phase.sin()
    }

    /// Advances both oscillators by one tick; `time` is elapsed seconds and
    /// drives the bobbing, pitch and tail terms.
    pub fn advance(&mut self, time: f32) -> Pose {
        self.swim_angle = (self.swim_angle + self.swim_speed).rem_euclid(SWIM_ANGLE_PERIOD);
        let offset = self.swim_offset();
        let heading = offset.y.atan2(offset.x);

        self.jump_phase = (self.jump_phase + self.jump_frequency * JUMP_PHASE_RATE).rem_euclid(TAU);
        let jump_cycle = self.jump_cycle();

        let (height, pitch) = if jump_cycle > JUMP_THRESHOLD && !self.underwater {
            let progress = (jump_cycle - JUMP_THRESHOLD) / (1.0 - JUMP_THRESHOLD);
            let height = WATER_LEVEL + ease_in_out_quad(progress) * self.jump_height;
            (height, progress * PI * 0.2)
        } else {
            // Only refreshed here, so a dolphin that was deep last tick sits out
            // the first tick of a jump.
            self.underwater = jump_cycle < DIVE_THRESHOLD;
            let depth = if self.underwater { self.swim_depth } else { WATER_LEVEL };
            let bob = (time * 2.0 + self.rotation_offset).sin() * 0.1;
            let pitch = (time * 1.5 + self.rotation_offset).sin() * 0.05;
            (depth + bob, pitch)
        };

        let swim_intensity = 1.0 + (self.swim_angle * 2.0).sin() * 0.3;
        let roll = (time * 5.0 + self.rotation_offset).sin() * 0.04 * swim_intensity;
        let breathe = 1.0 + (time * 6.0 + self.rotation_offset).sin() * 0.02;

        Pose {
            translation: Vec3::new(self.center_x + offset.x, height, self.center_z + offset.y),
            pitch,
            yaw: heading,
            roll,
            scale: self.base_scale * breathe,
        }
    }
}
