use bevy::prelude::*;

/// A single frame's worth of obstacle placement.
///
/// Angles are Euler radians applied in XYZ order (pitch, then yaw, then roll),
/// the same convention the model assets were authored against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
    pub scale: f32,
}

impl Pose {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, self.roll)
    }

    pub fn apply_to(&self, transform: &mut Transform) {
        transform.translation = self.translation;
        transform.rotation = self.rotation();
        transform.scale = Vec3::splat(self.scale);
    }
}

impl From<Pose> for Transform {
    fn from(pose: Pose) -> Self {
        Transform {
            translation: pose.translation,
            rotation: pose.rotation(),
            scale: Vec3::splat(pose.scale),
        }
    }
}
