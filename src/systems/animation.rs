use bevy::prelude::*;
use crate::core::components::{Obstacle, ObstacleKind};
use crate::management::config::ObstacleConfig;
use crate::spawning::helpers::ObstacleRng;

/// Per-frame dispatcher: advances every obstacle one tick and writes the
/// resulting pose to its transform.
pub fn update_obstacles(
    time: Res<Time>,
    config: Res<ObstacleConfig>,
    mut rng: ResMut<ObstacleRng>,
    mut obstacles: Query<(&mut Obstacle, &mut Transform)>,
) {
    let elapsed = time.elapsed_secs();

    for (mut obstacle, mut transform) in &mut obstacles {
        // Only crabs consume a roll, so dolphins never shift the crab sequence.
        let flip = match obstacle.kind {
            ObstacleKind::Crab(_) => rng.chance(config.crab.flip_chance),
            ObstacleKind::Dolphin(_) => false,
        };

        let pose = obstacle.advance(elapsed, flip);
        pose.apply_to(&mut transform);
    }
}
