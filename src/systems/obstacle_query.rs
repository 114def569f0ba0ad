use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use crate::core::components::{Obstacle, ObstacleTag};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSnapshot {
    pub entity: Entity,
    pub tag: ObstacleTag,
    pub position: Vec3,
}

/// Read access to every live obstacle, for collision and gameplay systems.
///
/// ```ignore
/// fn hit_test(obstacles: ObstacleQuery, player: Query<&Transform, With<Player>>) {
///     for obstacle in obstacles.iter() { /* ... */ }
/// }
/// ```
#[derive(SystemParam)]
pub struct ObstacleQuery<'w, 's> {
    obstacles: Query<'w, 's, (Entity, &'static Obstacle, &'static Transform)>,
}

impl<'w, 's> ObstacleQuery<'w, 's> {
    pub fn iter(&self) -> impl Iterator<Item = ObstacleSnapshot> + '_ {
        self.obstacles.iter().map(|(entity, obstacle, transform)| ObstacleSnapshot {
            entity,
            tag: obstacle.tag(),
            position: transform.translation,
        })
    }

    pub fn of_kind(&self, tag: ObstacleTag) -> impl Iterator<Item = ObstacleSnapshot> + '_ {
        self.iter().filter(move |snapshot| snapshot.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.obstacles.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
