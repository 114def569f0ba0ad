use bevy::app::{App, Plugin};
use bevy::prelude::*;

use crate::core::components::Obstacle;
use crate::core::crab::{CrabAnimState, ScuttleDirection};
use crate::core::dolphin::DolphinAnimState;
use crate::management::config::{ObstacleConfig, DEFAULT_CONFIG_PATH};
use crate::management::model_registry::{
    apply_crab_fallback_material, poll_obstacle_models, request_obstacle_models, ObstacleState,
};
use crate::spawning::helpers::ObstacleRng;
use crate::spawning::obstacle_spawning::populate_obstacles;
use crate::systems::animation::update_obstacles;

/// Loads the obstacle models, populates the shoreline once they settle, and
/// animates every obstacle each frame after that.
///
/// An [`ObstacleConfig`] inserted before this plugin is used as-is; otherwise
/// one is read from `assets/obstacles.ron`.
pub struct ObstaclePlugin;

impl Plugin for ObstaclePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<ObstacleConfig>() {
            app.insert_resource(ObstacleConfig::import_or_default(DEFAULT_CONFIG_PATH));
        }
        let rng = ObstacleRng::from_setting(&app.world().resource::<ObstacleConfig>().seed);

        app
            .insert_resource(rng)
            .init_state::<ObstacleState>()
            .register_type::<Obstacle>()
            .register_type::<CrabAnimState>()
            .register_type::<DolphinAnimState>()
            .register_type::<ScuttleDirection>()
            .add_systems(Startup, request_obstacle_models)
            .add_systems(Update, poll_obstacle_models.run_if(in_state(ObstacleState::Loading)))
            .add_systems(OnEnter(ObstacleState::Ready), populate_obstacles)
            .add_systems(Update, (
                update_obstacles,
                apply_crab_fallback_material,
            ).run_if(in_state(ObstacleState::Ready)));
    }
}
