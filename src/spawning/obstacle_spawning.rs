use bevy::prelude::*;
use crate::core::components::{Obstacle, ObstacleTag};
use crate::core::crab::CrabAnimState;
use crate::core::dolphin::{DolphinAnimState, WATER_LEVEL};
use crate::management::config::{CrabPlacement, CrabSettings, DolphinPlacement, DolphinSettings, ObstacleConfig};
use crate::management::model_registry::ObstacleModels;
use crate::spawning::helpers::ObstacleRng;

// Crabs are dropped slightly below the walk height and settle on the first tick.
const CRAB_SPAWN_HEIGHT: f32 = 0.5;

pub fn crab_state(placement: &CrabPlacement, settings: &CrabSettings, rng: &mut ObstacleRng) -> CrabAnimState {
    let speed = rng.spread(0.008, 0.004);
    let walk_cycle = rng.angle();
    let bob_amplitude = rng.spread(0.1, 0.05);
    let rotation_speed = rng.spread(0.02, 0.01);
    let scuttle_range = rng.spread(3.0, 2.0);
    let heading = rng.angle();

    CrabAnimState {
        walk_cycle,
        bob_amplitude,
        rotation_speed,
        scuttle_range,
        original_z: placement.z,
        platform_x: placement.x,
        direction: placement.direction,
        speed,
        lateral: placement.z,
        heading,
        base_scale: settings.base_scale,
    }
}

pub fn dolphin_state(placement: &DolphinPlacement, settings: &DolphinSettings, rng: &mut ObstacleRng) -> DolphinAnimState {
    let base_rotation = rng.angle();

    DolphinAnimState {
        center_x: placement.x,
        center_z: placement.z,
        jump_phase: rng.angle(),
        jump_height: rng.spread(3.0, 2.0),
        jump_frequency: rng.spread(0.5, 0.3),
        swim_depth: rng.spread(-2.0, -1.0),
        rotation_offset: rng.angle(),
        base_rotation,
        swim_angle: rng.angle(),
        swim_radius: rng.spread(2.0, 3.0),
        swim_speed: rng.spread(0.01, 0.005),
        underwater: false,
        base_scale: settings.base_scale,
    }
}

pub(crate) fn spawn_obstacle(
    commands: &mut Commands,
    template: &Handle<Scene>,
    obstacle: Obstacle,
    transform: Transform,
    index: usize,
) -> Entity {
    let name = format!("{} {}", obstacle.tag().label(), index);

    commands.spawn_empty()
        .insert(Name::new(name))
        .insert(SceneRoot(template.clone()))
        .insert(transform)
        .insert(obstacle)
        .id()
}

pub fn spawn_crabs(
    commands: &mut Commands,
    models: &ObstacleModels,
    settings: &CrabSettings,
    rng: &mut ObstacleRng,
) -> Vec<Entity> {
    let Some(template) = models.template(ObstacleTag::Crab) else {
        warn!("Crab model unavailable, skipping {} crabs", settings.placements.len());
        return Vec::new();
    };

    settings.placements.iter().enumerate().map(|(index, placement)| {
        let state = crab_state(placement, settings, rng);
        let transform = Transform::from_xyz(placement.x, CRAB_SPAWN_HEIGHT, placement.z)
            .with_rotation(Quat::from_rotation_y(state.heading))
            .with_scale(Vec3::splat(settings.base_scale));

        spawn_obstacle(commands, template, Obstacle::crab(state), transform, index)
    }).collect()
}

pub fn spawn_dolphins(
    commands: &mut Commands,
    models: &ObstacleModels,
    settings: &DolphinSettings,
    rng: &mut ObstacleRng,
) -> Vec<Entity> {
    let Some(template) = models.template(ObstacleTag::Dolphin) else {
        warn!("Dolphin model unavailable, skipping {} dolphins", settings.placements.len());
        return Vec::new();
    };

    settings.placements.iter().enumerate().map(|(index, placement)| {
        let state = dolphin_state(placement, settings, rng);
        let transform = Transform::from_xyz(placement.x, WATER_LEVEL, placement.z)
            .with_rotation(Quat::from_rotation_y(state.base_rotation))
            .with_scale(Vec3::splat(settings.base_scale));

        spawn_obstacle(commands, template, Obstacle::dolphin(state), transform, index)
    }).collect()
}

pub(crate) fn populate_obstacles(
    mut commands: Commands,
    models: Res<ObstacleModels>,
    config: Res<ObstacleConfig>,
    mut rng: ResMut<ObstacleRng>,
) {
    if !models.is_ready() {
        warn!("Obstacle models still loading; nothing populated");
        return;
    }

    let crabs = spawn_crabs(&mut commands, &models, &config.crab, &mut rng);
    let dolphins = spawn_dolphins(&mut commands, &models, &config.dolphin, &mut rng);

    info!("Populated obstacles: {} crabs, {} dolphins", crabs.len(), dolphins.len());
}
