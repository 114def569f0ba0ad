use bevy::{
    prelude::*,
    asset::LoadState,
    gltf::Gltf,
    hierarchy::HierarchyQueryExt,
};
use crate::core::components::{Obstacle, ObstacleTag};
use crate::core::obstacle_error::ObstacleError;
use crate::management::config::ObstacleConfig;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Default, States)]
pub enum ObstacleState {
    #[default]
    Loading,
    Ready,
}

/// One model category's progress from requested file to instanceable template.
#[derive(Debug, Clone)]
pub enum ModelSlot {
    Loading { path: String, handle: Handle<Gltf> },
    Ready(Handle<Scene>),
    Missing,
}

impl ModelSlot {
    pub fn is_settled(&self) -> bool {
        !matches!(self, ModelSlot::Loading { .. })
    }

    fn settle(&mut self, tag: ObstacleTag, load_state: Option<LoadState>, gltfs: &Assets<Gltf>) {
        let ModelSlot::Loading { path, handle } = self else {
            return;
        };

        let outcome = match load_state {
            Some(LoadState::Loaded) => resolve_template(tag, path, handle, gltfs),
            Some(LoadState::Failed(error)) => Err(ObstacleError::ModelLoadFailed {
                tag,
                path: path.clone(),
                reason: error.to_string(),
            }),
            _ => return,
        };

        *self = match outcome {
            Ok(template) => {
                info!("{} model ready", tag.label());
                ModelSlot::Ready(template)
            }
            Err(e) => {
                warn!("{}", e);
                ModelSlot::Missing
            }
        };
    }
}

fn resolve_template(
    tag: ObstacleTag,
    path: &str,
    handle: &Handle<Gltf>,
    gltfs: &Assets<Gltf>,
) -> Result<Handle<Scene>, ObstacleError> {
    let gltf = gltfs.get(handle).ok_or_else(|| ObstacleError::ModelLoadFailed {
        tag,
        path: path.to_string(),
        reason: "asset was unloaded before it could be used".to_string(),
    })?;

    debug!(
        "{} model structure: {} scenes, {} meshes, {} materials, {} nodes",
        tag.label(),
        gltf.scenes.len(),
        gltf.meshes.len(),
        gltf.materials.len(),
        gltf.nodes.len()
    );

    gltf.default_scene
        .clone()
        .or_else(|| gltf.scenes.first().cloned())
        .ok_or_else(|| ObstacleError::EmptyModel {
            tag,
            path: path.to_string(),
        })
}

/// Shared obstacle templates. Instances are spawned from these, never from
/// the raw files, and only once [`ObstacleModels::is_ready`] holds.
#[derive(Resource, Debug, Clone)]
pub struct ObstacleModels {
    pub crab: ModelSlot,
    pub dolphin: ModelSlot,
    // Applied to crab meshes that arrive without a material of their own.
    pub crab_fallback: Handle<StandardMaterial>,
}

impl ObstacleModels {
    pub fn is_ready(&self) -> bool {
        self.crab.is_settled() && self.dolphin.is_settled()
    }

    pub fn template(&self, tag: ObstacleTag) -> Option<&Handle<Scene>> {
        match self.slot(tag) {
            ModelSlot::Ready(template) => Some(template),
            _ => None,
        }
    }

    pub fn slot(&self, tag: ObstacleTag) -> &ModelSlot {
        match tag {
            ObstacleTag::Crab => &self.crab,
            ObstacleTag::Dolphin => &self.dolphin,
        }
    }
}

pub fn crab_fallback_material() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb_u8(0xFF, 0x45, 0x00),
        perceptual_roughness: 1.0,
        metallic: 0.0,
        reflectance: 0.1,
        ..default()
    }
}

pub(crate) fn request_obstacle_models(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ObstacleConfig>,
) {
    let request = |path: &String| {
        debug!("Requesting obstacle model: {}", path);
        ModelSlot::Loading {
            path: path.clone(),
            handle: asset_server.load(path.as_str()),
        }
    };

    commands.insert_resource(ObstacleModels {
        crab: request(&config.crab.model),
        dolphin: request(&config.dolphin.model),
        crab_fallback: materials.add(crab_fallback_material()),
    });
}

pub(crate) fn poll_obstacle_models(
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut models: ResMut<ObstacleModels>,
    mut next: ResMut<NextState<ObstacleState>>,
) {
    let models = &mut *models;
    for (tag, slot) in [
        (ObstacleTag::Crab, &mut models.crab),
        (ObstacleTag::Dolphin, &mut models.dolphin),
    ] {
        let load_state = match slot {
            ModelSlot::Loading { handle, .. } => asset_server.get_load_state(handle.id()),
            _ => continue,
        };
        slot.settle(tag, load_state, &gltfs);
    }

    if models.is_ready() {
        info!("[ObstacleState] Loading -> Ready");
        next.set(ObstacleState::Ready);
    }
}

pub(crate) fn apply_crab_fallback_material(
    mut commands: Commands,
    models: Res<ObstacleModels>,
    bare_meshes: Query<Entity, (Added<Mesh3d>, Without<MeshMaterial3d<StandardMaterial>>)>,
    parents: Query<&Parent>,
    obstacles: Query<&Obstacle>,
) {
    for mesh in &bare_meshes {
        let under_crab = parents
            .iter_ancestors(mesh)
            .any(|ancestor| matches!(obstacles.get(ancestor).map(Obstacle::tag), Ok(ObstacleTag::Crab)));

        if under_crab {
            commands.entity(mesh).insert(MeshMaterial3d(models.crab_fallback.clone()));
        }
    }
}
