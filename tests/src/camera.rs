use bevy::app::{App, Plugin};
use bevy::prelude::*;

#[derive(Component)]
pub(crate) struct MainCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_systems(Startup, initialize_camera_system)
            .add_systems(Update, camera_controller_system)
            .insert_resource(ShoreCamera::default());
    }
}

// Camera rides along the shoreline (X) looking at a focus point on the sand.
#[derive(Resource)]
pub(crate) struct ShoreCamera {
    focus: Vec3,
    distance: f32,
    height: f32,
}

impl Default for ShoreCamera {
    fn default() -> Self {
        ShoreCamera {
            focus: Vec3::new(20.0, 0.0, 0.0),
            distance: 45.0,
            height: 18.0,
        }
    }
}

impl ShoreCamera {
    fn transform(&self) -> Transform {
        Transform::from_translation(self.focus + Vec3::new(0.0, self.height, self.distance))
            .looking_at(self.focus, Vec3::Y)
    }
}

fn initialize_camera_system(
    mut commands: Commands,
    shore: Res<ShoreCamera>,
) {
    commands.spawn_empty()
        .insert(Camera3d::default())
        .insert(shore.transform())
        .insert(DistanceFog {
            color: Color::srgba(0.35, 0.48, 0.66, 1.0),
            directional_light_color: Color::srgba(1.0, 0.95, 0.85, 0.5),
            directional_light_exponent: 30.0,
            falloff: FogFalloff::from_visibility_colors(
                220.0,
                Color::srgb(0.35, 0.5, 0.66),
                Color::srgb(0.8, 0.844, 1.0),
            ),
        })
        .insert(Name::new("MainCamera"))
        .insert(MainCamera);
}

fn camera_controller_system(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut shore: ResMut<ShoreCamera>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let step = time.delta_secs() * 30.0;

    if keys.pressed(KeyCode::KeyA) { shore.focus.x -= step; }
    if keys.pressed(KeyCode::KeyD) { shore.focus.x += step; }
    if keys.pressed(KeyCode::KeyW) { shore.distance = (shore.distance - step).max(5.0); }
    if keys.pressed(KeyCode::KeyS) { shore.distance = (shore.distance + step).min(150.0); }

    if !shore.is_changed() {
        return;
    }

    for mut cam_trans in &mut camera_query {
        *cam_trans = shore.transform();
    }
}
