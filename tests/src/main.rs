use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use shore_obstacles::core::dolphin::WATER_LEVEL;
use shore_obstacles::prelude::*;

mod camera;

fn main() {
    let mut app = App::new();

    // Setup default plugins
    app.add_plugins(
        DefaultPlugins
            .set(bevy::log::LogPlugin {
                filter: "warn,shore_obstacles=debug".to_string(),
                level: bevy::log::Level::INFO,
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Shore Obstacles".into(),
                    resolution: (1280.0, 720.0).into(),
                    ..default()
                }),
                ..default()
            }),
    );

    app.insert_resource(AmbientLight {
        color: Color::srgb(0.85, 0.9, 1.0),
        brightness: 250.0,
    });

    // Setup inspector plugins
    app.add_plugins(
        WorldInspectorPlugin::default().run_if(bevy::input::common_conditions::input_toggle_active(false, KeyCode::Escape)),
    );

    app.add_plugins(ObstaclePlugin);
    app.add_plugins(crate::camera::CameraPlugin);

    app.add_systems(Startup, shoreline_setup);
    app.add_systems(Update, report_nearest_obstacle.run_if(in_state(ObstacleState::Ready)));

    app.run();
}

fn shoreline_setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn_empty()
        .insert(DirectionalLight {
            shadows_enabled: true,
            illuminance: 12000.0,
            ..default()
        })
        .insert(Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.4, 0.0)))
        .insert(Name::new("Sun"));

    // Beach strip the crabs walk on
    commands.spawn_empty()
        .insert(Mesh3d(meshes.add(Plane3d::default().mesh().size(90.0, 20.0))))
        .insert(MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.86, 0.78, 0.58),
            perceptual_roughness: 1.0,
            ..default()
        })))
        .insert(Transform::from_xyz(0.0, 0.6, 3.0))
        .insert(Name::new("Sand"));

    commands.spawn_empty()
        .insert(Mesh3d(meshes.add(Plane3d::default().mesh().size(400.0, 200.0))))
        .insert(MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.1, 0.35, 0.6, 0.8),
            alpha_mode: AlphaMode::Blend,
            ..default()
        })))
        .insert(Transform::from_xyz(60.0, WATER_LEVEL, 0.0))
        .insert(Name::new("Water"));
}

// Exercises the collision-facing query the way gameplay code would.
fn report_nearest_obstacle(
    keys: Res<ButtonInput<KeyCode>>,
    obstacles: ObstacleQuery,
    camera: Query<&Transform, With<camera::MainCamera>>,
) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }
    let Ok(camera) = camera.get_single() else {
        return;
    };

    let nearest = obstacles
        .iter()
        .min_by(|a, b| {
            a.position.distance_squared(camera.translation)
                .total_cmp(&b.position.distance_squared(camera.translation))
        });

    match nearest {
        Some(snapshot) => info!(
            "Nearest of {} obstacles: {:?} at {:?}",
            obstacles.len(),
            snapshot.tag,
            snapshot.position
        ),
        None => info!("No obstacles on the shoreline"),
    }
}
