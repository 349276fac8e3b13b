//! Setup logic for the cube game: configuration, scene and UI.
use bevy::prelude::*;

use crate::log;
use crate::utils::objects::*;
use shared::constants::{
    camera_3d_constants::{CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z},
    cube_constants::{
        BODY_COLOR, CUBE_SIZE, CUBIE_PITCH, STICKER_OFFSET, STICKER_SIZE, STICKER_THICKNESS,
    },
    lighting_constants::{GLOBAL_AMBIENT_LIGHT_INTENSITY, POINT_LIGHT_INTENSITY, SHADOWS_ENABLED},
};
use shared::cube::{StickerSlot, STICKER_COUNT};
use shared::{GameConfig, GestureInterpreter};

/// Load the runtime configuration and seed the resources that depend on it.
/// Runs as a startup system so that config warnings reach the log output.
pub fn load_settings(mut commands: Commands) {
    #[cfg(not(target_arch = "wasm32"))]
    let config = GameConfig::load_or_default(
        shared::constants::game_constants::CONFIG_FILE_NAME,
    );
    #[cfg(target_arch = "wasm32")]
    let config = GameConfig::default();

    info!(
        "Config: drag threshold {}, top row above {}, scramble {} moves (seed {})",
        config.gesture.drag_threshold,
        config.gesture.top_row_threshold,
        config.scramble.length,
        config.scramble.seed
    );

    commands.insert_resource(RandomGen::from_seed(config.scramble.seed));
    commands.insert_resource(CubeGesture(GestureInterpreter::new(config.gesture)));
    commands.insert_resource(GameSettings(config));
}

/// Initial game scene, with the camera, lights, and the cube.
pub fn setup_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    puzzle: Res<CubePuzzle>,
) {
    // Camera
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z)
            .looking_at(Vec3::ZERO, Vec3::Y),
        PersistentCamera,
    ));

    // Key light
    commands.spawn((
        PointLight {
            intensity: POINT_LIGHT_INTENSITY,
            shadows_enabled: SHADOWS_ENABLED,
            range: 50.0,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 6.0),
    ));

    // Ambient Light
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: GLOBAL_AMBIENT_LIGHT_INTENSITY,
        affects_lightmapped_meshes: true,
    });

    // Cube body, a bit smaller than the sticker shell
    let edge = CUBE_SIZE as f32 * CUBIE_PITCH - 0.02;
    let [r, g, b, a] = BODY_COLOR;
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(edge, edge, edge))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(r, g, b, a),
            perceptual_roughness: 0.6,
            ..default()
        })),
        Transform::default(),
        CubeBody,
    ));

    // One thin tile per sticker slot, each with its own material so it can be repainted
    let cube = puzzle.0.cube();
    for index in 0..STICKER_COUNT {
        let Some(slot) = StickerSlot::from_index(index) else {
            continue;
        };
        let Some(color) = cube.sticker(slot) else {
            continue;
        };

        let normal = slot.normal.as_vec3();
        let center = slot.position.as_vec3() * CUBIE_PITCH + normal * STICKER_OFFSET;
        // Flatten the tile along its normal
        let size = Vec3::splat(STICKER_SIZE) - normal.abs() * (STICKER_SIZE - STICKER_THICKNESS);

        commands.spawn((
            Mesh3d(meshes.add(Cuboid::from_size(size))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: face_color(color),
                perceptual_roughness: 0.35,
                ..default()
            })),
            Transform::from_translation(center),
            Sticker { slot },
        ));
    }

    log!("🧊 Cube ready");
    log!("🖱️  Drag a face to turn it | SPACE: scramble | ENTER: reset | BACKSPACE: undo");
}

/// Persistent status and help text.
pub fn setup_ui(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        StatusText,
    ));

    commands.spawn((
        Text::new(
            "Drag a face: turn | F B L R U D (+Shift): turn | SPACE: scramble | ENTER: reset | BACKSPACE: undo | Arrows: orbit/zoom",
        ),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.8, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));
}
