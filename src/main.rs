//! Start-up for the cube game, with window, plugins, and resources.

use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    window::*,
};

use shared::constants::game_constants::REFRESH_RATE_HZ;

use rubiks_cube_game::utils::{
    camera::Camera3dOrbitPlugin, debug_functions::DebugFunctionsPlugin,
    global_inputs::InputsPlugin, pointer_inputs::PointerInputPlugin,
    systems_logic::SystemsLogicPlugin,
};

/// Entry point for the application
fn main() {
    let window = Some(Window {
        title: "Rubik's Cube".into(),
        #[cfg(target_arch = "wasm32")]
        canvas: Some("#game-canvas".into()),
        fit_canvas_to_parent: true,
        // Keeps touch drags from scrolling the page
        prevent_default_event_handling: true,
        present_mode: PresentMode::AutoVsync,
        ..default()
    });

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: window,
                ..default()
            }),
            LogDiagnosticsPlugin::default(),
            FrameTimeDiagnosticsPlugin::default(),
            SystemsLogicPlugin,
            PointerInputPlugin,
            InputsPlugin,
            Camera3dOrbitPlugin,
            DebugFunctionsPlugin,
        ))
        .insert_resource(Time::<Fixed>::from_hz(REFRESH_RATE_HZ))
        .run();
}
