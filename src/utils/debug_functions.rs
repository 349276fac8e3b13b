//! Debug functions for the game.
use bevy::{prelude::*, window::*};

use crate::utils::objects::{CubeGesture, LastCubeHit};

pub struct DebugFunctionsPlugin;

impl Plugin for DebugFunctionsPlugin {
    /// Plugin by adding the `toggle_vsync` and gesture gizmo systems to the app.
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (toggle_vsync, visualize_gesture));
    }
}

/// Toggles VSync when the 'V' key is pressed.
fn toggle_vsync(input: Res<ButtonInput<KeyCode>>, mut window: Query<&mut Window>) {
    if input.just_pressed(KeyCode::KeyV) {
        let Ok(mut window) = window.single_mut() else {
            return;
        };

        window.present_mode = if matches!(window.present_mode, PresentMode::AutoVsync) {
            PresentMode::AutoNoVsync
        } else {
            PresentMode::AutoVsync
        };

        info!("PRESENT_MODE: {:?}", window.present_mode);
    }
}

/// Draws the last picked point and its face normal when 'G' is toggled on.
/// The marker turns green while the drag is still running.
fn visualize_gesture(
    mut gizmos: Gizmos,
    input: Res<ButtonInput<KeyCode>>,
    last_hit: Res<LastCubeHit>,
    gesture: Res<CubeGesture>,
    mut show_gesture: Local<bool>,
) {
    if input.just_pressed(KeyCode::KeyG) {
        *show_gesture = !*show_gesture;
        info!("Gesture visualization: {}", *show_gesture);
    }

    if !*show_gesture {
        return;
    }

    let Some(hit) = last_hit.0 else {
        return;
    };

    let color = if gesture.0.is_dragging() {
        Color::srgb(0.1, 1.0, 0.2)
    } else {
        Color::srgb(1.0, 0.9, 0.1)
    };

    gizmos.sphere(hit.point, 0.06, color);
    gizmos.arrow(hit.point, hit.point + hit.normal * 0.8, color);
}
