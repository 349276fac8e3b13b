//! Mouse and touch input for turning cube faces by dragging.
//!
//! Both devices feed the same gesture interpreter. A drag starts where the
//! pointer goes down (the camera ray decides which face it is on), and turns
//! that face when the pointer comes back up. Only one drag exists at a time:
//! while a finger is down the mouse is ignored, and extra fingers are ignored.

use bevy::prelude::*;
use bevy::window::{CursorLeft, PrimaryWindow};

use crate::utils::objects::{
    CubeGesture, CubePuzzle, FaceRotated, LastCubeHit, PersistentCamera,
};
use shared::constants::cube_constants::CUBE_HALF_EXTENT;
use shared::hit::{ray_cube_hit, CubeHit};
use shared::{DragSample, GestureOutcome};

/// Resource to track which touch owns the current drag
#[derive(Resource, Default)]
pub struct TouchState {
    pub active_touch_id: Option<u64>,
}

/// Plugin for pointer input handling
pub struct PointerInputPlugin;

impl Plugin for PointerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TouchState>()
            .init_resource::<LastCubeHit>()
            .add_systems(Update, (track_touch_gestures, track_mouse_gestures).chain());
    }
}

/// Cast the camera ray through a viewport position and intersect it with the cube.
fn pick_cube(camera: &Camera, camera_transform: &GlobalTransform, position: Vec2) -> Option<CubeHit> {
    let ray = camera.viewport_to_world(camera_transform, position).ok()?;
    ray_cube_hit(ray.origin, *ray.direction, CUBE_HALF_EXTENT)
}

/// Start a drag at `position`.
fn begin_drag(
    gesture: &mut CubeGesture,
    last_hit: &mut LastCubeHit,
    camera: Option<(&Camera, &GlobalTransform)>,
    window: &Window,
    position: Vec2,
) {
    let Some(sample) = DragSample::from_viewport(position, window.size()) else {
        return;
    };
    let hit = camera.and_then(|(camera, transform)| pick_cube(camera, transform, position));
    if gesture.0.pointer_down(sample, hit.map(|hit| hit.normal)) {
        last_hit.0 = hit;
    }
}

/// Finish a drag at `position` and apply the resulting turn, if any.
fn end_drag(
    gesture: &mut CubeGesture,
    puzzle: &mut CubePuzzle,
    rotated: &mut MessageWriter<FaceRotated>,
    window: &Window,
    position: Vec2,
) {
    let Some(sample) = DragSample::from_viewport(position, window.size()) else {
        gesture.0.pointer_leave();
        return;
    };

    let outcome = gesture
        .0
        .pointer_up(sample, |command| puzzle.0.apply(command).map(|_| ()));

    if let GestureOutcome::Rotated(command) = outcome {
        rotated.write(FaceRotated(command));
    }
}

/// System to drive drags from the left mouse button.
pub fn track_mouse_gestures(
    mouse: Res<ButtonInput<MouseButton>>,
    mut cursor_left: MessageReader<CursorLeft>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<PersistentCamera>>,
    touch_state: Res<TouchState>,
    mut gesture: ResMut<CubeGesture>,
    mut puzzle: ResMut<CubePuzzle>,
    mut last_hit: ResMut<LastCubeHit>,
    mut rotated: MessageWriter<FaceRotated>,
) {
    // Leaving the window always cancels, whatever else happened this frame
    if cursor_left.read().count() > 0 {
        if touch_state.active_touch_id.is_none() {
            gesture.0.pointer_leave();
        }
        return;
    }

    if touch_state.active_touch_id.is_some() {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(position) = window.cursor_position() else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        begin_drag(
            &mut gesture,
            &mut last_hit,
            camera_query.single().ok(),
            window,
            position,
        );
    }

    if mouse.just_released(MouseButton::Left) {
        end_drag(&mut gesture, &mut puzzle, &mut rotated, window, position);
    } else if mouse.pressed(MouseButton::Left) && gesture.0.is_dragging() {
        if let Some(sample) = DragSample::from_viewport(position, window.size()) {
            gesture.0.pointer_move(sample);
        }
    }
}

/// System to drive drags from the first finger on a touchscreen.
pub fn track_touch_gestures(
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<PersistentCamera>>,
    mut touch_state: ResMut<TouchState>,
    mut gesture: ResMut<CubeGesture>,
    mut puzzle: ResMut<CubePuzzle>,
    mut last_hit: ResMut<LastCubeHit>,
    mut rotated: MessageWriter<FaceRotated>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    // Handle new touch starts; extra fingers never start a second drag
    for touch in touches.iter_just_pressed() {
        if touch_state.active_touch_id.is_none() && !gesture.0.is_dragging() {
            touch_state.active_touch_id = Some(touch.id());
            begin_drag(
                &mut gesture,
                &mut last_hit,
                camera_query.single().ok(),
                window,
                touch.position(),
            );
        }
    }

    // Track touch movement
    for touch in touches.iter() {
        if Some(touch.id()) == touch_state.active_touch_id {
            if let Some(sample) = DragSample::from_viewport(touch.position(), window.size()) {
                gesture.0.pointer_move(sample);
            }
        }
    }

    // Handle touch releases
    for touch in touches.iter_just_released() {
        if Some(touch.id()) == touch_state.active_touch_id {
            touch_state.active_touch_id = None;
            end_drag(&mut gesture, &mut puzzle, &mut rotated, window, touch.position());
        }
    }

    // Handle cancelled touches
    for touch in touches.iter_just_canceled() {
        if Some(touch.id()) == touch_state.active_touch_id {
            touch_state.active_touch_id = None;
            gesture.0.pointer_leave();
        }
    }
}
