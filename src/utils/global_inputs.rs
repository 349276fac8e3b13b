//! Keyboard controls: puzzle commands, face turns and display mode.
use bevy::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};

#[cfg(not(target_arch = "wasm32"))]
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::utils::objects::{CubePuzzle, FaceRotated, GameClock, GameSettings, RandomGen};
use shared::{Face, FaceRotationCommand, RotationDirection};

pub struct InputsPlugin;

impl Plugin for InputsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (handle_puzzle_input, handle_face_turn_input));

        // The browser owns fullscreen on the web, so ESC is left to it there
        #[cfg(not(target_arch = "wasm32"))]
        app.add_systems(Update, handle_display_input);
    }
}

/// Atomic index to cycle different display modes
#[cfg(not(target_arch = "wasm32"))]
static DISPLAY_RING_IDX: AtomicUsize = AtomicUsize::new(0);

/// Cycle between windowed and borderless fullscreen (ESC).
/// The cursor stays free in both modes since faces are turned by dragging.
#[cfg(not(target_arch = "wasm32"))]
pub fn toggle_display_mode_ring(window: &mut Window) {
    // Compute the next index in a cycle of 2 (0, 1, 0, 1, ...)
    let next = (DISPLAY_RING_IDX.fetch_add(1, Ordering::SeqCst) + 1) % 2;
    DISPLAY_RING_IDX.store(next, Ordering::SeqCst);

    window.mode = match next {
        1 => WindowMode::BorderlessFullscreen(MonitorSelection::Current),
        _ => WindowMode::Windowed,
    };
}

/// Handles ESC key to toggle display modes
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_display_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        let Ok(mut window) = windows.single_mut() else {
            return;
        };
        toggle_display_mode_ring(&mut window);
        info!("Window mode is now {:?}", window.mode);
    }
}

/// SPACE scrambles, ENTER resets, BACKSPACE undoes the last move.
pub fn handle_puzzle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    settings: Res<GameSettings>,
    mut random_gen: ResMut<RandomGen>,
    mut puzzle: ResMut<CubePuzzle>,
    mut clock: ResMut<GameClock>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        let length = settings.0.scramble.length;
        let scramble = puzzle.0.scramble(&mut random_gen.random_gen, length);
        let notation: Vec<String> = scramble.iter().map(ToString::to_string).collect();
        info!("Scrambled: {}", notation.join(" "));

        clock.start_time = Some(time.elapsed());
        clock.end_time = None;
    }

    if keyboard.just_pressed(KeyCode::Enter) {
        puzzle.0.reset();
        clock.start_time = None;
        clock.end_time = None;
        info!("Cube reset");
    }

    if keyboard.just_pressed(KeyCode::Backspace) {
        match puzzle.0.undo() {
            Ok(Some(command)) => info!("Undid {}", command),
            Ok(None) => debug!("Nothing to undo"),
            Err(e) => warn!("Undo failed: {}", e),
        }
    }
}

/// Face letter keys turn clockwise, with Shift counterclockwise.
pub fn handle_face_turn_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut puzzle: ResMut<CubePuzzle>,
    mut rotated: MessageWriter<FaceRotated>,
) {
    const FACE_KEYS: [(KeyCode, Face); 6] = [
        (KeyCode::KeyF, Face::F),
        (KeyCode::KeyB, Face::B),
        (KeyCode::KeyL, Face::L),
        (KeyCode::KeyR, Face::R),
        (KeyCode::KeyU, Face::U),
        (KeyCode::KeyD, Face::D),
    ];

    let direction = if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
        RotationDirection::CounterClockwise
    } else {
        RotationDirection::Clockwise
    };

    for (key, face) in FACE_KEYS {
        if !keyboard.just_pressed(key) {
            continue;
        }
        let command = FaceRotationCommand::new(face, direction);
        match puzzle.0.apply(command) {
            Ok(_) => {
                rotated.write(FaceRotated(command));
            }
            Err(e) => warn!("Turn {} rejected: {}", command, e),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn escape_cycles_between_windowed_and_borderless() {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, handle_display_input);
        let window = app
            .world_mut()
            .spawn((Window::default(), PrimaryWindow))
            .id();

        let mut modes = Vec::new();
        for _ in 0..2 {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.release(KeyCode::Escape);
            keys.clear();
            keys.press(KeyCode::Escape);
            app.update();
            modes.push(app.world().get::<Window>(window).map(|window| window.mode));
        }

        assert_eq!(
            modes,
            vec![
                Some(WindowMode::BorderlessFullscreen(MonitorSelection::Current)),
                Some(WindowMode::Windowed),
            ]
        );
    }
}
