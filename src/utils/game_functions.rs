//! Core game logic and UI functions.
use bevy::prelude::*;

use crate::utils::objects::{
    face_color, CubePuzzle, FaceFlash, FaceRotated, GameClock, GamePhase, Sticker, StatusText,
    UIEntity,
};
use shared::constants::game_constants::{
    FACE_FLASH_DURATION, FACE_FLASH_INTENSITY, UI_REFERENCE_HEIGHT,
};
use shared::PuzzleStatus;

/// Spawns centered text on a dimmed screen.
pub fn spawn_centered_text_overlay(commands: &mut Commands, text: &str) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center, // horizontally center children
                align_items: AlignItems::Center,         // vertically center children
                ..default()
            },
            UIEntity, // Marker for despawning
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.55)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(text),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 1.0)),
                Node {
                    max_width: Val::Px(1200.0),
                    ..default()
                },
            ));
        });
}

/// Helper system to despawn every UI overlay
pub fn despawn_ui(mut commands: Commands, query: Query<Entity, With<UIEntity>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

/// Copies the puzzle state onto the sticker materials whenever the puzzle changed.
pub fn repaint_stickers(
    puzzle: Res<CubePuzzle>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sticker_query: Query<(&Sticker, &MeshMaterial3d<StandardMaterial>)>,
) {
    if !puzzle.is_changed() {
        return;
    }

    let cube = puzzle.0.cube();
    for (sticker, handle) in &sticker_query {
        let Some(face) = cube.sticker(sticker.slot) else {
            continue;
        };
        if let Some(mut material) = materials.get_mut(&handle.0) {
            material.base_color = face_color(face);
        }
    }
}

/// Starts the glow of the layer that just turned.
pub fn start_face_flash(
    time: Res<Time>,
    mut rotated: MessageReader<FaceRotated>,
    mut flash: ResMut<FaceFlash>,
) {
    // Only the latest turn of the frame is shown
    if let Some(FaceRotated(command)) = rotated.read().last() {
        flash.face = Some(command.face);
        flash.start_time = Some(time.elapsed());
    }
}

/// Fades the glow out over `FACE_FLASH_DURATION`.
pub fn animate_face_flash(
    time: Res<Time>,
    mut flash: ResMut<FaceFlash>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sticker_query: Query<(&Sticker, &MeshMaterial3d<StandardMaterial>)>,
) {
    let (Some(face), Some(start_time)) = (flash.face, flash.start_time) else {
        return;
    };

    let elapsed = time.elapsed().saturating_sub(start_time).as_secs_f32();
    let t = (elapsed / FACE_FLASH_DURATION).clamp(0.0, 1.0);
    let glow = LinearRgba::WHITE * (FACE_FLASH_INTENSITY * (1.0 - t));

    for (sticker, handle) in &sticker_query {
        let Some(mut material) = materials.get_mut(&handle.0) else {
            continue;
        };
        // Every sticker in the turning layer, side stickers included
        material.emissive = if sticker.slot.position.dot(face.normal()) == 1 {
            glow
        } else {
            LinearRgba::BLACK
        };
    }

    if t >= 1.0 {
        flash.face = None;
        flash.start_time = None;
    }
}

/// Keeps the game phase in step with the puzzle status.
pub fn sync_game_phase(
    puzzle: Res<CubePuzzle>,
    phase: Res<State<GamePhase>>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    let target = match puzzle.0.status() {
        PuzzleStatus::Fresh => GamePhase::Idle,
        PuzzleStatus::Scrambled => GamePhase::Playing,
        PuzzleStatus::Solved => GamePhase::Solved,
    };

    if *phase.get() != target {
        next_phase.set(target);
    }
}

/// Stops the clock and shows the result screen.
pub fn setup_solved_ui(
    mut commands: Commands,
    time: Res<Time>,
    puzzle: Res<CubePuzzle>,
    mut clock: ResMut<GameClock>,
) {
    clock.end_time = Some(time.elapsed());
    let elapsed = clock.elapsed_secs(time.elapsed()).unwrap_or_default();

    let text = format!(
        "SOLVED!\n\
        - Time taken: {:.2} seconds\n\
        - Moves: {}\n\n\
        SPACE to scramble again | ENTER to reset",
        elapsed,
        puzzle.0.move_count()
    );
    spawn_centered_text_overlay(&mut commands, &text);
}

/// Refreshes the status line at the top of the screen.
pub fn update_status_text(
    time: Res<Time>,
    puzzle: Res<CubePuzzle>,
    clock: Res<GameClock>,
    phase: Res<State<GamePhase>>,
    mut text_query: Query<&mut Text, With<StatusText>>,
) {
    let Ok(mut text) = text_query.single_mut() else {
        return;
    };

    let status = match phase.get() {
        GamePhase::Idle => "Free play",
        GamePhase::Playing => "Solving",
        GamePhase::Solved => "Solved",
    };

    let mut line = format!("{} | Moves: {}", status, puzzle.0.move_count());
    if let Some(elapsed) = clock.elapsed_secs(time.elapsed()) {
        line.push_str(&format!(" | Time: {:.1}s", elapsed));
    }

    let scramble = puzzle.0.last_scramble();
    if !scramble.is_empty() {
        let notation: Vec<String> = scramble.iter().map(ToString::to_string).collect();
        line.push_str(&format!("\nScramble: {}", notation.join(" ")));
    }

    // Avoid touching the text (and re-layouting it) when nothing changed
    if text.0 != line {
        text.0 = line;
    }
}

/// Responsive UI scaling based on window height.
pub fn update_ui_scale(mut ui_scale: ResMut<UiScale>, window_query: Query<&Window>) {
    let Ok(window) = window_query.single() else {
        return;
    };

    // Calculate scale based on window height (reference: 1080p)
    let scale = window.height() / UI_REFERENCE_HEIGHT;

    // Clamp scale to reasonable bounds (0.5x to 2.0x)
    let clamped_scale = scale.clamp(0.5, 2.0);

    ui_scale.0 = clamped_scale;
}
