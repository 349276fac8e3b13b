//! Systems logic based on the gamephase.

use crate::utils::game_functions::{
    animate_face_flash, despawn_ui, repaint_stickers, setup_solved_ui, start_face_flash,
    sync_game_phase, update_status_text, update_ui_scale,
};
use crate::utils::objects::{
    CubeGesture, CubePuzzle, FaceFlash, FaceRotated, GameClock, GamePhase, GameSettings,
    RandomGen,
};
use crate::utils::setup::{load_settings, setup_environment, setup_ui};
use bevy::prelude::*;

// Plugin for managing all the game systems based on the current game phase.
pub struct SystemsLogicPlugin;

impl Plugin for SystemsLogicPlugin {
    /// Builds the plugin by adding the systems to the app.
    fn build(&self, app: &mut App) {
        app.init_state::<GamePhase>()
            .init_resource::<GameSettings>()
            .init_resource::<RandomGen>()
            .init_resource::<CubePuzzle>()
            .init_resource::<CubeGesture>()
            .init_resource::<GameClock>()
            .init_resource::<FaceFlash>()
            .add_message::<FaceRotated>()
            // Config first, the scene reads the puzzle it seeds
            .add_systems(Startup, (load_settings, setup_environment, setup_ui).chain())
            // Global UI responsiveness system (runs every frame)
            .add_systems(Update, update_ui_scale)
            // Puzzle to screen, after every input system had its say
            .add_systems(
                PostUpdate,
                (
                    sync_game_phase,
                    repaint_stickers,
                    start_face_flash,
                    animate_face_flash,
                    update_status_text,
                )
                    .chain(),
            )
            // Solved State
            .add_systems(OnEnter(GamePhase::Solved), setup_solved_ui)
            .add_systems(OnExit(GamePhase::Solved), despawn_ui);
    }
}
