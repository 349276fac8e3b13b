//! This file defines the various objects, resources, and components used in the game.
use bevy::prelude::*;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

use shared::constants::cube_constants::FACE_COLORS;
use shared::constants::game_constants::SEED;
use shared::cube::StickerSlot;
use shared::hit::CubeHit;
use shared::{Face, FaceRotationCommand, GameConfig, GestureInterpreter, Puzzle};

/// Game phases, driven by the puzzle status
#[derive(States, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Free play on a cube that was never scrambled
    #[default]
    Idle,
    /// Scrambled and being solved
    Playing,
    /// Solved after a scramble, waiting for a new scramble or reset
    Solved,
}

/// Runtime configuration
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct GameSettings(pub GameConfig);

/// The puzzle being played
#[derive(Resource, Default)]
pub struct CubePuzzle(pub Puzzle);

/// Drag gesture state shared by mouse and touch input
#[derive(Resource, Default)]
pub struct CubeGesture(pub GestureInterpreter);

/// Last ray hit on the cube at drag start, kept for debug drawing
#[derive(Resource, Default)]
pub struct LastCubeHit(pub Option<CubeHit>);

/// Start and end of the current solve attempt
#[derive(Resource, Default)]
pub struct GameClock {
    pub start_time: Option<Duration>,
    pub end_time: Option<Duration>,
}

impl GameClock {
    /// Seconds since the scramble, frozen once solved.
    pub fn elapsed_secs(&self, now: Duration) -> Option<f32> {
        let start = self.start_time?;
        let end = self.end_time.unwrap_or(now);
        Some(end.saturating_sub(start).as_secs_f32())
    }
}

/// Face currently flashing after a turn
#[derive(Resource, Default)]
pub struct FaceFlash {
    pub face: Option<Face>,
    pub start_time: Option<Duration>,
}

/// Fired after a turn has been applied to the puzzle
#[derive(Message, Clone, Copy, Debug)]
pub struct FaceRotated(pub FaceRotationCommand);

/// Random number generator
#[derive(Resource)]
pub struct RandomGen {
    pub random_gen: ChaCha8Rng,
}

impl RandomGen {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            random_gen: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGen {
    fn default() -> Self {
        Self::from_seed(SEED)
    }
}

/// Sticker color for a face
pub fn face_color(face: Face) -> Color {
    let [r, g, b, a] = FACE_COLORS[face.index()];
    Color::srgba(r, g, b, a)
}

/// Cube body component
#[derive(Component)]
pub struct CubeBody;

/// A sticker entity and the slot it displays
#[derive(Component)]
pub struct Sticker {
    pub slot: StickerSlot,
}

/// A component that marks an entity as persistent (not despawned on reset)
#[derive(Component)]
pub struct PersistentCamera;

/// A component that marks an entity as a UI entity that is despawned on phase exit
#[derive(Component)]
pub struct UIEntity;

/// Status line at the top of the screen
#[derive(Component)]
pub struct StatusText;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_freezes_once_solved() {
        let mut clock = GameClock::default();
        assert_eq!(clock.elapsed_secs(Duration::from_secs(3)), None);

        clock.start_time = Some(Duration::from_secs(2));
        assert_eq!(clock.elapsed_secs(Duration::from_secs(5)), Some(3.0));

        clock.end_time = Some(Duration::from_secs(4));
        assert_eq!(clock.elapsed_secs(Duration::from_secs(60)), Some(2.0));
    }
}
