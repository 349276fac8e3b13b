//! Puzzle session: the cube plus move history, scrambling and the solved lock.

use rand::Rng;
use thiserror::Error;

use crate::cube::Cube;
use crate::face::{Face, FaceRotationCommand, RotationDirection};

// Regenerate scrambles that happen to cancel out, up to this many times
const MAX_SCRAMBLE_ATTEMPTS: usize = 16;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("cube is locked after being solved; scramble or reset to keep playing")]
    Locked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PuzzleStatus {
    /// Free play: never scrambled since the last reset.
    #[default]
    Fresh,
    /// Scrambled and not yet solved.
    Scrambled,
    /// Solved after a scramble. Moves are rejected until the next scramble or reset.
    Solved,
}

#[derive(Clone, Debug, Default)]
pub struct Puzzle {
    cube: Cube,
    history: Vec<FaceRotationCommand>,
    last_scramble: Vec<FaceRotationCommand>,
    status: PuzzleStatus,
}

impl Puzzle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn status(&self) -> PuzzleStatus {
        self.status
    }

    pub fn is_locked(&self) -> bool {
        self.status == PuzzleStatus::Solved
    }

    /// Moves made since the last scramble or reset.
    pub fn history(&self) -> &[FaceRotationCommand] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn last_scramble(&self) -> &[FaceRotationCommand] {
        &self.last_scramble
    }

    /// Turn one face and record it.
    pub fn apply(&mut self, command: FaceRotationCommand) -> Result<PuzzleStatus, MoveError> {
        if self.is_locked() {
            return Err(MoveError::Locked);
        }
        self.cube.turn(command);
        self.history.push(command);
        self.update_status();
        Ok(self.status)
    }

    /// Revert the most recent recorded move. `Ok(None)` when there is nothing to undo.
    pub fn undo(&mut self) -> Result<Option<FaceRotationCommand>, MoveError> {
        if self.is_locked() {
            return Err(MoveError::Locked);
        }
        let Some(command) = self.history.pop() else {
            return Ok(None);
        };
        self.cube.turn(command.inverse());
        self.update_status();
        Ok(Some(command))
    }

    /// Back to a solved cube in free play.
    pub fn reset(&mut self) {
        self.cube = Cube::solved();
        self.history.clear();
        self.last_scramble.clear();
        self.status = PuzzleStatus::Fresh;
    }

    /// Reset, then apply `length` random quarter turns. Consecutive turns
    /// never share an axis, so no turn directly cancels its predecessor.
    /// The scramble is not part of the undo history.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R, length: usize) -> &[FaceRotationCommand] {
        self.reset();
        if length == 0 {
            return &self.last_scramble;
        }

        for _ in 0..MAX_SCRAMBLE_ATTEMPTS {
            let moves = random_moves(rng, length);
            let mut cube = Cube::solved();
            for command in &moves {
                cube.turn(*command);
            }
            if !cube.is_solved() {
                self.cube = cube;
                self.last_scramble = moves;
                self.status = PuzzleStatus::Scrambled;
                break;
            }
        }

        if self.status != PuzzleStatus::Scrambled {
            log::warn!("Failed to produce an unsolved scramble of length {length}");
        }
        &self.last_scramble
    }

    fn update_status(&mut self) {
        if self.status == PuzzleStatus::Scrambled && self.cube.is_solved() {
            log::info!("Cube solved in {} moves", self.history.len());
            self.status = PuzzleStatus::Solved;
        }
    }
}

fn random_moves<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<FaceRotationCommand> {
    let mut moves: Vec<FaceRotationCommand> = Vec::with_capacity(length);
    while moves.len() < length {
        let face = Face::ALL[rng.random_range(0..Face::ALL.len())];
        if let Some(previous) = moves.last() {
            if previous.face.normal().abs() == face.normal().abs() {
                continue;
            }
        }
        let direction = if rng.random_bool(0.5) {
            RotationDirection::Clockwise
        } else {
            RotationDirection::CounterClockwise
        };
        moves.push(FaceRotationCommand::new(face, direction));
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn free_play_never_locks() {
        let mut puzzle = Puzzle::new();
        let r = FaceRotationCommand::clockwise(Face::R);
        assert_eq!(puzzle.apply(r), Ok(PuzzleStatus::Fresh));
        assert_eq!(puzzle.apply(r.inverse()), Ok(PuzzleStatus::Fresh));
        assert!(puzzle.cube().is_solved());
        assert!(!puzzle.is_locked());
    }

    #[test]
    fn undo_restores_previous_state() {
        let mut puzzle = Puzzle::new();
        puzzle.apply(FaceRotationCommand::clockwise(Face::F)).unwrap();
        let before = puzzle.cube().clone();
        puzzle.apply(FaceRotationCommand::counter_clockwise(Face::D)).unwrap();

        assert_eq!(
            puzzle.undo(),
            Ok(Some(FaceRotationCommand::counter_clockwise(Face::D)))
        );
        assert_eq!(puzzle.cube(), &before);
        assert_eq!(puzzle.move_count(), 1);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut puzzle = Puzzle::new();
        assert_eq!(puzzle.undo(), Ok(None));
        assert!(puzzle.cube().is_solved());
    }

    #[test]
    fn solving_a_scramble_locks_until_reset() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut puzzle = Puzzle::new();
        let scramble = puzzle.scramble(&mut rng, 10).to_vec();
        assert_eq!(puzzle.status(), PuzzleStatus::Scrambled);
        assert!(puzzle.history().is_empty());

        for command in scramble.iter().rev() {
            puzzle.apply(command.inverse()).unwrap();
        }
        assert_eq!(puzzle.status(), PuzzleStatus::Solved);
        assert!(puzzle.cube().is_solved());
        assert_eq!(puzzle.move_count(), 10);

        let err = puzzle.apply(FaceRotationCommand::clockwise(Face::U));
        assert_eq!(err, Err(MoveError::Locked));
        assert_eq!(puzzle.undo(), Err(MoveError::Locked));

        puzzle.reset();
        assert_eq!(puzzle.status(), PuzzleStatus::Fresh);
        assert!(puzzle.apply(FaceRotationCommand::clockwise(Face::U)).is_ok());
    }

    #[test]
    fn scrambles_are_deterministic_per_seed() {
        let mut a = Puzzle::new();
        let mut b = Puzzle::new();
        a.scramble(&mut ChaCha8Rng::seed_from_u64(69), 20);
        b.scramble(&mut ChaCha8Rng::seed_from_u64(69), 20);
        assert_eq!(a.last_scramble(), b.last_scramble());
        assert_eq!(a.cube(), b.cube());
    }

    #[test]
    fn scramble_never_repeats_an_axis() {
        let mut puzzle = Puzzle::new();
        let moves = puzzle.scramble(&mut ChaCha8Rng::seed_from_u64(3), 40).to_vec();
        assert_eq!(moves.len(), 40);
        for pair in moves.windows(2) {
            assert_ne!(pair[0].face.normal().abs(), pair[1].face.normal().abs());
        }
    }

    #[test]
    fn zero_length_scramble_stays_fresh() {
        let mut puzzle = Puzzle::new();
        assert!(puzzle.scramble(&mut ChaCha8Rng::seed_from_u64(1), 0).is_empty());
        assert_eq!(puzzle.status(), PuzzleStatus::Fresh);
    }
}
