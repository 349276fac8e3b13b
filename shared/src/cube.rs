//! Sticker-level model of a 3x3x3 cube.
//!
//! A sticker slot is identified by the integer position of its cubie
//! (each coordinate in -1..=1) and the outward normal it faces. Turning a
//! face rotates every slot in that face's layer a quarter turn about the
//! face normal, so centers never move and the solved state is unique.

use bevy_math::IVec3;

use crate::face::{Face, FaceRotationCommand, RotationDirection};

pub const STICKERS_PER_FACE: usize = 9;
pub const STICKER_COUNT: usize = 6 * STICKERS_PER_FACE;

/// Fixed location of a sticker on the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StickerSlot {
    pub position: IVec3,
    pub normal: IVec3,
}

/// The two axes spanning a face, in a fixed order.
fn tangent_axes(face: Face) -> (IVec3, IVec3) {
    match face {
        Face::L | Face::R => (IVec3::Y, IVec3::Z),
        Face::U | Face::D => (IVec3::X, IVec3::Z),
        Face::F | Face::B => (IVec3::X, IVec3::Y),
    }
}

impl StickerSlot {
    /// Slot stored at `index`; slots are grouped by face in `Face::ALL` order.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= STICKER_COUNT {
            return None;
        }
        let face = Face::ALL[index / STICKERS_PER_FACE];
        let local = (index % STICKERS_PER_FACE) as i32;
        let (u, v) = tangent_axes(face);
        let normal = face.normal();
        Some(Self {
            position: normal + u * (local / 3 - 1) + v * (local % 3 - 1),
            normal,
        })
    }

    /// Inverse of `from_index`. `None` if the slot is not on the cube surface.
    pub fn index(&self) -> Option<usize> {
        let face = Face::from_normal(self.normal)?;
        if self.position.dot(self.normal) != 1 || self.position.abs().max_element() > 1 {
            return None;
        }
        let (u, v) = tangent_axes(face);
        let a = self.position.dot(u) + 1;
        let b = self.position.dot(v) + 1;
        Some(face.index() * STICKERS_PER_FACE + (a * 3 + b) as usize)
    }

    /// Face this slot belongs to.
    pub fn face(&self) -> Option<Face> {
        Face::from_normal(self.normal)
    }

    pub fn is_center(&self) -> bool {
        self.position == self.normal
    }
}

/// Quarter-turn rotation of `v` about the unit axis `axis`.
/// Clockwise is as seen from the tip of `axis`, i.e. -90 degrees right-handed.
fn quarter_turn(v: IVec3, axis: IVec3, direction: RotationDirection) -> IVec3 {
    let along = axis * axis.dot(v);
    let across = axis.cross(v);
    match direction {
        RotationDirection::Clockwise => along - across,
        RotationDirection::CounterClockwise => along + across,
    }
}

/// Colors of all 54 stickers. A color is named by the face whose center
/// carries it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    stickers: [Face; STICKER_COUNT],
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}

impl Cube {
    pub fn solved() -> Self {
        Self {
            stickers: std::array::from_fn(|i| Face::ALL[i / STICKERS_PER_FACE]),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.stickers
            .iter()
            .enumerate()
            .all(|(i, color)| *color == Face::ALL[i / STICKERS_PER_FACE])
    }

    /// Color at `slot`, if the slot is on the cube surface.
    pub fn sticker(&self, slot: StickerSlot) -> Option<Face> {
        slot.index().map(|i| self.stickers[i])
    }

    /// All slots with their current colors, in slot index order.
    pub fn stickers(&self) -> impl Iterator<Item = (StickerSlot, Face)> + '_ {
        self.stickers.iter().enumerate().filter_map(|(i, color)| {
            StickerSlot::from_index(i).map(|slot| (slot, *color))
        })
    }

    /// Apply one quarter turn.
    pub fn turn(&mut self, command: FaceRotationCommand) {
        let axis = command.face.normal();
        let mut next = self.stickers;

        for (slot, color) in self.stickers() {
            if slot.position.dot(axis) != 1 {
                continue;
            }
            let moved = StickerSlot {
                position: quarter_turn(slot.position, axis, command.direction),
                normal: quarter_turn(slot.normal, axis, command.direction),
            };
            if let Some(target) = moved.index() {
                next[target] = color;
            }
        }

        self.stickers = next;
    }

    /// Number of stickers not matching their face's center.
    pub fn misplaced_stickers(&self) -> usize {
        self.stickers
            .iter()
            .enumerate()
            .filter(|(i, color)| **color != Face::ALL[i / STICKERS_PER_FACE])
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_indices_round_trip_over_the_whole_surface() {
        for index in 0..STICKER_COUNT {
            let slot = StickerSlot::from_index(index).unwrap();
            assert_eq!(slot.index(), Some(index));
            assert_eq!(slot.position.dot(slot.normal), 1);
        }
        assert_eq!(StickerSlot::from_index(STICKER_COUNT), None);
    }

    #[test]
    fn off_surface_slots_have_no_index() {
        let inner = StickerSlot {
            position: IVec3::ZERO,
            normal: IVec3::X,
        };
        assert_eq!(inner.index(), None);
        let diagonal = StickerSlot {
            position: IVec3::new(1, 1, 1),
            normal: IVec3::ONE,
        };
        assert_eq!(diagonal.index(), None);
    }

    #[test]
    fn u_clockwise_moves_front_top_row_to_left() {
        let mut cube = Cube::solved();
        cube.turn(FaceRotationCommand::clockwise(Face::U));

        let left_top = StickerSlot {
            position: IVec3::new(-1, 1, 0),
            normal: IVec3::NEG_X,
        };
        assert_eq!(cube.sticker(left_top), Some(Face::F));

        let front_top = StickerSlot {
            position: IVec3::new(0, 1, 1),
            normal: IVec3::Z,
        };
        assert_eq!(cube.sticker(front_top), Some(Face::R));
    }

    #[test]
    fn centers_never_move() {
        let mut cube = Cube::solved();
        for face in Face::ALL {
            cube.turn(FaceRotationCommand::clockwise(face));
        }
        for (slot, color) in cube.stickers().filter(|(slot, _)| slot.is_center()) {
            assert_eq!(slot.face(), Some(color));
        }
    }

    #[test]
    fn single_turn_misplaces_twelve_stickers() {
        for face in Face::ALL {
            let mut cube = Cube::solved();
            cube.turn(FaceRotationCommand::counter_clockwise(face));
            assert_eq!(cube.misplaced_stickers(), 12, "face {face}");
            assert!(!cube.is_solved());
        }
    }

    #[test]
    fn turning_preserves_color_counts() {
        let mut cube = Cube::solved();
        for face in [Face::R, Face::U, Face::F, Face::L, Face::D, Face::B] {
            cube.turn(FaceRotationCommand::clockwise(face));
        }
        for face in Face::ALL {
            assert_eq!(cube.stickers().filter(|(_, c)| *c == face).count(), 9);
        }
    }
}
