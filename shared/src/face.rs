//! Cube faces, turn directions and the turn command produced by gestures.

use bevy_math::{IVec3, Vec3};
use std::fmt;

/// One of the six faces of the cube, named by standard notation.
///
/// Axes follow the renderer: +X is right, +Y is up, +Z points at the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    F,
    B,
    L,
    R,
    U,
    D,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::F, Face::B, Face::L, Face::R, Face::U, Face::D];

    /// Outward unit normal of the face.
    pub const fn normal(self) -> IVec3 {
        match self {
            Face::F => IVec3::Z,
            Face::B => IVec3::NEG_Z,
            Face::L => IVec3::NEG_X,
            Face::R => IVec3::X,
            Face::U => IVec3::Y,
            Face::D => IVec3::NEG_Y,
        }
    }

    /// Position of the face in `Face::ALL`, used to index per-face tables.
    pub const fn index(self) -> usize {
        match self {
            Face::F => 0,
            Face::B => 1,
            Face::L => 2,
            Face::R => 3,
            Face::U => 4,
            Face::D => 5,
        }
    }

    /// Face whose outward normal is exactly `normal`.
    pub fn from_normal(normal: IVec3) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.normal() == normal)
    }

    pub const fn letter(self) -> char {
        match self {
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
            Face::U => 'U',
            Face::D => 'D',
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Quarter-turn direction, as seen looking at the face from outside the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    pub const fn inverse(self) -> Self {
        match self {
            RotationDirection::Clockwise => RotationDirection::CounterClockwise,
            RotationDirection::CounterClockwise => RotationDirection::Clockwise,
        }
    }
}

/// A single quarter turn of one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceRotationCommand {
    pub face: Face,
    pub direction: RotationDirection,
}

impl FaceRotationCommand {
    pub const fn new(face: Face, direction: RotationDirection) -> Self {
        Self { face, direction }
    }

    pub const fn clockwise(face: Face) -> Self {
        Self::new(face, RotationDirection::Clockwise)
    }

    pub const fn counter_clockwise(face: Face) -> Self {
        Self::new(face, RotationDirection::CounterClockwise)
    }

    /// The turn that undoes this one.
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.direction.inverse())
    }
}

impl fmt::Display for FaceRotationCommand {
    /// Standard notation: `R` for clockwise, `R'` for counterclockwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            RotationDirection::Clockwise => write!(f, "{}", self.face),
            RotationDirection::CounterClockwise => write!(f, "{}'", self.face),
        }
    }
}

/// Map a surface normal to the face it points out of.
///
/// The component with the largest magnitude decides the axis and its sign
/// decides the side. Ties go to the first axis in X, Y, Z order. Returns
/// `None` for a zero or non-finite normal.
pub fn resolve_face(normal: Vec3) -> Option<Face> {
    if !normal.is_finite() || normal == Vec3::ZERO {
        return None;
    }

    let abs = normal.abs();
    let face = if abs.x >= abs.y && abs.x >= abs.z {
        if normal.x > 0.0 { Face::R } else { Face::L }
    } else if abs.y >= abs.z {
        if normal.y > 0.0 { Face::U } else { Face::D }
    } else if normal.z > 0.0 {
        Face::F
    } else {
        Face::B
    };
    Some(face)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_normals_resolve_to_their_face() {
        for face in Face::ALL {
            assert_eq!(resolve_face(face.normal().as_vec3()), Some(face));
        }
    }

    #[test]
    fn dominant_component_wins() {
        assert_eq!(resolve_face(Vec3::new(0.2, -0.9, 0.3)), Some(Face::D));
        assert_eq!(resolve_face(Vec3::new(-0.7, 0.1, 0.6)), Some(Face::L));
        assert_eq!(resolve_face(Vec3::new(0.1, 0.2, -0.97)), Some(Face::B));
    }

    #[test]
    fn ties_take_first_axis() {
        assert_eq!(resolve_face(Vec3::new(0.5, 0.5, 0.0)), Some(Face::R));
        assert_eq!(resolve_face(Vec3::new(0.0, -0.5, 0.5)), Some(Face::D));
    }

    #[test]
    fn degenerate_normals_resolve_to_nothing() {
        assert_eq!(resolve_face(Vec3::ZERO), None);
        assert_eq!(resolve_face(Vec3::new(f32::NAN, 1.0, 0.0)), None);
    }

    #[test]
    fn notation_marks_counterclockwise_with_prime() {
        assert_eq!(FaceRotationCommand::clockwise(Face::R).to_string(), "R");
        assert_eq!(FaceRotationCommand::counter_clockwise(Face::U).to_string(), "U'");
    }
}
