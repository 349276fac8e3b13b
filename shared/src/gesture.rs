//! Drag gesture interpretation.
//!
//! A drag that starts on a cube face becomes a single quarter turn of that
//! face. The interpreter is an explicit two-phase state machine (idle and
//! dragging); pointer events are the only things that move it between phases.

use bevy_math::{Vec2, Vec3};
use std::fmt;

use crate::config::GestureConfig;
use crate::face::{resolve_face, Face, FaceRotationCommand, RotationDirection};

/// Normalized pointer position: both axes in [-1, 1], Y pointing up.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DragSample {
    pub x: f32,
    pub y: f32,
}

impl DragSample {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Normalize a viewport position in logical pixels (origin top-left,
    /// Y down) against the viewport size. Returns `None` for an empty viewport.
    pub fn from_viewport(position: Vec2, size: Vec2) -> Option<Self> {
        if size.x <= 0.0 || size.y <= 0.0 {
            return None;
        }
        let x = (position.x / size.x) * 2.0 - 1.0;
        let y = 1.0 - (position.y / size.y) * 2.0;
        Some(Self::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0)))
    }
}

/// Which horizontal band of the viewport the drag started in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Row {
    Top,
    Bottom,
}

/// Drag axis whose sign decides the turn direction for a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DragAxis {
    X,
    Y,
}

/// Direction produced by a top-row drag along `axis` in the positive sense.
/// A non-positive delta inverts it, and the bottom row inverts it again.
#[derive(Clone, Copy, Debug)]
struct DirectionRule {
    axis: DragAxis,
    positive_top: RotationDirection,
}

const fn direction_rule(face: Face) -> DirectionRule {
    match face {
        Face::F | Face::B | Face::U | Face::D => DirectionRule {
            axis: DragAxis::X,
            positive_top: RotationDirection::Clockwise,
        },
        Face::R => DirectionRule {
            axis: DragAxis::Y,
            positive_top: RotationDirection::CounterClockwise,
        },
        Face::L => DirectionRule {
            axis: DragAxis::Y,
            positive_top: RotationDirection::Clockwise,
        },
    }
}

impl GestureConfig {
    /// `Row::Top` only when `start_y` is strictly above the top-row threshold.
    pub fn classify_row(&self, start_y: f32) -> Row {
        if start_y > self.top_row_threshold {
            Row::Top
        } else {
            Row::Bottom
        }
    }

    /// Turn direction for a drag from `start` to `end` on `face`, or `None`
    /// when the drag is shorter than the drag threshold.
    ///
    /// The deciding delta is fixed per face (X for F/B/U/D, Y for R/L) and
    /// does not depend on which delta is larger.
    pub fn resolve_direction(
        &self,
        start: DragSample,
        end: DragSample,
        face: Face,
        row: Row,
    ) -> Option<RotationDirection> {
        let delta_x = end.x - start.x;
        let delta_y = end.y - start.y;
        let magnitude = delta_x.hypot(delta_y);

        // Negated so that NaN deltas count as too small
        if !(magnitude >= self.drag_threshold) {
            return None;
        }

        let rule = direction_rule(face);
        let delta = match rule.axis {
            DragAxis::X => delta_x,
            DragAxis::Y => delta_y,
        };

        let top = if delta > 0.0 {
            rule.positive_top
        } else {
            rule.positive_top.inverse()
        };

        Some(match row {
            Row::Top => top,
            Row::Bottom => top.inverse(),
        })
    }
}

/// `classify_row` with the default threshold.
pub fn classify_row(start_y: f32) -> Row {
    GestureConfig::default().classify_row(start_y)
}

/// `resolve_direction` with the default thresholds.
pub fn resolve_direction(
    start: DragSample,
    end: DragSample,
    face: Face,
    row: Row,
) -> Option<RotationDirection> {
    GestureConfig::default().resolve_direction(start, end, face, row)
}

/// Data tracked while a drag is in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub start: DragSample,
    pub current: DragSample,
    pub face: Option<Face>,
    pub row: Row,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging(DragState),
}

/// What a pointer-up or pointer-leave did to the gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    /// No gesture was in progress.
    Ignored,
    /// The gesture was abandoned without a turn.
    Cancelled,
    /// The drag did not start on a cube face.
    NoFace,
    /// The drag was too short.
    BelowThreshold,
    /// A turn was emitted and the callback accepted it.
    Rotated(FaceRotationCommand),
    /// A turn was emitted but the callback reported an error.
    Rejected(FaceRotationCommand),
}

impl GestureOutcome {
    /// The emitted turn, whether or not the callback accepted it.
    pub fn command(&self) -> Option<FaceRotationCommand> {
        match *self {
            GestureOutcome::Rotated(command) | GestureOutcome::Rejected(command) => Some(command),
            _ => None,
        }
    }
}

/// Turns pointer events into face rotation commands.
#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    config: GestureConfig,
    phase: GesturePhase,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: GesturePhase::Idle,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging(_))
    }

    pub fn drag(&self) -> Option<&DragState> {
        match &self.phase {
            GesturePhase::Dragging(drag) => Some(drag),
            GesturePhase::Idle => None,
        }
    }

    /// Start a drag. `hit_normal` is the surface normal under the pointer,
    /// if the pointer is over the cube. A drag starts even without a face;
    /// it just cannot produce a turn.
    ///
    /// Returns `false` when a drag is already in progress; the event is
    /// ignored in that case.
    pub fn pointer_down(&mut self, sample: DragSample, hit_normal: Option<Vec3>) -> bool {
        if self.is_dragging() {
            log::debug!("Ignoring pointer down at {sample:?}: drag already in progress");
            return false;
        }

        let face = hit_normal.and_then(resolve_face);
        let row = self.config.classify_row(sample.y);
        log::debug!("Drag started at {sample:?} on face {face:?}, row {row:?}");

        self.phase = GesturePhase::Dragging(DragState {
            start: sample,
            current: sample,
            face,
            row,
        });
        true
    }

    /// Track the pointer while dragging. Ignored while idle.
    pub fn pointer_move(&mut self, sample: DragSample) -> bool {
        match &mut self.phase {
            GesturePhase::Dragging(drag) => {
                drag.current = sample;
                true
            }
            GesturePhase::Idle => false,
        }
    }

    /// Finish the drag. When it resolves to a turn, `on_face_rotate` is
    /// called exactly once with it. Errors from the callback are logged and
    /// swallowed. The interpreter is idle afterwards in every case.
    pub fn pointer_up<F, E>(&mut self, end: DragSample, on_face_rotate: F) -> GestureOutcome
    where
        F: FnOnce(FaceRotationCommand) -> Result<(), E>,
        E: fmt::Display,
    {
        let GesturePhase::Dragging(drag) = std::mem::take(&mut self.phase) else {
            return GestureOutcome::Ignored;
        };

        let Some(face) = drag.face else {
            log::debug!("Drag released without a face, no turn");
            return GestureOutcome::NoFace;
        };

        let Some(direction) = self
            .config
            .resolve_direction(drag.start, end, face, drag.row)
        else {
            log::debug!("Drag on {face} too short, no turn");
            return GestureOutcome::BelowThreshold;
        };

        let command = FaceRotationCommand::new(face, direction);
        match on_face_rotate(command) {
            Ok(()) => {
                log::debug!("Drag resolved to {command}");
                GestureOutcome::Rotated(command)
            }
            Err(e) => {
                log::warn!("Face rotation {command} failed: {e}");
                GestureOutcome::Rejected(command)
            }
        }
    }

    /// Pointer left the surface: abandon any drag without a turn.
    pub fn pointer_leave(&mut self) -> GestureOutcome {
        match std::mem::take(&mut self.phase) {
            GesturePhase::Dragging(_) => {
                log::debug!("Drag cancelled");
                GestureOutcome::Cancelled
            }
            GesturePhase::Idle => GestureOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn accept(_: FaceRotationCommand) -> Result<(), Infallible> {
        Ok(())
    }

    #[test]
    fn row_threshold_is_exclusive() {
        assert_eq!(classify_row(0.1), Row::Bottom);
        assert_eq!(classify_row(0.1001), Row::Top);
        assert_eq!(classify_row(0.0), Row::Bottom);
        assert_eq!(classify_row(-0.8), Row::Bottom);
        assert_eq!(classify_row(1.0), Row::Top);
    }

    #[test]
    fn direction_table_scenarios() {
        let origin = DragSample::new(0.0, 0.0);
        assert_eq!(
            resolve_direction(origin, DragSample::new(0.5, 0.0), Face::F, Row::Top),
            Some(RotationDirection::Clockwise)
        );
        assert_eq!(
            resolve_direction(origin, DragSample::new(0.5, 0.0), Face::F, Row::Bottom),
            Some(RotationDirection::CounterClockwise)
        );
        assert_eq!(
            resolve_direction(origin, DragSample::new(0.0, 0.5), Face::R, Row::Top),
            Some(RotationDirection::CounterClockwise)
        );
        assert_eq!(
            resolve_direction(origin, DragSample::new(0.0, -0.5), Face::L, Row::Bottom),
            Some(RotationDirection::Clockwise)
        );
    }

    #[test]
    fn deciding_axis_is_fixed_per_face() {
        // Mostly vertical drag on F still keys off the small positive delta_x
        let start = DragSample::new(0.0, 0.0);
        let end = DragSample::new(0.02, -0.6);
        assert_eq!(
            resolve_direction(start, end, Face::F, Row::Top),
            Some(RotationDirection::Clockwise)
        );

        // Mostly horizontal drag on R keys off the small negative delta_y
        let end = DragSample::new(0.7, -0.01);
        assert_eq!(
            resolve_direction(start, end, Face::R, Row::Top),
            Some(RotationDirection::Clockwise)
        );
    }

    #[test]
    fn short_drags_resolve_to_nothing() {
        let start = DragSample::new(0.3, 0.3);
        let end = DragSample::new(0.305, 0.305);
        for face in Face::ALL {
            assert_eq!(resolve_direction(start, end, face, Row::Top), None);
        }
    }

    #[test]
    fn viewport_normalization_flips_y() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(
            DragSample::from_viewport(Vec2::new(400.0, 300.0), size),
            Some(DragSample::new(0.0, 0.0))
        );
        assert_eq!(
            DragSample::from_viewport(Vec2::new(0.0, 0.0), size),
            Some(DragSample::new(-1.0, 1.0))
        );
        assert_eq!(DragSample::from_viewport(Vec2::ZERO, Vec2::ZERO), None);
    }

    #[test]
    fn full_drag_emits_one_command_and_returns_to_idle() {
        let mut gesture = GestureInterpreter::default();
        assert!(gesture.pointer_down(DragSample::new(0.0, 0.5), Some(Vec3::Z)));
        assert!(gesture.is_dragging());

        let mut calls = Vec::new();
        let outcome = gesture.pointer_up(DragSample::new(0.4, 0.5), |command| {
            calls.push(command);
            Ok::<(), Infallible>(())
        });

        let expected = FaceRotationCommand::clockwise(Face::F);
        assert_eq!(outcome, GestureOutcome::Rotated(expected));
        assert_eq!(calls, vec![expected]);
        assert_eq!(gesture.phase(), &GesturePhase::Idle);
    }

    #[test]
    fn second_pointer_down_is_ignored() {
        let mut gesture = GestureInterpreter::default();
        assert!(gesture.pointer_down(DragSample::new(0.0, 0.5), Some(Vec3::Z)));
        assert!(!gesture.pointer_down(DragSample::new(0.0, -0.5), Some(Vec3::X)));

        let drag = gesture.drag().copied().expect("still dragging");
        assert_eq!(drag.face, Some(Face::F));
        assert_eq!(drag.row, Row::Top);
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut gesture = GestureInterpreter::default();
        assert!(!gesture.pointer_move(DragSample::new(0.2, 0.2)));
        assert_eq!(gesture.phase(), &GesturePhase::Idle);
    }

    #[test]
    fn moves_while_dragging_update_current_only() {
        let mut gesture = GestureInterpreter::default();
        gesture.pointer_down(DragSample::new(0.1, 0.2), Some(Vec3::Y));
        assert!(gesture.pointer_move(DragSample::new(0.3, 0.4)));

        let drag = gesture.drag().copied().expect("dragging");
        assert_eq!(drag.start, DragSample::new(0.1, 0.2));
        assert_eq!(drag.current, DragSample::new(0.3, 0.4));
    }

    #[test]
    fn drag_without_face_emits_nothing() {
        let mut gesture = GestureInterpreter::default();
        assert!(gesture.pointer_down(DragSample::new(0.0, 0.0), None));
        let outcome = gesture.pointer_up(DragSample::new(0.9, 0.0), |_| -> Result<(), Infallible> {
            panic!("callback must not run without a face")
        });
        assert_eq!(outcome, GestureOutcome::NoFace);
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn short_drag_emits_nothing() {
        let mut gesture = GestureInterpreter::default();
        gesture.pointer_down(DragSample::new(0.0, 0.0), Some(Vec3::X));
        let outcome = gesture.pointer_up(DragSample::new(0.005, 0.0), accept);
        assert_eq!(outcome, GestureOutcome::BelowThreshold);
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn pointer_leave_cancels_without_command() {
        let mut gesture = GestureInterpreter::default();
        gesture.pointer_down(DragSample::new(0.0, 0.5), Some(Vec3::Z));
        assert_eq!(gesture.pointer_leave(), GestureOutcome::Cancelled);
        assert_eq!(gesture.pointer_leave(), GestureOutcome::Ignored);

        // The release after a cancel finds nothing to finish
        let outcome = gesture.pointer_up(DragSample::new(0.5, 0.5), accept);
        assert_eq!(outcome, GestureOutcome::Ignored);
    }

    #[test]
    fn callback_errors_do_not_wedge_the_interpreter() {
        let mut gesture = GestureInterpreter::default();
        gesture.pointer_down(DragSample::new(0.0, -0.5), Some(Vec3::Y));
        let outcome = gesture.pointer_up(DragSample::new(-0.3, -0.5), |_| Err("puzzle locked"));

        let expected = FaceRotationCommand::clockwise(Face::U);
        assert_eq!(outcome, GestureOutcome::Rejected(expected));
        assert_eq!(outcome.command(), Some(expected));
        assert!(!gesture.is_dragging());

        assert!(gesture.pointer_down(DragSample::new(0.0, -0.5), Some(Vec3::Y)));
    }

    #[test]
    fn custom_thresholds_are_honoured() {
        let config = GestureConfig {
            drag_threshold: 0.2,
            top_row_threshold: -0.5,
        };
        let mut gesture = GestureInterpreter::new(config);
        gesture.pointer_down(DragSample::new(0.0, -0.2), Some(Vec3::Z));
        assert_eq!(gesture.drag().map(|d| d.row), Some(Row::Top));
        assert_eq!(
            gesture.pointer_up(DragSample::new(0.1, -0.2), accept),
            GestureOutcome::BelowThreshold
        );
    }
}
