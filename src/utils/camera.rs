//! Orbit camera around the cube.

use bevy::prelude::*;

use crate::utils::objects::{GameSettings, PersistentCamera};
use shared::constants::camera_3d_constants::{CAMERA_3D_SPEED_ROTATE, CAMERA_3D_SPEED_ZOOM};

pub struct Camera3dOrbitPlugin;

impl Plugin for Camera3dOrbitPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, camera_3d_orbit_inputs);
    }
}

/// Move the camera on its orbit by `yaw_delta` radians and `zoom_delta` units,
/// keeping its height and looking at the origin.
pub fn apply_orbit(
    transform: &mut Transform,
    yaw_delta: f32,
    zoom_delta: f32,
    min_radius: f32,
    max_radius: f32,
) {
    let position = transform.translation;
    let yaw = position.x.atan2(position.z) + yaw_delta;
    let radius = (position.xz().length() + zoom_delta).clamp(min_radius, max_radius);

    transform.translation = Vec3::new(radius * yaw.sin(), position.y, radius * yaw.cos());
    transform.look_at(Vec3::ZERO, Vec3::Y);
}

/// Orbiting 3D Camera System
/// Rotates around the cube with Left/Right and zooms in/out with Up/Down
pub fn camera_3d_orbit_inputs(
    keyboard: Res<ButtonInput<KeyCode>>,
    timer: Res<Time>,
    settings: Res<GameSettings>,
    mut camera_query: Query<&mut Transform, With<PersistentCamera>>,
) {
    let left = keyboard.pressed(KeyCode::ArrowLeft);
    let right = keyboard.pressed(KeyCode::ArrowRight);
    let up = keyboard.pressed(KeyCode::ArrowUp);
    let down = keyboard.pressed(KeyCode::ArrowDown);

    if !(left || right || up || down) {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let speed = CAMERA_3D_SPEED_ROTATE * timer.delta_secs();
    let zoom_speed = CAMERA_3D_SPEED_ZOOM * timer.delta_secs();

    let mut yaw_delta = 0.0;
    let mut zoom_delta = 0.0;
    if left {
        yaw_delta -= speed;
    }
    if right {
        yaw_delta += speed;
    }
    if up {
        zoom_delta -= zoom_speed;
    }
    if down {
        zoom_delta += zoom_speed;
    }

    let camera = &settings.0.camera;
    apply_orbit(
        &mut transform,
        yaw_delta,
        zoom_delta,
        camera.min_radius,
        camera.max_radius,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_keeps_height_and_clamps_radius() {
        let mut transform = Transform::from_xyz(0.0, 5.0, 8.0);

        apply_orbit(&mut transform, std::f32::consts::FRAC_PI_2, 0.0, 6.0, 20.0);
        assert!((transform.translation.x - 8.0).abs() < 1e-4);
        assert!(transform.translation.z.abs() < 1e-4);
        assert_eq!(transform.translation.y, 5.0);

        apply_orbit(&mut transform, 0.0, -100.0, 6.0, 20.0);
        assert!((transform.translation.xz().length() - 6.0).abs() < 1e-4);
    }
}
