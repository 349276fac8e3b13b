// Constants used in the game and shared across libraries.

/// Generic game constants
pub mod game_constants {
    pub const REFRESH_RATE_HZ: f64 = 60.0; // Hz

    // Seed for the random number generator.
    pub const SEED: u64 = 69;

    // Number of quarter turns applied by a scramble
    pub const SCRAMBLE_LENGTH: usize = 20;

    // UI responsive design reference
    pub const UI_REFERENCE_HEIGHT: f32 = 1080.0; // 1080p as reference

    // Optional runtime configuration file (native only)
    pub const CONFIG_FILE_NAME: &str = "cube_game.toml";

    // Glow of a face right after it turned
    pub const FACE_FLASH_DURATION: f32 = 0.25; // seconds
    pub const FACE_FLASH_INTENSITY: f32 = 0.6;
}

/// Drag gesture interpretation
pub mod gesture_constants {
    // Minimum normalized drag length that produces a turn
    pub const DRAG_THRESHOLD: f32 = 0.01;

    // Drag starts strictly above this normalized Y count as the top row.
    // Not zero: the band (0, 0.1] belongs to the bottom row.
    pub const TOP_ROW_THRESHOLD: f32 = 0.1;
}

/// 3D camera
pub mod camera_3d_constants {
    pub const CAMERA_3D_INITIAL_X: f32 = 6.0;
    pub const CAMERA_3D_INITIAL_Y: f32 = 5.0;
    pub const CAMERA_3D_INITIAL_Z: f32 = 8.0;

    pub const CAMERA_3D_SPEED_ROTATE: f32 = 1.5; // rad/s
    pub const CAMERA_3D_SPEED_ZOOM: f32 = 6.0; // units/s

    // Radius range for the camera's orbit (measured on the XZ plane).
    pub const CAMERA_3D_MIN_RADIUS: f32 = 6.0;
    pub const CAMERA_3D_MAX_RADIUS: f32 = 20.0;
}

/// Cube object
pub mod cube_constants {
    // Cubies per edge
    pub const CUBE_SIZE: usize = 3;

    // Distance between neighbouring cubie centers
    pub const CUBIE_PITCH: f32 = 1.0;

    // Half of the cube edge length, used for hit testing
    pub const CUBE_HALF_EXTENT: f32 = CUBE_SIZE as f32 * CUBIE_PITCH * 0.5;

    pub const STICKER_SIZE: f32 = 0.88;
    pub const STICKER_THICKNESS: f32 = 0.02;
    // Stickers sit slightly above the cube body to avoid z-fighting
    pub const STICKER_OFFSET: f32 = 0.505;

    pub const BODY_COLOR: [f32; 4] = [0.05, 0.05, 0.05, 1.0];

    // Sticker colors, indexed in `Face::ALL` order (F, B, L, R, U, D)
    pub const FACE_COLORS: [[f32; 4]; 6] = [
        [0.0, 0.62, 0.38, 1.0], // green
        [0.0, 0.27, 0.68, 1.0], // blue
        [1.0, 0.35, 0.0, 1.0],  // orange
        [0.72, 0.07, 0.2, 1.0], // red
        [1.0, 1.0, 1.0, 1.0],   // white
        [1.0, 0.84, 0.0, 1.0],  // yellow
    ];
}

/// Lighting constants
pub mod lighting_constants {
    #[cfg(target_arch = "wasm32")]
    pub const SHADOWS_ENABLED: bool = false; // Shadows produce artifacts on WASM
    #[cfg(not(target_arch = "wasm32"))]
    pub const SHADOWS_ENABLED: bool = true;

    pub const POINT_LIGHT_INTENSITY: f32 = 2_000_000.0;
    pub const GLOBAL_AMBIENT_LIGHT_INTENSITY: f32 = 400.0;
}
