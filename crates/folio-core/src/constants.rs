use glam::Vec3;

// Shared tuning constants for the site front-end.

// Particle field
pub const PARTICLE_AREA_PER_POINT: f32 = 2500.0; // viewport px² per particle
pub const PARTICLE_COUNT_MIN: usize = 600;
pub const PARTICLE_COUNT_MAX: usize = 1400;
pub const PARTICLE_EXTENT: f32 = 1000.0; // positions sampled in [-EXTENT, EXTENT]³
pub const PARTICLE_COLOR: [f32; 3] = [0.0, 0.831, 1.0]; // #00d4ff
pub const PARTICLE_SIZE: f32 = 1.6; // world units, attenuated by depth
pub const PARTICLE_OPACITY: f32 = 0.8;
pub const MAX_PIXEL_RATIO: f64 = 1.5;

// Per-frame rotation
pub const ROTATION_STEP_X: f32 = 0.001;
pub const ROTATION_STEP_Y: f32 = 0.002;
pub const POINTER_ROTATION_GAIN: f32 = 0.5;
pub const POINTER_OFFSET_SCALE: f32 = 0.001; // px from centre -> pointer offset

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_EASE_TAU_SEC: f32 = 0.5;
pub const CAMERA_PATH_POINTS: [Vec3; 5] = [
    Vec3::new(-5.0, 0.0, 0.0),
    Vec3::new(0.0, 2.0, -3.0),
    Vec3::new(5.0, 0.0, 0.0),
    Vec3::new(0.0, -2.0, -3.0),
    Vec3::new(-5.0, 0.0, 0.0),
];
pub const CAMERA_PATH_ARC_DIVISIONS: usize = 200;

// Scroll trigger lines (fraction of viewport height from the top)
pub const TITLE_TRIGGER_START: f32 = 0.8;
pub const TITLE_TRIGGER_END: f32 = 0.2;
pub const CONTENT_TRIGGER_START: f32 = 0.7;
pub const CONTENT_TRIGGER_END: f32 = 0.3;
pub const CARD_TRIGGER_START: f32 = 0.9;
pub const CARD_TRIGGER_END: f32 = 0.1;
pub const REVEAL_TRIGGER_START: f32 = 0.8;
pub const SECTION_TRIGGER_LINE: f32 = 0.5; // "center"

// Entrance choreography
pub const STAGGER_STEP_SEC: f32 = 0.2;
pub const HOVER_SCALE: f32 = 1.05;
pub const HOVER_DURATION_SEC: f32 = 0.3;
pub const CARD_SCROLL_SCALE: f32 = 1.05;
pub const CARD_SCROLL_DURATION_SEC: f32 = 0.8;
pub const PARALLAX_FACTOR: f32 = 0.5;
pub const PARALLAX_DURATION_SEC: f32 = 0.1;
pub const REVEAL_DURATION_SEC: f32 = 1.2;

// Idle breathing
pub const CARD_FLOAT_DISTANCE_PX: f32 = 18.0;
pub const CARD_FLOAT_BASE_SEC: f32 = 2.5;
pub const BUTTON_PULSE_SCALE: f32 = 1.04;
pub const BUTTON_PULSE_BASE_SEC: f32 = 1.5;
pub const BUTTON_HOVER_SCALE: f32 = 1.12;
pub const SECTION_DRIFT_BASE_SEC: f32 = 6.0;
pub const SECTION_DRIFT_SPREAD_SEC: f32 = 2.0;
pub const SECTION_DRIFT_PERCENT: f32 = 10.0;
pub const BREATHING_MAX_DELAY_SEC: f32 = 1.0;

// Decorations
pub const FLOATING_ELEMENTS_PER_SECTION: usize = 3;
pub const FLOATING_MAX_DELAY_SEC: f32 = 6.0;

// Mascot
pub const SNAP_BACK_MS: u32 = 400;
pub const SNAP_BACK_EASING: &str = "cubic-bezier(0.4,2,0.6,1)";

// Sound
pub const SOUND_PREF_KEY: &str = "sound";
pub const TONE_FREQ_TOGGLE_HZ: f32 = 600.0;
pub const TONE_FREQ_CLICK_HZ: f32 = 1000.0;
pub const TONE_FREQ_DEFAULT_HZ: f32 = 800.0;

// Loading screen
pub const LOADING_DELAY_MS: u32 = 2000;
pub const LOADING_FADE_MS: u32 = 500;
