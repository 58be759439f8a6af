// Character body and movement
pub const PLAYER_HALF_HEIGHT: f32 = 1.0; // 2-unit body, pivot at center
pub const MOVE_SPEED: f32 = 12.0;
pub const JUMP_FORCE: f32 = 18.0;
pub const GRAVITY: f32 = -35.0;
pub const FALL_LIMIT: f32 = -10.0; // below this the character respawns
pub const RESPAWN_LIFT: f32 = 1.0;

// Frame timing
pub const MAX_FRAME_DT: f32 = 0.05; // stalled-tab clamp
pub const SUBSTEP_DT: f32 = 0.016;

// Landing detection
pub const EDGE_TOLERANCE: f32 = 0.3; // forgiving margin around platform footprints
pub const LANDING_TOLERANCE: f32 = 0.1; // how far above a top still counts
pub const SUPPORT_DEPTH: f32 = 0.5; // how far below a top still counts
pub const REST_EPSILON: f32 = 0.1; // vertical speed under this is descending-or-resting
pub const CHECKPOINT_RADIUS: f32 = 2.0;

// Camera
pub const MOUSE_SENSITIVITY: f32 = 0.002;
pub const CAM_PAN_SPEED: f32 = 1.2; // arrow-key orbit rate, rad/s
pub const PITCH_LIMIT: f32 = 1.0;
pub const CAM_DISTANCE: f32 = 6.0;
pub const CAM_HEIGHT: f32 = 4.0;
pub const CAM_PITCH_RISE: f32 = 3.0; // extra height per unit of pitch
pub const CAM_LOOK_HEIGHT: f32 = 2.0;
pub const CAM_SMOOTHING: f32 = 0.08;

// Tower layout
pub const TOTAL_LEVELS: u32 = 50;
pub const BASE_RADIUS: f32 = 8.0;
pub const BASE_HEIGHT: f32 = 1.5;
pub const HEIGHT_INCREMENT: f32 = 0.8;
pub const PLATFORMS_PER_ROTATION: f32 = 12.0;
pub const PLATFORM_THICKNESS: f32 = 0.5;

// Progress
pub const VICTORY_PERCENT: f32 = 95.0;
