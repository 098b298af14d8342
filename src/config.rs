//! Application-level configuration constants.

// Initial slider positions
pub const DEFAULT_SETS: u32 = 3;
pub const DEFAULT_SPEED: u32 = 90;
pub const DEFAULT_DURATION_BREAK: u32 = 5;

// Min/Max limits for range controls
pub const MIN_SETS: u32 = 1;
pub const MAX_SETS: u32 = 5;
pub const MIN_SPEED: u32 = 30;
pub const MAX_SPEED: u32 = 180;
pub const SPEED_STEP: u32 = 30;
pub const MIN_DURATION_BREAK: u32 = 1;
pub const MAX_DURATION_BREAK: u32 = 10;

// Assets and mounting
pub const CLICK_SOUND_URL: &str = "ClickSound.m4a";
pub const ROOT_ELEMENT_ID: &str = "app";
