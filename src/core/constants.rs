// Motion tuning constants shared by the trail, the interactive objects and the
// scene reveal. Host tests include this file directly.

// Trail
pub const TRAIL_LEN: usize = 14; // 1 head + 13 followers
pub const TRAIL_FOLLOW: f32 = 0.22; // fraction of the gap closed per frame, 0.15..0.35 reads well
pub const TRAIL_SENTINEL: [f32; 2] = [-100.0, -100.0]; // off-screen until the first move

// Segment tapering: size = SIZE_SPAN * (1 - t) + SIZE_MIN, alpha = ALPHA_MAX * (1 - t)
pub const SEGMENT_SIZE_SPAN_PX: f32 = 18.0;
pub const SEGMENT_SIZE_MIN_PX: f32 = 4.0;
pub const SEGMENT_ALPHA_MAX: f32 = 0.35;
pub const SEGMENT_HEIGHT_RATIO: f32 = 0.9; // segments are slightly squashed

// Interactive objects
pub const INTERACTION_DAMPING: f32 = 0.1; // scale lerp factor per frame
pub const SCALE_REST: f32 = 1.0;
pub const SCALE_CLICKED: f32 = 1.2;

// Badge click pulse
pub const CLICK_PULSE_MS: f64 = 500.0;

// Scene reveal
pub const REVEAL_SETTLE_MS: u32 = 80; // loading must stay off this long before reveal
pub const REVEAL_OPACITY_MS: u32 = 900; // fade-in
pub const REVEAL_BLUR_MS: u32 = 5000; // slow defocus settle
pub const REVEAL_HIDDEN_BLUR_PX: f32 = 12.0;
