use super::constants::*;
use super::error::MotionError;
use glam::Vec2;
use smallvec::SmallVec;

/// Chain length and damping for the comet trail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailConfig {
    pub len: usize,
    pub follow: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            len: TRAIL_LEN,
            follow: TRAIL_FOLLOW,
        }
    }
}

impl TrailConfig {
    /// Reject a follow factor outside the open interval (0, 1): zero freezes
    /// the tail and anything at or past one overshoots.
    pub fn with_follow(self, follow: f32) -> Result<Self, MotionError> {
        if follow.is_finite() && follow > 0.0 && follow < 1.0 {
            Ok(Self { follow, ..self })
        } else {
            Err(MotionError::InvalidConfig {
                key: "trail-follow",
                value: follow.to_string(),
            })
        }
    }
}

/// What the pointer is currently over, as far as the cursor cares.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetKind {
    /// Native text input, textarea, select or content-editable node.
    Form,
    /// Anchor, button, `role="button"` or `.cursor-pointer`.
    Clickable,
    #[default]
    Plain,
}

#[inline]
pub fn classify_target(
    tag_name: &str,
    role: Option<&str>,
    content_editable: bool,
    pointer_class: bool,
) -> TargetKind {
    let tag_is = |name: &str| tag_name.eq_ignore_ascii_case(name);
    if tag_is("INPUT") || tag_is("TEXTAREA") || tag_is("SELECT") || content_editable {
        TargetKind::Form
    } else if tag_is("A") || tag_is("BUTTON") || role == Some("button") || pointer_class {
        TargetKind::Clickable
    } else {
        TargetKind::Plain
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadVariant {
    Default,
    Link,
}

impl HeadVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            HeadVariant::Default => "default",
            HeadVariant::Link => "link",
        }
    }
}

/// Render-facing state of the head dot. Never feeds back into the chain.
#[derive(Clone, Copy, Debug)]
pub struct HeadState {
    pub position: Vec2,
    pub target: TargetKind,
    pub active: bool,
}

impl Default for HeadState {
    fn default() -> Self {
        Self {
            position: Vec2::from_array(TRAIL_SENTINEL),
            target: TargetKind::Plain,
            active: false,
        }
    }
}

impl HeadState {
    /// Hidden over form fields so the native caret stays readable.
    pub fn opacity(&self) -> f32 {
        match self.target {
            TargetKind::Form => 0.0,
            _ => 1.0,
        }
    }

    pub fn variant(&self) -> HeadVariant {
        match self.target {
            TargetKind::Clickable => HeadVariant::Link,
            _ => HeadVariant::Default,
        }
    }

    pub fn hides_native_cursor(&self) -> bool {
        self.target != TargetKind::Form
    }
}

/// Per-segment size and fade. Pure function of the index so every frame
/// computes the same taper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentStyle {
    pub size: f32,
    pub height: f32,
    pub alpha: f32,
}

#[inline]
pub fn segment_style(index: usize, len: usize) -> SegmentStyle {
    let t = index as f32 / len.max(1) as f32;
    let size = SEGMENT_SIZE_SPAN_PX * (1.0 - t) + SEGMENT_SIZE_MIN_PX;
    SegmentStyle {
        size,
        height: size * SEGMENT_HEIGHT_RATIO,
        alpha: SEGMENT_ALPHA_MAX * (1.0 - t),
    }
}

/// Ordered head-to-tail positions. Index 0 is pinned to the pointer.
#[derive(Clone, Debug)]
pub struct TrailChain {
    points: SmallVec<[Vec2; TRAIL_LEN]>,
    follow: f32,
}

impl TrailChain {
    pub fn new(config: TrailConfig) -> Self {
        let len = config.len.max(1);
        Self {
            points: SmallVec::from_elem(Vec2::from_array(TRAIL_SENTINEL), len),
            follow: config.follow,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn head(&self) -> Vec2 {
        self.points[0]
    }

    #[inline]
    pub fn point(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Collapse the whole chain onto one point.
    pub fn reset_to(&mut self, pos: Vec2) {
        self.points.iter_mut().for_each(|p| *p = pos);
    }

    /// Head follows the pointer 1:1, no damping.
    #[inline]
    pub fn set_head(&mut self, pos: Vec2) {
        self.points[0] = pos;
    }

    /// One frame of follow physics. Each follower closes `follow` of the gap to
    /// where its predecessor was before this frame. Walking tail to head keeps
    /// the predecessor untouched when it is read.
    ///
    /// A component whose step rounds away in f32 lands on the predecessor, so
    /// a resting chain collapses exactly onto the head instead of stalling a
    /// few ulps short at every link.
    pub fn tick(&mut self) {
        let follow = self.follow;
        for i in (1..self.points.len()).rev() {
            let prev = self.points[i - 1];
            let p = &mut self.points[i];
            let next = *p + (prev - *p) * follow;
            *p = Vec2::select(next.cmpeq(*p), prev, next);
        }
    }

    /// Send every follower back to the off-screen sentinel; the head stays.
    pub fn park_followers(&mut self) {
        let sentinel = Vec2::from_array(TRAIL_SENTINEL);
        self.points.iter_mut().skip(1).for_each(|p| *p = sentinel);
    }

    /// True once every follower sits within `eps` of the head.
    pub fn is_settled(&self, eps: f32) -> bool {
        let head = self.head();
        self.points.iter().all(|p| p.distance(head) <= eps)
    }
}

/// Pure state of the comet cursor: the chain plus the head's render state.
#[derive(Clone, Debug)]
pub struct TrailAnimator {
    chain: TrailChain,
    head: HeadState,
}

impl TrailAnimator {
    pub fn new(config: TrailConfig) -> Self {
        Self {
            chain: TrailChain::new(config),
            head: HeadState::default(),
        }
    }

    pub fn chain(&self) -> &TrailChain {
        &self.chain
    }

    pub fn head(&self) -> &HeadState {
        &self.head
    }

    pub fn on_pointer_move(&mut self, pos: Vec2, target: TargetKind) {
        self.chain.set_head(pos);
        self.head.position = pos;
        self.head.target = target;
    }

    pub fn on_pointer_down(&mut self) {
        self.head.active = true;
    }

    pub fn on_pointer_up(&mut self) {
        self.head.active = false;
    }

    #[inline]
    pub fn tick(&mut self) {
        self.chain.tick();
    }

    /// Frames stopped: only the head keeps tracking the pointer.
    pub fn halt(&mut self) {
        self.chain.park_followers();
    }

    /// Styles for followers 1..N, paired with their positions.
    pub fn segments(&self) -> impl Iterator<Item = (usize, Vec2, SegmentStyle)> + '_ {
        let len = self.chain.len();
        self.chain
            .points()
            .iter()
            .enumerate()
            .skip(1)
            .map(move |(i, p)| (i, *p, segment_style(i, len)))
    }
}

/// The trail runs only for fine pointers with motion allowed.
#[inline]
pub fn trail_enabled(prefers_reduced_motion: bool, coarse_pointer_only: bool) -> bool {
    !prefers_reduced_motion && !coarse_pointer_only
}
