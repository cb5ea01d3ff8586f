use thiserror::Error;

/// Failure modes of the motion layer. None of them is fatal: each one maps to
/// a simpler visual state rather than an error surfaced to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MotionError {
    /// No `requestAnimationFrame` available; the trail renders its head only.
    #[error("frame scheduler unavailable")]
    SchedulerUnavailable,
    /// A required DOM node (or the window the listeners hang off) is missing;
    /// whatever needed it stays disabled.
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    /// A `data-*` override could not be parsed.
    #[error("invalid value {value:?} for `{key}`")]
    InvalidConfig { key: &'static str, value: String },
}

/// What the trail should render given which capabilities came up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degradation {
    Full,
    HeadOnly,
    Disabled,
}

impl Degradation {
    /// Map an activation failure onto the visual fallback it calls for.
    pub fn for_error(err: &MotionError) -> Self {
        match err {
            MotionError::SchedulerUnavailable => Degradation::HeadOnly,
            MotionError::MissingElement(_) => Degradation::Disabled,
            // bad overrides fall back to defaults and keep the full effect
            MotionError::InvalidConfig { .. } => Degradation::Full,
        }
    }
}
