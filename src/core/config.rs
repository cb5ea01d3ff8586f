use super::error::MotionError;
use super::reveal::RevealConfig;
use super::trail::TrailConfig;

/// Keys the host page may set as `data-*` attributes on `<html>`.
pub const OVERRIDE_KEYS: [&str; 5] = [
    "trail-follow",
    "reveal-settle-ms",
    "reveal-opacity-ms",
    "reveal-blur-ms",
    "reveal-blur-px",
];

/// Runtime tuning for the whole motion layer. Defaults come from
/// `constants.rs`; the page can override individual values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionConfig {
    pub trail: TrailConfig,
    pub reveal: RevealConfig,
}

fn invalid(key: &'static str, raw: &str) -> MotionError {
    MotionError::InvalidConfig {
        key,
        value: raw.to_string(),
    }
}

// setTimeout takes a signed 32-bit delay; anything larger wraps and fires at once
const MAX_DELAY_MS: u32 = i32::MAX as u32;

fn parse_ms(key: &'static str, raw: &str) -> Result<u32, MotionError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|ms| *ms <= MAX_DELAY_MS)
        .ok_or_else(|| invalid(key, raw))
}

impl MotionConfig {
    /// Apply one override. On error the config is left untouched.
    pub fn apply_override(&mut self, key: &str, raw: &str) -> Result<(), MotionError> {
        match key {
            "trail-follow" => {
                let follow = raw
                    .trim()
                    .parse::<f32>()
                    .map_err(|_| invalid("trail-follow", raw))?;
                self.trail = self.trail.with_follow(follow)?;
            }
            "reveal-settle-ms" => {
                self.reveal.settle_delay_ms = parse_ms("reveal-settle-ms", raw)?;
            }
            "reveal-opacity-ms" => {
                self.reveal.opacity_ms = parse_ms("reveal-opacity-ms", raw)?;
            }
            "reveal-blur-ms" => {
                self.reveal.blur_ms = parse_ms("reveal-blur-ms", raw)?;
            }
            "reveal-blur-px" => {
                let px = raw
                    .trim()
                    .parse::<f32>()
                    .ok()
                    .filter(|v| v.is_finite() && *v >= 0.0)
                    .ok_or_else(|| invalid("reveal-blur-px", raw))?;
                self.reveal.hidden_blur_px = px;
            }
            _ => log::debug!("[config] unknown override `{}` ignored", key),
        }
        Ok(())
    }

    /// Fold `(key, value)` pairs into the defaults, keeping defaults for
    /// anything that fails to parse.
    pub fn from_overrides<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut config = Self::default();
        for (key, raw) in pairs {
            if let Err(e) = config.apply_override(key, raw) {
                log::warn!("[config] {}; keeping default", e);
            }
        }
        config
    }
}
