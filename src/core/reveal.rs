use super::constants::*;
use smallvec::SmallVec;

/// Timing and look of the scene reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub settle_delay_ms: u32,
    pub opacity_ms: u32,
    pub blur_ms: u32,
    pub hidden_blur_px: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: REVEAL_SETTLE_MS,
            opacity_ms: REVEAL_OPACITY_MS,
            blur_ms: REVEAL_BLUR_MS,
            hidden_blur_px: REVEAL_HIDDEN_BLUR_PX,
        }
    }
}

impl RevealConfig {
    /// CSS `transition` value; opacity and blur run on independent clocks.
    pub fn transition_css(&self) -> String {
        format!(
            "opacity {}ms ease-out, filter {}ms ease-out",
            self.opacity_ms, self.blur_ms
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Loading,
    Settling,
    Visible,
}

/// Identifies one armed settle timer. A fire carrying an outdated token is
/// ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleToken {
    pub key: u32,
    pub generation: u64,
}

/// Side effects the host must perform after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealCommand {
    /// Tear down the scene subtree and build a fresh one keyed by `key`.
    Remount { key: u32 },
    /// Start a one-shot timer; report `token` back via `settle_elapsed`.
    ArmTimer { token: SettleToken, delay_ms: u32 },
    /// Drop the pending timer, if any.
    CancelTimer,
}

pub type RevealCommands = SmallVec<[RevealCommand; 2]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub blur_px: f32,
}

impl RevealStyle {
    pub fn opacity_css(&self) -> String {
        format!("{}", self.opacity)
    }

    pub fn filter_css(&self) -> String {
        format!("blur({}px)", self.blur_px)
    }
}

/// Gates the scene behind the asset loader: Loading -> Settling -> Visible,
/// restarted whenever the selected object changes.
#[derive(Clone, Debug)]
pub struct RevealController {
    config: RevealConfig,
    key: u32,
    phase: RevealPhase,
    generation: u64,
    loading_active: bool,
}

impl RevealController {
    /// Starts in `Loading`, treating the loader as busy until it says otherwise.
    pub fn new(key: u32, config: RevealConfig) -> Self {
        Self {
            config,
            key,
            phase: RevealPhase::Loading,
            generation: 0,
            loading_active: true,
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn key(&self) -> u32 {
        self.key
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == RevealPhase::Visible
    }

    fn token(&self) -> SettleToken {
        SettleToken {
            key: self.key,
            generation: self.generation,
        }
    }

    pub fn is_current(&self, token: SettleToken) -> bool {
        token == self.token()
    }

    /// First mount of the current key. The host runs `resync` afterwards so a
    /// loader that reported during the mount is not missed.
    pub fn mount(&self) -> RevealCommands {
        let mut cmds = RevealCommands::new();
        cmds.push(RevealCommand::Remount { key: self.key });
        cmds
    }

    /// Select a scene object. A new key remounts and re-arms from `Loading`;
    /// reselecting the current key does nothing.
    pub fn select(&mut self, key: u32) -> RevealCommands {
        let mut cmds = RevealCommands::new();
        if key == self.key {
            return cmds;
        }
        if self.phase == RevealPhase::Settling {
            cmds.push(RevealCommand::CancelTimer);
        }
        log::debug!("[reveal] object {} -> {}", self.key, key);
        self.key = key;
        self.generation += 1;
        self.phase = RevealPhase::Loading;
        cmds.push(RevealCommand::Remount { key });
        cmds
    }

    /// Feed the loader's "anything loading" signal.
    pub fn set_loading(&mut self, active: bool) -> RevealCommands {
        self.loading_active = active;
        let mut cmds = RevealCommands::new();
        match (self.phase, active) {
            (RevealPhase::Loading, false) => {
                self.generation += 1;
                self.phase = RevealPhase::Settling;
                cmds.push(RevealCommand::ArmTimer {
                    token: self.token(),
                    delay_ms: self.config.settle_delay_ms,
                });
            }
            (RevealPhase::Settling, true) => {
                self.generation += 1;
                self.phase = RevealPhase::Loading;
                cmds.push(RevealCommand::CancelTimer);
            }
            // once visible only a new key can hide the scene again
            _ => {}
        }
        cmds
    }

    /// Re-apply the last loader signal, e.g. after a remount gave the loader
    /// a chance to start fresh work.
    pub fn resync(&mut self) -> RevealCommands {
        self.set_loading(self.loading_active)
    }

    /// Settle timer fired. Returns true when the scene just became visible.
    pub fn settle_elapsed(&mut self, token: SettleToken) -> bool {
        if self.phase != RevealPhase::Settling || !self.is_current(token) {
            log::debug!(
                "[reveal] stale settle timer (key {}, gen {}) ignored",
                token.key,
                token.generation
            );
            return false;
        }
        self.phase = RevealPhase::Visible;
        true
    }

    pub fn style(&self) -> RevealStyle {
        if self.is_visible() {
            RevealStyle {
                opacity: 1.0,
                blur_px: 0.0,
            }
        } else {
            RevealStyle {
                opacity: 0.0,
                blur_px: self.config.hidden_blur_px,
            }
        }
    }
}
