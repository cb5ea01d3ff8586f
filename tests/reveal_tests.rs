// Host-side tests for the scene reveal state machine.
// Timers are simulated: armed tokens fire when the fake clock passes them.

#![allow(dead_code)]
mod motion {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use motion::constants::*;
use motion::reveal::*;

/// Host stand-in: one cancellable timer slot, a clock, and a log of what the
/// controller asked for.
struct Host {
    ctl: RevealController,
    now_ms: u32,
    pending: Option<(u32, SettleToken)>,
    remounts: Vec<u32>,
    revealed: Vec<u32>,
    // what a synchronous loader reports from inside the remount dispatch
    signal_on_remount: Option<bool>,
}

impl Host {
    fn new(key: u32) -> Self {
        Self {
            ctl: RevealController::new(key, RevealConfig::default()),
            now_ms: 0,
            pending: None,
            remounts: Vec::new(),
            revealed: Vec::new(),
            signal_on_remount: None,
        }
    }

    fn run(&mut self, cmds: RevealCommands) {
        for cmd in cmds {
            match cmd {
                RevealCommand::ArmTimer { token, delay_ms } => {
                    self.pending = Some((self.now_ms + delay_ms, token))
                }
                RevealCommand::CancelTimer => self.pending = None,
                RevealCommand::Remount { key } => self.remounts.push(key),
            }
        }
    }

    /// Initial mount as the page does it: remount, let the loader react, then
    /// re-apply whatever it said.
    fn start(&mut self) {
        let cmds = self.ctl.mount();
        self.run(cmds);
        if let Some(active) = self.signal_on_remount {
            self.loading(active);
        }
        let cmds = self.ctl.resync();
        self.run(cmds);
    }

    fn loading(&mut self, active: bool) {
        let cmds = self.ctl.set_loading(active);
        self.run(cmds);
    }

    fn select(&mut self, key: u32) {
        let cmds = self.ctl.select(key);
        self.run(cmds);
    }

    fn advance_to(&mut self, t: u32) {
        self.now_ms = t;
        if let Some((due, token)) = self.pending {
            if due <= t {
                self.pending = None;
                if self.ctl.settle_elapsed(token) {
                    self.revealed.push(token.key);
                }
            }
        }
    }
}

#[test]
fn starts_hidden_and_loading() {
    let host = Host::new(0);
    assert_eq!(host.ctl.phase(), RevealPhase::Loading);
    let style = host.ctl.style();
    assert_eq!(style.opacity, 0.0);
    assert_eq!(style.blur_px, REVEAL_HIDDEN_BLUR_PX);
    assert_eq!(style.filter_css(), "blur(12px)");
}

#[test]
fn idle_report_during_initial_mount_reveals() {
    let mut host = Host::new(2);
    host.signal_on_remount = Some(false);
    host.start();
    assert_eq!(host.remounts, vec![2]);
    assert_eq!(host.ctl.phase(), RevealPhase::Settling);
    assert_eq!(host.pending.map(|(due, _)| due), Some(80));

    host.advance_to(80);
    assert!(host.ctl.is_visible());
    assert_eq!(host.revealed, vec![2]);
}

#[test]
fn busy_report_during_initial_mount_waits_for_the_loader() {
    let mut host = Host::new(0);
    host.signal_on_remount = Some(true);
    host.start();
    assert_eq!(host.ctl.phase(), RevealPhase::Loading);
    assert!(host.pending.is_none());

    host.loading(false);
    host.advance_to(80);
    assert!(host.ctl.is_visible());
}

#[test]
fn silent_loader_keeps_the_scene_hidden_until_it_reports() {
    let mut host = Host::new(0);
    host.start();
    host.advance_to(10_000);
    assert_eq!(host.ctl.phase(), RevealPhase::Loading);

    host.loading(false);
    host.advance_to(10_080);
    assert!(host.ctl.is_visible());
}

#[test]
fn reveals_after_settle_delay() {
    let mut host = Host::new(0);
    host.loading(true);
    host.loading(false);
    assert_eq!(host.ctl.phase(), RevealPhase::Settling);

    host.advance_to(79);
    assert!(!host.ctl.is_visible());

    host.advance_to(80);
    assert!(host.ctl.is_visible());
    assert_eq!(host.revealed, vec![0]);
    let style = host.ctl.style();
    assert_eq!(style.opacity, 1.0);
    assert_eq!(style.blur_px, 0.0);
    assert_eq!(style.opacity_css(), "1");
}

#[test]
fn loading_again_during_settle_cancels_reveal() {
    let mut host = Host::new(0);
    host.loading(false);
    host.advance_to(79);
    host.loading(true);
    assert_eq!(host.ctl.phase(), RevealPhase::Loading);
    assert!(host.pending.is_none());

    host.advance_to(80);
    assert!(!host.ctl.is_visible());
    assert!(host.revealed.is_empty());

    // the next quiet period starts a fresh 80ms wait
    host.loading(false);
    host.advance_to(159);
    assert!(!host.ctl.is_visible());
    host.advance_to(160);
    assert!(host.ctl.is_visible());
}

#[test]
fn loading_signal_is_ignored_once_visible() {
    let mut host = Host::new(0);
    host.loading(false);
    host.advance_to(80);
    assert!(host.ctl.is_visible());

    host.loading(true);
    assert!(host.ctl.is_visible());
    assert!(host.pending.is_none());
}

#[test]
fn identity_change_while_visible_returns_to_loading() {
    let mut host = Host::new(0);
    host.loading(false);
    host.advance_to(80);
    assert!(host.ctl.is_visible());

    host.select(1);
    assert_eq!(host.ctl.phase(), RevealPhase::Loading);
    assert_eq!(host.ctl.key(), 1);
    assert_eq!(host.remounts, vec![1]);
    assert_eq!(host.ctl.style().opacity, 0.0);
}

#[test]
fn identity_change_while_settling_cancels_the_timer() {
    let mut host = Host::new(0);
    host.loading(false);
    let (_, old_token) = host.pending.unwrap();

    let cmds = host.ctl.select(2);
    assert!(cmds.contains(&RevealCommand::CancelTimer));
    assert!(cmds.contains(&RevealCommand::Remount { key: 2 }));
    host.run(cmds);
    assert!(host.pending.is_none());

    // a timer that slipped through cancellation must not reveal anything
    assert!(!host.ctl.settle_elapsed(old_token));
    assert_eq!(host.ctl.phase(), RevealPhase::Loading);
    host.advance_to(500);
    assert!(host.revealed.is_empty());
}

#[test]
fn reselecting_the_same_object_is_a_no_op() {
    let mut host = Host::new(3);
    host.loading(false);
    let cmds = host.ctl.select(3);
    assert!(cmds.is_empty());
    assert_eq!(host.ctl.phase(), RevealPhase::Settling);
}

#[test]
fn resync_after_remount_rearms_from_last_signal() {
    let mut host = Host::new(0);
    host.loading(false);
    host.advance_to(80);
    host.select(1);
    assert!(host.pending.is_none());

    // loader stayed idle (assets cached): resync arms a fresh settle
    let cmds = host.ctl.resync();
    host.run(cmds);
    assert_eq!(host.ctl.phase(), RevealPhase::Settling);
    host.advance_to(160);
    assert!(host.ctl.is_visible());
    assert_eq!(host.revealed, vec![0, 1]);
}

#[test]
fn resync_while_loader_busy_stays_loading() {
    let mut host = Host::new(0);
    host.loading(true);
    host.select(4);
    let cmds = host.ctl.resync();
    assert!(cmds.is_empty());
    assert_eq!(host.ctl.phase(), RevealPhase::Loading);
}

#[test]
fn every_arm_gets_a_fresh_token() {
    let mut ctl = RevealController::new(0, RevealConfig::default());
    let first = match ctl.set_loading(false).first() {
        Some(RevealCommand::ArmTimer { token, .. }) => *token,
        other => panic!("expected ArmTimer, got {:?}", other),
    };
    ctl.set_loading(true);
    let second = match ctl.set_loading(false).first() {
        Some(RevealCommand::ArmTimer { token, .. }) => *token,
        other => panic!("expected ArmTimer, got {:?}", other),
    };
    assert_ne!(first, second);
    assert_eq!(first.key, second.key);

    // the uncancelled first timer fires late: ignored
    assert!(!ctl.settle_elapsed(first));
    assert_eq!(ctl.phase(), RevealPhase::Settling);
    assert!(ctl.settle_elapsed(second));
    assert!(ctl.is_visible());
}

#[test]
fn transition_durations_are_independent() {
    let config = RevealConfig::default();
    assert_eq!(config.settle_delay_ms, 80);
    let css = config.transition_css();
    assert!(css.contains("opacity 900ms"), "{css}");
    assert!(css.contains("filter 5000ms"), "{css}");
}

#[test]
fn custom_settle_delay_is_honored() {
    let mut host = Host::new(0);
    host.ctl = RevealController::new(
        0,
        RevealConfig {
            settle_delay_ms: 200,
            ..RevealConfig::default()
        },
    );
    host.loading(false);
    host.advance_to(199);
    assert!(!host.ctl.is_visible());
    host.advance_to(200);
    assert!(host.ctl.is_visible());
}
