use crate::core::trail_enabled;
use gloo::events::EventListener;
use web_sys as web;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const COARSE_POINTER_QUERY: &str = "(hover: none) and (pointer: coarse)";

fn query(window: &web::Window, q: &str) -> Option<web::MediaQueryList> {
    window.match_media(q).ok().flatten()
}

/// Reduced-motion and touch-only detection, with live updates.
pub struct MotionGate {
    reduced_motion: Option<web::MediaQueryList>,
    coarse_pointer: Option<web::MediaQueryList>,
    on_change: Option<EventListener>,
}

impl MotionGate {
    pub fn new() -> Self {
        let window = web::window();
        Self {
            reduced_motion: window.as_ref().and_then(|w| query(w, REDUCED_MOTION_QUERY)),
            coarse_pointer: window.as_ref().and_then(|w| query(w, COARSE_POINTER_QUERY)),
            on_change: None,
        }
    }

    pub fn allowed(&self) -> bool {
        let reduced = self.reduced_motion.as_ref().is_some_and(|m| m.matches());
        let coarse = self.coarse_pointer.as_ref().is_some_and(|m| m.matches());
        trail_enabled(reduced, coarse)
    }

    /// Call `f(allowed)` whenever the reduced-motion preference flips. Without
    /// a MediaQueryList there is nothing to watch.
    pub fn watch(&mut self, mut f: impl FnMut(bool) + 'static) {
        let Some(mq) = self.reduced_motion.clone() else {
            log::debug!("[cursor] reduced-motion query unavailable; not watching");
            return;
        };
        let coarse = self.coarse_pointer.clone();
        let target = mq.clone();
        let listener = EventListener::new(&target, "change", move |_| {
            let reduced = mq.matches();
            let coarse = coarse.as_ref().is_some_and(|m| m.matches());
            f(trail_enabled(reduced, coarse));
        });
        self.on_change = Some(listener);
    }
}
