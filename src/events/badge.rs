use super::Listeners;
use crate::core::{ClickPulse, CLICK_PULSE_MS};
use crate::dom;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const PULSE_SELECTOR: &str = "[data-pulse]";
pub const PULSE_CLASS: &str = "animate-shake";

struct Badge {
    el: web::Element,
    pulse: ClickPulse,
    timer: Option<Timeout>,
}

/// Give every `[data-pulse]` element a one-shot shake on click. Repeat clicks
/// while shaking are ignored.
pub fn wire_click_pulses(document: &web::Document) -> Listeners {
    let mut listeners = Listeners::default();
    let Ok(nodes) = document.query_selector_all(PULSE_SELECTOR) else {
        return listeners;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let badge = Rc::new(RefCell::new(Badge {
            el: el.clone(),
            pulse: ClickPulse::default(),
            timer: None,
        }));
        listeners.push(EventListener::new(&el, "click", move |_| on_click(&badge)));
    }
    log::debug!("[badge] wired {} pulse targets", listeners.len());
    listeners
}

fn on_click(badge: &Rc<RefCell<Badge>>) {
    let mut b = badge.borrow_mut();
    if !b.pulse.trigger(dom::now_ms()) {
        return;
    }
    _ = b.el.class_list().add_1(PULSE_CLASS);
    let weak = Rc::downgrade(badge);
    // the previous timer already fired; replacing it clears nothing live
    b.timer = Some(Timeout::new(CLICK_PULSE_MS as u32, move || {
        if let Some(badge) = weak.upgrade() {
            let mut b = badge.borrow_mut();
            _ = b.el.class_list().remove_1(PULSE_CLASS);
            b.pulse.finish();
        }
    }));
}
