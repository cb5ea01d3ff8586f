use super::Listeners;
use crate::core::{MotionError, TrailAnimator};
use crate::cursor::{CursorElements, NativeCursorGuard};
use crate::dom;
use crate::render;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach global pointer move/down/up for the comet cursor.
pub fn wire_cursor_input(
    state: Rc<RefCell<TrailAnimator>>,
    elements: Rc<CursorElements>,
    cursor_guard: Rc<NativeCursorGuard>,
) -> Result<Listeners, MotionError> {
    let window = web::window().ok_or(MotionError::MissingElement("window"))?;
    let mut listeners = Listeners::default();

    {
        let state = state.clone();
        let elements = elements.clone();
        listeners.push(EventListener::new_with_options(
            &window,
            "pointermove",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: true,
            },
            move |ev: &web::Event| {
                let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
                    return;
                };
                let pos = Vec2::new(me.client_x() as f32, me.client_y() as f32);
                let kind = dom::classify_event_target(ev.target());
                let head = {
                    let mut s = state.borrow_mut();
                    s.on_pointer_move(pos, kind);
                    *s.head()
                };
                cursor_guard.set_hidden(head.hides_native_cursor());
                render::paint_head(&elements.head, &head);
            },
        ));
    }

    {
        let state = state.clone();
        let elements = elements.clone();
        listeners.push(EventListener::new(&window, "pointerdown", move |_| {
            state.borrow_mut().on_pointer_down();
            render::paint_active(&elements.head, true);
        }));
    }

    listeners.push(EventListener::new(&window, "pointerup", move |_| {
        state.borrow_mut().on_pointer_up();
        render::paint_active(&elements.head, false);
    }));

    Ok(listeners)
}
