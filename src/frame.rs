use crate::core::MotionError;
use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Whether `requestAnimationFrame` can be called right now.
pub fn scheduler_available() -> bool {
    web::window().is_some_and(|w| {
        js_sys::Reflect::get(&w, &JsValue::from_str("requestAnimationFrame"))
            .is_ok_and(|f| f.is_function())
    })
}

type FrameFn = Rc<RefCell<dyn FnMut(f32)>>;

struct LoopState {
    running: Cell<bool>,
    last_instant: Cell<Instant>,
    pending: RefCell<Option<AnimationFrame>>,
    on_halt: RefCell<Option<Box<dyn FnOnce()>>>,
}

/// Recurring animation-frame loop. `on_frame` receives seconds since the
/// previous frame. Stopping (or dropping) cancels the pending frame so the
/// callback never runs again. If the scheduler disappears mid-run the loop
/// halts by itself and runs `on_halt` once.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start(
        on_frame: impl FnMut(f32) + 'static,
        on_halt: impl FnOnce() + 'static,
    ) -> Result<Self, MotionError> {
        if !scheduler_available() {
            return Err(MotionError::SchedulerUnavailable);
        }
        let state = Rc::new(LoopState {
            running: Cell::new(true),
            last_instant: Cell::new(Instant::now()),
            pending: RefCell::new(None),
            on_halt: RefCell::new(Some(Box::new(on_halt))),
        });
        let on_frame: FrameFn = Rc::new(RefCell::new(on_frame));
        schedule(&state, on_frame);
        Ok(Self { state })
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    pub fn stop(&self) {
        self.state.running.set(false);
        // dropping the handle cancels the frame
        self.state.pending.borrow_mut().take();
        self.state.on_halt.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(state: &Rc<LoopState>, on_frame: FrameFn) {
    let weak: Weak<LoopState> = Rc::downgrade(state);
    let handle = request_animation_frame(move |_timestamp| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        if !state.running.get() {
            return;
        }
        let now = Instant::now();
        let dt_sec = (now - state.last_instant.replace(now)).as_secs_f32();
        (&mut *on_frame.borrow_mut())(dt_sec);
        if scheduler_available() {
            schedule(&state, on_frame);
        } else {
            log::warn!("[frame] loop halted: {}", MotionError::SchedulerUnavailable);
            halt(&state);
        }
    });
    *state.pending.borrow_mut() = Some(handle);
}

fn halt(state: &LoopState) {
    state.running.set(false);
    let on_halt = state.on_halt.borrow_mut().take();
    if let Some(f) = on_halt {
        f();
    }
}
