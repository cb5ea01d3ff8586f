use crate::core::{Degradation, MotionError, TrailAnimator, TrailConfig};
use crate::dom;
use crate::events::{self, Listeners};
use crate::frame::FrameLoop;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

const HIDE_CURSOR_CLASS: &str = "cursor-none";

/// Owns the document-level "hide native cursor" class. Whatever was applied is
/// removed when the guard is released or dropped.
pub struct NativeCursorGuard {
    root: web::HtmlElement,
    released: Cell<bool>,
}

impl NativeCursorGuard {
    pub fn acquire(root: web::HtmlElement) -> Self {
        Self {
            root,
            released: Cell::new(false),
        }
    }

    pub fn set_hidden(&self, hidden: bool) {
        if self.released.get() {
            return;
        }
        _ = self
            .root
            .class_list()
            .toggle_with_force(HIDE_CURSOR_CLASS, hidden);
    }

    pub fn release(&self) {
        if !self.released.replace(true) {
            _ = self.root.class_list().remove_1(HIDE_CURSOR_CLASS);
        }
    }
}

impl Drop for NativeCursorGuard {
    fn drop(&mut self) {
        self.release();
    }
}

pub struct CursorElements {
    pub head: web::HtmlElement,
    pub segments: Vec<web::HtmlElement>,
}

impl CursorElements {
    fn create(document: &web::Document, len: usize) -> Result<Self, MotionError> {
        let body = dom::body(document)?;
        let head = dom::create_div(document, "comet-head", render::HEAD_STYLE)?;
        _ = head.set_attribute("data-variant", "default");
        _ = head.set_attribute("data-active", "false");
        let mut segments = Vec::with_capacity(len.saturating_sub(1));
        for _ in 1..len {
            let seg = dom::create_div(document, "comet-segment", render::SEGMENT_STYLE)?;
            render::park_segment(&seg);
            segments.push(seg);
        }
        // tail first so the head stacks on top
        for seg in segments.iter().rev() {
            _ = body.append_child(seg);
        }
        _ = body.append_child(&head);
        Ok(Self { head, segments })
    }

    fn remove(&self) {
        for seg in &self.segments {
            dom::detach(seg);
        }
        dom::detach(&self.head);
    }
}

/// Comet cursor bound to the page: listeners, frame loop and DOM layers.
pub struct CometCursor {
    state: Rc<RefCell<TrailAnimator>>,
    elements: Rc<CursorElements>,
    listeners: Listeners,
    frame: Option<FrameLoop>,
    cursor_guard: Rc<NativeCursorGuard>,
    mounted: bool,
}

impl CometCursor {
    /// Build the layers and start animating. Fails only when the cursor must
    /// stay disabled; a missing frame scheduler degrades to head-only.
    pub fn mount(document: &web::Document, config: TrailConfig) -> Result<Self, MotionError> {
        let root = dom::root_element(document)?;
        let elements = Rc::new(CursorElements::create(document, config.len)?);
        let state = Rc::new(RefCell::new(TrailAnimator::new(config)));
        let cursor_guard = Rc::new(NativeCursorGuard::acquire(root));

        let mut cursor = Self {
            state,
            elements,
            listeners: Listeners::default(),
            frame: None,
            cursor_guard,
            mounted: true,
        };

        // dropping `cursor` on the error path removes the layers again
        cursor.listeners = events::wire_cursor_input(
            cursor.state.clone(),
            cursor.elements.clone(),
            cursor.cursor_guard.clone(),
        )?;

        match cursor.start_frames() {
            Ok(frame) => cursor.frame = Some(frame),
            Err(e) => {
                log::warn!("[cursor] {}; degrading to {:?}", e, Degradation::for_error(&e));
                park_followers(&cursor.state, &cursor.elements);
            }
        }
        log::info!(
            "[cursor] mounted: {} segments, follow={:.2}, {:?}",
            config.len,
            config.follow,
            cursor.degradation()
        );
        Ok(cursor)
    }

    fn start_frames(&self) -> Result<FrameLoop, MotionError> {
        let state = self.state.clone();
        let elements = self.elements.clone();
        let on_frame = move |_dt_sec: f32| {
            let mut s = state.borrow_mut();
            s.tick();
            for (i, p, style) in s.segments() {
                if let Some(el) = elements.segments.get(i - 1) {
                    render::paint_segment(el, p, style);
                }
            }
        };
        let state = self.state.clone();
        let elements = self.elements.clone();
        let on_halt = move || park_followers(&state, &elements);
        FrameLoop::start(on_frame, on_halt)
    }

    pub fn degradation(&self) -> Degradation {
        if self.frame.as_ref().is_some_and(FrameLoop::is_running) {
            Degradation::Full
        } else {
            Degradation::HeadOnly
        }
    }

    /// Stop the loop, drop listeners, remove layers and restore the native
    /// cursor. Idempotent.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        if let Some(frame) = self.frame.take() {
            frame.stop();
        }
        self.listeners.detach_all();
        self.elements.remove();
        self.cursor_guard.release();
        log::info!("[cursor] unmounted");
    }
}

/// Head-only fallback: followers go back to the sentinel and stay hidden.
fn park_followers(state: &RefCell<TrailAnimator>, elements: &CursorElements) {
    state.borrow_mut().halt();
    for seg in &elements.segments {
        render::park_segment(seg);
    }
}

impl Drop for CometCursor {
    fn drop(&mut self) {
        self.unmount();
    }
}
