use crate::core::{
    MotionError, RevealCommand, RevealCommands, RevealConfig, RevealController, SettleToken,
};
use crate::dom;
use crate::frame;
use crate::render;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub const SCENE_ROOT_ID: &str = "scene-root";
pub const REMOUNT_EVENT: &str = "scene-remount";
const MOUNT_CLASS: &str = "scene-mount";

struct SceneInner {
    controller: RevealController,
    document: web::Document,
    container: web::HtmlElement,
    mount: Option<web::HtmlElement>,
    settle_timer: Option<Timeout>,
    reveal_frame: Option<AnimationFrame>,
}

/// DOM side of the reveal controller: owns the keyed mount node, the settle
/// timer and the frame that flips the scene visible.
///
/// Borrows of the shared state are never held across a DOM dispatch, so the
/// asset loader may call back in synchronously.
#[derive(Clone)]
pub struct SceneReveal {
    inner: Rc<RefCell<SceneInner>>,
}

impl SceneReveal {
    pub fn attach(document: &web::Document, config: RevealConfig) -> Result<Self, MotionError> {
        let container = document
            .get_element_by_id(SCENE_ROOT_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            .ok_or(MotionError::MissingElement("#scene-root"))?;
        let key = container
            .get_attribute("data-scene-key")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(0);
        log::info!("[scene] attached, object {}", key);
        Ok(Self {
            inner: Rc::new(RefCell::new(SceneInner {
                controller: RevealController::new(key, config),
                document: document.clone(),
                container,
                mount: None,
                settle_timer: None,
                reveal_frame: None,
            })),
        })
    }

    /// Build the first mount node and announce it. Call once the exported
    /// entry points can reach this scene, since the loader may answer from
    /// inside the `scene-remount` dispatch.
    pub fn start(&self) {
        let cmds = self.inner.borrow().controller.mount();
        self.run_then_resync(cmds);
    }

    pub fn select(&self, key: u32) {
        let cmds = self.inner.borrow_mut().controller.select(key);
        if cmds.is_empty() {
            return;
        }
        self.run_then_resync(cmds);
    }

    fn run_then_resync(&self, cmds: RevealCommands) {
        self.run(cmds);
        // the loader may have reported during the remount dispatch
        let cmds = self.inner.borrow_mut().controller.resync();
        self.run(cmds);
    }

    pub fn set_loading(&self, active: bool) {
        let cmds = self.inner.borrow_mut().controller.set_loading(active);
        self.run(cmds);
    }

    pub fn is_visible(&self) -> bool {
        self.inner.borrow().controller.is_visible()
    }

    fn run(&self, cmds: RevealCommands) {
        for cmd in cmds {
            match cmd {
                RevealCommand::Remount { key } => {
                    if let Err(e) = self.remount(key) {
                        log::error!("[scene] remount failed: {}", e);
                    }
                }
                RevealCommand::ArmTimer { token, delay_ms } => self.arm(token, delay_ms),
                RevealCommand::CancelTimer => {
                    // dropping the handles clears the timeout and the frame
                    let mut inner = self.inner.borrow_mut();
                    inner.settle_timer = None;
                    inner.reveal_frame = None;
                }
            }
        }
    }

    /// Replace the whole mount subtree so the loader starts from scratch,
    /// then announce the new key.
    fn remount(&self, key: u32) -> Result<(), MotionError> {
        let container = {
            let mut inner = self.inner.borrow_mut();
            inner.settle_timer = None;
            inner.reveal_frame = None;
            if let Some(old) = inner.mount.take() {
                dom::detach(&old);
            }
            let mount = dom::create_div(&inner.document, MOUNT_CLASS, "width:100%;height:100%;")?;
            _ = mount.set_attribute("data-scene-key", &key.to_string());
            render::paint_reveal(&mount, inner.controller.config(), inner.controller.style());
            _ = inner.container.append_child(&mount);
            inner.mount = Some(mount);
            inner.container.clone()
        };

        let init = web::CustomEventInit::new();
        init.set_detail(&JsValue::from(key));
        match web::CustomEvent::new_with_event_init_dict(REMOUNT_EVENT, &init) {
            Ok(ev) => {
                _ = container.dispatch_event(&ev);
            }
            Err(e) => log::warn!("[scene] could not announce remount: {:?}", e),
        }
        Ok(())
    }

    fn arm(&self, token: SettleToken, delay_ms: u32) {
        let weak = Rc::downgrade(&self.inner);
        let timer = Timeout::new(delay_ms, move || on_settled(weak, token));
        self.inner.borrow_mut().settle_timer = Some(timer);
    }
}

fn on_settled(weak: Weak<RefCell<SceneInner>>, token: SettleToken) {
    let Some(inner_rc) = weak.upgrade() else {
        return;
    };
    let mut inner = inner_rc.borrow_mut();
    if !inner.controller.settle_elapsed(token) {
        return;
    }
    log::info!("[scene] object {} revealed", token.key);
    if !frame::scheduler_available() {
        paint_current(&inner);
        return;
    }
    // paint on the next frame so the hidden state is on screen at least once
    let weak = Rc::downgrade(&inner_rc);
    inner.reveal_frame = Some(request_animation_frame(move |_| paint_visible(weak, token)));
}

fn paint_visible(weak: Weak<RefCell<SceneInner>>, token: SettleToken) {
    let Some(inner_rc) = weak.upgrade() else {
        return;
    };
    let inner = inner_rc.borrow();
    if inner.controller.is_current(token) && inner.controller.is_visible() {
        paint_current(&inner);
    }
}

fn paint_current(inner: &SceneInner) {
    if let Some(mount) = &inner.mount {
        render::paint_reveal(mount, inner.controller.config(), inner.controller.style());
    }
}
