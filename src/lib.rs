#![cfg(target_arch = "wasm32")]
use crate::core::MotionConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod core;
mod cursor;
mod dom;
mod events;
mod frame;
mod objects;
mod render;
mod scene;

pub use objects::SceneObject;

type CursorSlot = Rc<RefCell<Option<cursor::CometCursor>>>;

struct App {
    cursor: CursorSlot,
    // holds the reduced-motion listener
    _gate: events::MotionGate,
    scene: Option<scene::SceneReveal>,
    badges: events::Listeners,
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(mut c) = self.cursor.borrow_mut().take() {
            c.unmount();
        }
        self.badges.detach_all();
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Mount or unmount the cursor to match the motion gate.
fn sync_cursor(slot: &CursorSlot, document: &web::Document, config: &MotionConfig, allowed: bool) {
    let mounted = slot.borrow().is_some();
    if allowed && !mounted {
        match cursor::CometCursor::mount(document, config.trail) {
            Ok(c) => *slot.borrow_mut() = Some(c),
            Err(e) => log::warn!("[cursor] disabled: {}", e),
        }
    } else if !allowed && mounted {
        log::info!("[cursor] motion not allowed; unmounting");
        if let Some(mut c) = slot.borrow_mut().take() {
            c.unmount();
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-motion starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = config::load(&document);

    let cursor: CursorSlot = Rc::new(RefCell::new(None));
    let mut gate = events::MotionGate::new();
    sync_cursor(&cursor, &document, &config, gate.allowed());
    {
        let cursor = cursor.clone();
        let document = document.clone();
        gate.watch(move |allowed| sync_cursor(&cursor, &document, &config, allowed));
    }

    let scene = match scene::SceneReveal::attach(&document, config.reveal) {
        Ok(s) => Some(s),
        Err(e) => {
            log::info!("[scene] not attached: {}", e);
            None
        }
    };

    let badges = events::wire_click_pulses(&document);

    let previous = APP.with(|app| {
        app.borrow_mut().replace(App {
            cursor,
            _gate: gate,
            scene: scene.clone(),
            badges,
        })
    });
    if previous.is_some() {
        log::warn!("[app] restarted; previous instance torn down");
    }

    // after APP is set: the loader may call back into the exports while the
    // first mount is being announced
    if let Some(scene) = scene {
        scene.start();
    }
    Ok(())
}

fn scene_handle() -> Option<scene::SceneReveal> {
    APP.with(|app| app.borrow().as_ref().and_then(|a| a.scene.clone()))
}

/// Called by the hosting page when the displayed object changes.
#[wasm_bindgen]
pub fn select_scene_object(index: u32) {
    match scene_handle() {
        Some(s) => s.select(index),
        None => log::debug!("[scene] select({}) with no scene attached", index),
    }
}

/// Called by the asset loader whenever its "anything loading" flag changes.
#[wasm_bindgen]
pub fn set_assets_loading(active: bool) {
    match scene_handle() {
        Some(s) => s.set_loading(active),
        None => log::debug!("[scene] loading={} with no scene attached", active),
    }
}

#[wasm_bindgen]
pub fn is_scene_visible() -> bool {
    scene_handle().is_some_and(|s| s.is_visible())
}

/// Detach everything: listeners, frame loop, cursor layers and the
/// document-level cursor class.
#[wasm_bindgen]
pub fn teardown() {
    let app = APP.with(|app| app.borrow_mut().take());
    if let Some(app) = app {
        drop(app);
        log::info!("[app] torn down");
    }
}
