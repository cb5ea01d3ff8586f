use crate::core::{ObjectFamily, ObjectMotion};
use wasm_bindgen::prelude::*;

/// Motion state for one interactive object in the 3D scene. The external
/// renderer forwards pointer events, calls `advance` from its own frame
/// callback and copies `rotation_*`/`scale` onto its mesh.
#[wasm_bindgen]
pub struct SceneObject {
    motion: ObjectMotion,
}

#[wasm_bindgen]
impl SceneObject {
    #[wasm_bindgen(constructor)]
    pub fn new(family: &str) -> Result<SceneObject, JsValue> {
        let family = ObjectFamily::from_name(family)
            .ok_or_else(|| JsValue::from_str(&format!("unknown object family `{}`", family)))?;
        log::debug!("[objects] new {:?}", family);
        Ok(Self {
            motion: ObjectMotion::new(family),
        })
    }

    pub fn pointer_over(&mut self) {
        self.motion.set_hovered(true);
    }

    pub fn pointer_out(&mut self) {
        self.motion.set_hovered(false);
    }

    pub fn pointer_down(&mut self) {
        self.motion.set_clicked(true);
    }

    pub fn pointer_up(&mut self) {
        self.motion.set_clicked(false);
    }

    /// `dt` is seconds since the previous frame.
    pub fn advance(&mut self, dt: f32) {
        self.motion.advance(dt);
    }

    #[wasm_bindgen(getter)]
    pub fn rotation_x(&self) -> f32 {
        self.motion.rotation.x
    }

    #[wasm_bindgen(getter)]
    pub fn rotation_y(&self) -> f32 {
        self.motion.rotation.y
    }

    #[wasm_bindgen(getter)]
    pub fn rotation_z(&self) -> f32 {
        self.motion.rotation.z
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f32 {
        self.motion.scale
    }

    #[wasm_bindgen(getter)]
    pub fn hovered(&self) -> bool {
        self.motion.state().hovered
    }

    #[wasm_bindgen(getter)]
    pub fn clicked(&self) -> bool {
        self.motion.state().clicked
    }
}
