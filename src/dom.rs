use crate::core::{classify_target, MotionError, TargetKind};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn body(document: &web::Document) -> Result<web::HtmlElement, MotionError> {
    document.body().ok_or(MotionError::MissingElement("body"))
}

#[inline]
pub fn root_element(document: &web::Document) -> Result<web::HtmlElement, MotionError> {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .ok_or(MotionError::MissingElement("html"))
}

pub fn create_div(
    document: &web::Document,
    class_name: &str,
    style: &str,
) -> Result<web::HtmlElement, MotionError> {
    let el = document
        .create_element("div")
        .map_err(|_| MotionError::MissingElement("div"))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| MotionError::MissingElement("div"))?;
    el.set_class_name(class_name);
    _ = el.set_attribute("aria-hidden", "true");
    _ = el.set_attribute("style", style);
    Ok(el)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

#[inline]
pub fn detach(el: &web::Element) {
    el.remove();
}

/// Classify whatever the pointer is over for the cursor head.
pub fn classify_event_target(target: Option<web::EventTarget>) -> TargetKind {
    let Some(el) = target.and_then(|t| t.dyn_into::<web::HtmlElement>().ok()) else {
        return TargetKind::Plain;
    };
    let role = el.get_attribute("role");
    classify_target(
        &el.tag_name(),
        role.as_deref(),
        el.is_content_editable(),
        el.class_list().contains("cursor-pointer"),
    )
}

#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
