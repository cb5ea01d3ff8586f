use crate::core::{MotionConfig, OVERRIDE_KEYS};
use web_sys as web;

/// Read `data-trail-follow`, `data-reveal-settle-ms`, ... from `<html>`.
pub fn load(document: &web::Document) -> MotionConfig {
    let Some(root) = document.document_element() else {
        return MotionConfig::default();
    };
    let values: Vec<(&str, String)> = OVERRIDE_KEYS
        .iter()
        .filter_map(|key| {
            root.get_attribute(&format!("data-{}", key))
                .map(|v| (*key, v))
        })
        .collect();
    let config = MotionConfig::from_overrides(values.iter().map(|(k, v)| (*k, v.as_str())));
    if !values.is_empty() {
        log::info!("[config] {} override(s) applied: {:?}", values.len(), config);
    }
    config
}
