use crate::core::{HeadState, RevealConfig, RevealStyle, SegmentStyle, TRAIL_SENTINEL};
use crate::dom::set_style;
use glam::Vec2;
use web_sys as web;

// Inline styles for the cursor layers. Positioned with translate3d from the
// top-left corner and centered on the point.
pub const HEAD_STYLE: &str = "pointer-events:none;position:fixed;left:0;top:0;z-index:9999;\
border-radius:9999px;width:18px;height:18px;background:rgba(255,255,255,0.9);\
mix-blend-mode:difference;box-shadow:0 0 24px rgba(255,255,255,0.5);filter:blur(0.2px);\
margin:-9px 0 0 -9px;transition:opacity 75ms,width 75ms,height 75ms,box-shadow 75ms;";

pub const SEGMENT_STYLE: &str = "pointer-events:none;position:fixed;left:0;top:0;z-index:9998;\
border-radius:9999px;background:rgba(255,255,255,0.5);mix-blend-mode:difference;\
box-shadow:0 0 20px rgba(255,255,255,0.25);filter:blur(2px);";

#[inline]
fn translate(p: Vec2) -> String {
    format!("translate3d({}px, {}px, 0)", p.x, p.y)
}

pub fn paint_head(el: &web::HtmlElement, head: &HeadState) {
    set_style(el, "opacity", if head.opacity() > 0.0 { "1" } else { "0" });
    set_style(el, "transform", &translate(head.position));
    _ = el.set_attribute("data-variant", head.variant().as_str());
    _ = el.set_attribute("data-active", if head.active { "true" } else { "false" });
}

pub fn paint_active(el: &web::HtmlElement, active: bool) {
    _ = el.set_attribute("data-active", if active { "true" } else { "false" });
}

/// Segments are centered by a negative margin that tracks their size.
pub fn paint_segment(el: &web::HtmlElement, p: Vec2, style: SegmentStyle) {
    set_style(el, "transform", &translate(p));
    set_style(el, "width", &format!("{}px", style.size));
    set_style(el, "height", &format!("{}px", style.height));
    set_style(
        el,
        "margin",
        &format!("{}px 0 0 {}px", -style.height * 0.5, -style.size * 0.5),
    );
    set_style(el, "opacity", &format!("{}", style.alpha));
}

/// Followers parked off-screen when the frame loop is unavailable.
pub fn park_segment(el: &web::HtmlElement) {
    set_style(el, "transform", &translate(Vec2::from_array(TRAIL_SENTINEL)));
    set_style(el, "opacity", "0");
}

pub fn paint_reveal(el: &web::HtmlElement, config: &RevealConfig, style: RevealStyle) {
    set_style(el, "transition", &config.transition_css());
    set_style(el, "opacity", &style.opacity_css());
    set_style(el, "filter", &style.filter_css());
}
