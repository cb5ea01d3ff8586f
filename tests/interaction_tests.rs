// Host-side tests for per-object interaction and the badge click pulse.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod motion {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod interaction {
        include!("../src/core/interaction.rs");
    }
}

use motion::constants::*;
use motion::interaction::*;

fn settle(obj: &mut ObjectMotion, frames: usize) {
    for _ in 0..frames {
        obj.advance(1.0 / 60.0);
    }
}

#[test]
fn damp_closes_a_fixed_fraction() {
    assert!((damp(1.0, 1.2, 0.1) - 1.02).abs() < 1e-6);
    assert!((damp(1.2, 1.0, 0.1) - 1.18).abs() < 1e-6);
    assert_eq!(damp(1.0, 1.0, 0.1), 1.0);
}

#[test]
fn held_click_approaches_target_scale_without_overshoot() {
    let mut obj = ObjectMotion::new(ObjectFamily::Icosahedron);
    settle(&mut obj, 300);
    assert!((obj.scale - SCALE_REST).abs() < 1e-3);

    obj.set_clicked(true);
    let mut prev = obj.scale;
    for _ in 0..200 {
        obj.advance(1.0 / 60.0);
        assert!(obj.scale >= prev, "scale went backwards");
        assert!(obj.scale <= SCALE_CLICKED, "overshoot: {}", obj.scale);
        prev = obj.scale;
    }
    assert!((obj.scale - SCALE_CLICKED).abs() < 1e-3);
}

#[test]
fn icosahedron_starts_large_and_eases_to_rest() {
    let mut obj = ObjectMotion::new(ObjectFamily::Icosahedron);
    assert_eq!(obj.scale, 1.5);
    obj.advance(0.016);
    assert!((obj.scale - 1.45).abs() < 1e-5);
}

#[test]
fn rotation_scales_with_elapsed_time_not_frame_count() {
    let mut fast = ObjectMotion::new(ObjectFamily::Icosahedron);
    let mut slow = ObjectMotion::new(ObjectFamily::Icosahedron);
    for _ in 0..120 {
        fast.advance(1.0 / 120.0);
    }
    for _ in 0..30 {
        slow.advance(1.0 / 30.0);
    }
    assert!((fast.rotation.y - slow.rotation.y).abs() < 1e-4);
    assert!((fast.rotation.x - slow.rotation.x).abs() < 1e-4);
    assert!((fast.rotation.y - 0.1).abs() < 1e-4);
    assert!((fast.rotation.x - 0.05).abs() < 1e-4);
}

#[test]
fn hover_switches_to_fast_spin() {
    let mut obj = ObjectMotion::new(ObjectFamily::Icosahedron);
    obj.set_hovered(true);
    assert_eq!(obj.spin_speed(), 0.8);
    obj.advance(0.5);
    assert!((obj.rotation.y - 0.4).abs() < 1e-6);

    obj.set_hovered(false);
    obj.advance(0.5);
    assert!((obj.rotation.y - 0.45).abs() < 1e-6);
}

#[test]
fn ambient_mesh_ignores_pointer_but_still_rotates() {
    let mut mesh = ObjectMotion::new(ObjectFamily::AnimatedMesh);
    mesh.set_hovered(true);
    mesh.set_clicked(true);
    assert_eq!(mesh.state(), InteractionState::default());
    assert_eq!(mesh.target_scale(), SCALE_REST);

    mesh.advance(1.0);
    assert!(mesh.rotation.y > 0.0);
    assert_eq!(mesh.scale, SCALE_REST);
}

#[test]
fn families_share_damping_law() {
    for family in [
        ObjectFamily::Icosahedron,
        ObjectFamily::Prism,
        ObjectFamily::Globe,
        ObjectFamily::AnimatedMesh,
    ] {
        let c = family.constants();
        assert_eq!(c.damping, INTERACTION_DAMPING, "{family:?}");
        assert!(c.spin_hovered >= c.spin_idle, "{family:?}");
        assert!(c.clicked_scale >= c.rest_scale, "{family:?}");
    }
}

#[test]
fn negative_frame_time_is_ignored() {
    let mut obj = ObjectMotion::new(ObjectFamily::Globe);
    obj.advance(-1.0);
    assert_eq!(obj.rotation.y, 0.0);
}

#[test]
fn family_names_resolve() {
    assert_eq!(ObjectFamily::from_name("icosahedron"), Some(ObjectFamily::Icosahedron));
    assert_eq!(ObjectFamily::from_name("prism"), Some(ObjectFamily::Prism));
    assert_eq!(ObjectFamily::from_name("globe"), Some(ObjectFamily::Globe));
    assert_eq!(ObjectFamily::from_name("mesh"), Some(ObjectFamily::AnimatedMesh));
    assert_eq!(ObjectFamily::from_name("teapot"), None);
}

#[test]
fn click_pulse_ignores_repeat_clicks_while_running() {
    let mut pulse = ClickPulse::default();
    assert!(pulse.trigger(1000.0));
    assert!(pulse.is_active(1200.0));
    assert!(!pulse.trigger(1200.0));
    assert!(!pulse.trigger(1499.0));

    // window elapsed even if the timer is late
    assert!(!pulse.is_active(1500.0));
    assert!(pulse.trigger(1500.0));

    pulse.finish();
    assert!(!pulse.is_active(1600.0));
    assert!(pulse.trigger(1600.0));
}
