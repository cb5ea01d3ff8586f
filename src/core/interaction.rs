use super::constants::*;
use glam::Vec3;

/// Exponential approach: close `factor` of the remaining gap. With `factor` in
/// (0, 1] the result never passes `target`.
#[inline]
pub fn damp(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub hovered: bool,
    pub clicked: bool,
}

/// Which behaviors an object family supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub pointer: bool,
    pub rotatable: bool,
    pub scalable_on_click: bool,
}

/// Per-family tuning. Every family shares the same laws, only these numbers
/// differ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FamilyConstants {
    pub spin_hovered: f32, // rad/s around Y while hovered
    pub spin_idle: f32,    // rad/s around Y otherwise
    pub tilt: f32,         // rad/s around X, always
    pub initial_scale: f32,
    pub rest_scale: f32,
    pub clicked_scale: f32,
    pub damping: f32,
    pub caps: Capabilities,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectFamily {
    Icosahedron,
    Prism,
    Globe,
    AnimatedMesh,
}

impl ObjectFamily {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "icosahedron" => Some(Self::Icosahedron),
            "prism" => Some(Self::Prism),
            "globe" => Some(Self::Globe),
            "animated-mesh" | "mesh" => Some(Self::AnimatedMesh),
            _ => None,
        }
    }

    pub fn constants(self) -> FamilyConstants {
        match self {
            ObjectFamily::Icosahedron => FamilyConstants {
                spin_hovered: 0.8,
                spin_idle: 0.1,
                tilt: 0.05,
                initial_scale: 1.5,
                rest_scale: SCALE_REST,
                clicked_scale: SCALE_CLICKED,
                damping: INTERACTION_DAMPING,
                caps: Capabilities {
                    pointer: true,
                    rotatable: true,
                    scalable_on_click: true,
                },
            },
            ObjectFamily::Prism => FamilyConstants {
                spin_hovered: 0.9,
                spin_idle: 0.15,
                tilt: 0.08,
                initial_scale: SCALE_REST,
                rest_scale: SCALE_REST,
                clicked_scale: 1.15,
                damping: INTERACTION_DAMPING,
                caps: Capabilities {
                    pointer: true,
                    rotatable: true,
                    scalable_on_click: true,
                },
            },
            ObjectFamily::Globe => FamilyConstants {
                spin_hovered: 0.6,
                spin_idle: 0.12,
                tilt: 0.0,
                initial_scale: SCALE_REST,
                rest_scale: SCALE_REST,
                clicked_scale: 1.1,
                damping: INTERACTION_DAMPING,
                caps: Capabilities {
                    pointer: true,
                    rotatable: true,
                    scalable_on_click: true,
                },
            },
            // loaded meshes carry their own clip animation; only ambient turn
            ObjectFamily::AnimatedMesh => FamilyConstants {
                spin_hovered: 0.2,
                spin_idle: 0.2,
                tilt: 0.0,
                initial_scale: SCALE_REST,
                rest_scale: SCALE_REST,
                clicked_scale: SCALE_REST,
                damping: INTERACTION_DAMPING,
                caps: Capabilities {
                    pointer: false,
                    rotatable: true,
                    scalable_on_click: false,
                },
            },
        }
    }
}

/// Motion of one interactive 3D object. Pointer handlers only flip
/// `state`; geometry moves in `advance`.
#[derive(Clone, Debug)]
pub struct ObjectMotion {
    consts: FamilyConstants,
    state: InteractionState,
    pub rotation: Vec3,
    pub scale: f32,
}

impl ObjectMotion {
    pub fn new(family: ObjectFamily) -> Self {
        let consts = family.constants();
        Self {
            consts,
            state: InteractionState::default(),
            rotation: Vec3::ZERO,
            scale: consts.initial_scale,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        if self.consts.caps.pointer {
            self.state.hovered = hovered;
        }
    }

    pub fn set_clicked(&mut self, clicked: bool) {
        if self.consts.caps.pointer {
            self.state.clicked = clicked;
        }
    }

    pub fn target_scale(&self) -> f32 {
        if self.consts.caps.scalable_on_click && self.state.clicked {
            self.consts.clicked_scale
        } else {
            self.consts.rest_scale
        }
    }

    pub fn spin_speed(&self) -> f32 {
        if self.state.hovered {
            self.consts.spin_hovered
        } else {
            self.consts.spin_idle
        }
    }

    /// Advance by `dt_sec` of wall time since the previous frame.
    pub fn advance(&mut self, dt_sec: f32) {
        let dt = dt_sec.max(0.0);
        if self.consts.caps.rotatable {
            self.rotation.y += dt * self.spin_speed();
            self.rotation.x += dt * self.consts.tilt;
        }
        self.scale = damp(self.scale, self.target_scale(), self.consts.damping);
    }
}

/// One-shot click emphasis. Clicks during a running pulse are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClickPulse {
    started_ms: Option<f64>,
}

impl ClickPulse {
    /// Returns true when this click started a new pulse.
    pub fn trigger(&mut self, now_ms: f64) -> bool {
        if self.is_active(now_ms) {
            return false;
        }
        self.started_ms = Some(now_ms);
        true
    }

    pub fn is_active(&self, now_ms: f64) -> bool {
        match self.started_ms {
            Some(t0) => now_ms - t0 < CLICK_PULSE_MS,
            None => false,
        }
    }

    /// Clear once the pulse timer has fired.
    pub fn finish(&mut self) {
        self.started_ms = None;
    }
}
