pub mod badge;
pub mod media;
pub mod pointer;

use gloo::events::EventListener;
use smallvec::SmallVec;

pub use badge::wire_click_pulses;
pub use media::MotionGate;
pub use pointer::wire_cursor_input;

/// Listener set torn down as a unit. Each `EventListener` removes itself from
/// its target when dropped.
#[derive(Default)]
pub struct Listeners {
    items: SmallVec<[EventListener; 4]>,
}

impl Listeners {
    pub fn push(&mut self, listener: EventListener) {
        self.items.push(listener);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn detach_all(&mut self) {
        self.items.clear();
    }
}
