pub mod config;
pub mod constants;
pub mod error;
pub mod interaction;
pub mod reveal;
pub mod trail;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use interaction::*;
pub use reveal::*;
pub use trail::*;
