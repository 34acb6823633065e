// Data Models
pub mod button;
pub mod config;
pub mod layout;
pub mod runtime;

pub use button::{actions, ArrowSide, ButtonRole, ButtonSpec};
pub use config::{Configuration, MAX_LAYOUTS};
pub use layout::LayoutSet;
pub use runtime::{Capability, DisabledFlags, Orientation, RuntimeState};
