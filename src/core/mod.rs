// Decision Logic
pub mod engine;
pub mod notifier;
pub mod store;
pub mod visibility;

pub use engine::{BarSlot, CycleDirection, LightsOutSlot, SlotKind, SlotWidth};
pub use notifier::{BarEvent, EventQueue, ShowingState};
pub use visibility::{DpadOverride, Visibility};
