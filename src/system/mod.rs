// External Collaborator Boundary
pub mod render;
pub mod settings;

pub use render::{RecordingSink, RenderFrame, RenderSink};
pub use settings::{SettingsSnapshot, SettingsStore};
