pub mod queue;

pub use queue::{LabEvent, LabEventQueue};
