pub mod snapshot;

pub use snapshot::{ElementRow, ElementDetails, WorkspaceSummary};
