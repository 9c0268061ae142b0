pub mod api;
pub mod assets;
pub mod bond;
pub mod bridge;
pub mod input;
pub mod query;

// Re-export key types at crate root for convenience
pub use api::error::{LabError, Result};
pub use api::lab::{Lab, LabConfig, EventOutcome};
pub use assets::{
    Category, Element, ElementRegistry, RegistryError,
    category_label_for_key, category_color_token_for_key, filter_options,
    NO_FILTER_LABEL,
};
pub use bond::{AtomKind, BondAtom, BondCatalog, BondType, Workspace, WorkspaceState, Placement};
pub use bridge::{ElementRow, ElementDetails, WorkspaceSummary};
pub use input::{LabEvent, LabEventQueue};
pub use query::{query, neutron_count, electron_shell_distribution, PeriodicTableView};
