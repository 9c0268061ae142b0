pub mod atom;
pub mod classifier;
pub mod workspace;

pub use atom::{AtomKind, BondAtom, BondCatalog};
pub use classifier::{BondType, electronegativity_gap, IONIC_THRESHOLD, POLAR_THRESHOLD};
pub use workspace::{Workspace, WorkspaceState, Placement, WORKSPACE_CAPACITY};
