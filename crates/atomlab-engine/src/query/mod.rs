pub mod search;
pub mod derive;
pub mod view;

pub use search::query;
pub use derive::{neutron_count, electron_shell_distribution, shell_capacity};
pub use view::PeriodicTableView;
