pub mod controller;
pub mod debounce;
pub mod tasks;

pub use controller::{Activation, AddonController};
pub use debounce::{RefreshKind, UpdateDebouncer};
pub use tasks::{ExperimentUpdater, FilterRefresher, ReadinessWait, TaskStatus};
