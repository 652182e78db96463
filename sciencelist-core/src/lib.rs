pub mod events;
pub mod host;
pub mod session;
pub mod settings;
pub mod toolbar;
pub mod window;

pub use events::{EventAction, HostEvent};
pub use host::HostServices;
pub use session::SessionMode;
pub use settings::{SchedulerSettings, SettingsError};
pub use toolbar::ToolbarButton;
pub use window::ChecklistWindow;
