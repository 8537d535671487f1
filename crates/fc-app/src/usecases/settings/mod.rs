mod get_settings;
mod update_settings;

pub use get_settings::GetSettings;
pub use update_settings::{SettingsUpdate, UpdateSettings};
