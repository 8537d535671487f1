use super::model::{default_ttl_seconds, Settings};

impl Default for Settings {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
            notifications: true,
            commands_enabled: true,
        }
    }
}
