mod export_config;
mod import_config;

pub use export_config::ExportConfig;
pub use import_config::ImportConfig;
