pub mod config;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_or_default, resolve, ResolvedConfig};
pub use runtime::{AppRuntime, UseCases};
pub use wiring::{wire_dependencies, wire_with_store, HostAdapters};
