//! FormClip application layer
//!
//! Use cases over the core ports, the two command routers and notification
//! delivery.

pub mod deps;
pub mod router;
pub mod usecases;

pub use deps::AppDeps;
pub use router::{PageCommandHandler, TabDispatcher};
