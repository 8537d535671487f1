//! # formclip
//!
//! Host side of FormClip: configuration, tracing, dependency wiring, the
//! page session actor and the command line.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod session;

pub use bootstrap::AppRuntime;
pub use session::{NoPage, PageSession, SessionTab};
