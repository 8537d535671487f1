//! In-memory page document used by the command-line host and tests.

mod document;
mod fixture;
mod selector;

pub use document::{DomEvent, DomEventKind, MemoryDocument};
pub use fixture::{NodeFixture, PageFixture};
