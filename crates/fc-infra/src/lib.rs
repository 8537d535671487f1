//! # fc-infra
//!
//! Infrastructure adapters for FormClip: synced storage, clocks, the status
//! ticker and an in-memory page document.

pub mod dom;
pub mod storage;
pub mod time;

pub use dom::MemoryDocument;
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageRepository};
pub use time::{ManualClock, StatusTicker, SystemClock};
