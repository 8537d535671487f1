//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the collaborators
//! around them: synced storage, the page document, the clock, native
//! notifications and the tab messaging channel. Adapters live in `fc-infra`
//! or in the host binary.

mod clock;
pub mod notification;
pub mod page_dom;
pub mod storage;
pub mod tab;

pub use clock::*;
pub use notification::{BadgePort, NotificationPort};
pub use page_dom::{ElementInfo, ElementRef, PageDomPort};
pub use storage::{
    CatalogRepositoryPort, ClipboardRepositoryPort, ConfigTransferPort, MappingRepositoryPort,
    SettingsPort,
};
pub use tab::{ActiveTabPort, TabError};
