//! Command routing on both sides of the tab message channel.

mod dispatcher;
mod messages;
mod page_handler;

pub use dispatcher::{TabDispatcher, DEFAULT_DISPATCH_TIMEOUT};
pub use page_handler::PageCommandHandler;
