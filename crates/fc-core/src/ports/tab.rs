use async_trait::async_trait;
use thiserror::Error;

use crate::command::{Command, CommandReply};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("no active tab")]
    NoActiveTab,

    #[error("page did not answer: {0}")]
    Unreachable(String),
}

/// Message channel to the page context of the active tab.
#[async_trait]
pub trait ActiveTabPort: Send + Sync {
    async fn send(&self, command: Command) -> Result<CommandReply, TabError>;
}
