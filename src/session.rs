//! Page context actor.
//!
//! A [`PageSession`] owns one page document and handles commands from the
//! popup side one at a time. Each request carries its own reply channel, so
//! every command gets exactly one answer.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info_span, warn, Instrument};

use fc_app::PageCommandHandler;
use fc_core::command::{Command, CommandReply};
use fc_core::ports::{ActiveTabPort, PageDomPort, TabError};

const SESSION_QUEUE: usize = 16;

/// Messages accepted by the page actor.
#[derive(Debug)]
enum PageRequest {
    Command {
        command: Command,
        respond_to: oneshot::Sender<CommandReply>,
    },
    Close,
}

pub struct PageSession<D> {
    sender: mpsc::Sender<PageRequest>,
    task: JoinHandle<D>,
}

impl<D> PageSession<D>
where
    D: PageDomPort + 'static,
{
    /// Starts the actor; the document is handed back by [`Self::shutdown`].
    pub fn spawn(document: D, handler: PageCommandHandler) -> Self {
        let (sender, mut receiver) = mpsc::channel(SESSION_QUEUE);
        let hostname = document.hostname();
        let span = info_span!("page.session", host = %hostname);

        let task = tokio::spawn(
            async move {
                let mut document = document;
                debug!("page session started");
                while let Some(request) = receiver.recv().await {
                    match request {
                        PageRequest::Command {
                            command,
                            respond_to,
                        } => {
                            let reply = handler.handle(&mut document, command).await;
                            if respond_to.send(reply).is_err() {
                                warn!(command = %command, "caller went away before the reply");
                            }
                        }
                        PageRequest::Close => break,
                    }
                }
                debug!("page session closed");
                document
            }
            .instrument(span),
        );

        Self { sender, task }
    }

    /// Channel handle the popup side talks through.
    pub fn tab(&self) -> SessionTab {
        SessionTab {
            sender: self.sender.clone(),
        }
    }

    /// Stops after the queued commands and returns the document.
    pub async fn shutdown(self) -> anyhow::Result<D> {
        // A send error means the actor already stopped; joining still works.
        let _ = self.sender.send(PageRequest::Close).await;
        Ok(self.task.await?)
    }
}

/// [`ActiveTabPort`] backed by a running [`PageSession`].
#[derive(Clone)]
pub struct SessionTab {
    sender: mpsc::Sender<PageRequest>,
}

#[async_trait]
impl ActiveTabPort for SessionTab {
    async fn send(&self, command: Command) -> Result<CommandReply, TabError> {
        let (respond_to, reply) = oneshot::channel();
        self.sender
            .send(PageRequest::Command {
                command,
                respond_to,
            })
            .await
            .map_err(|_| TabError::NoActiveTab)?;
        reply
            .await
            .map_err(|_| TabError::Unreachable("page session closed".into()))
    }
}

/// Tab port for when no page is open.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPage;

#[async_trait]
impl ActiveTabPort for NoPage {
    async fn send(&self, _command: Command) -> Result<CommandReply, TabError> {
        Err(TabError::NoActiveTab)
    }
}
