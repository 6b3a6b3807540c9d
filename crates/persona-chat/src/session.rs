use crate::events::ChatEvent;
use crate::poller::{spawn_video_poller, PollerConfig, PollerHandle, VideoJob};
use crate::store::{MessageStore, SharedStore};
use anyhow::{anyhow, Result};
use persona_client::{ChatMessage, ChatTransport, VideoPhase};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// What became of a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was empty after trimming; nothing was dispatched.
    Empty,
    /// The send call failed; the optimistic user message stays.
    Failed,
    /// Assistant reply appended, no video job queued.
    Delivered,
    /// Assistant reply appended and a video poller spawned.
    GeneratingVideo,
}

/// Orchestrates one open conversation: optimistic sends, assistant
/// replies, and the lifecycle of video pollers bound to them.
///
/// Notifications flow through the event receiver returned by [`new`];
/// switching conversations or dropping the session cancels every
/// poller it spawned.
///
/// [`new`]: ChatSession::new
pub struct ChatSession {
    transport: Arc<dyn ChatTransport>,
    store: SharedStore,
    events: mpsc::Sender<ChatEvent>,
    pollers: Vec<PollerHandle>,
    poller_config: PollerConfig,
}

impl ChatSession {
    pub fn new(transport: Arc<dyn ChatTransport>) -> (Self, mpsc::Receiver<ChatEvent>) {
        let (tx, rx) = mpsc::channel(256);
        let session = Self {
            transport,
            store: Arc::new(Mutex::new(MessageStore::new())),
            events: tx,
            pollers: Vec::new(),
            poller_config: PollerConfig::default(),
        };
        (session, rx)
    }

    pub fn with_poller_config(mut self, config: PollerConfig) -> Self {
        self.poller_config = config;
        self
    }

    /// Shared handle to the message store, for rendering.
    pub fn store(&self) -> SharedStore {
        Arc::clone(&self.store)
    }

    /// Open a conversation, replacing the previous one. Pollers bound
    /// to the abandoned conversation are cancelled.
    pub async fn open(&mut self, conversation_id: &str) -> Result<()> {
        let conversation = self.transport.fetch_conversation(conversation_id).await?;
        self.cancel_pollers();
        self.store.lock().await.replace(conversation);
        Ok(())
    }

    /// Close the current conversation and cancel its pollers.
    pub async fn close(&mut self) {
        self.cancel_pollers();
        self.store.lock().await.clear();
    }

    /// Submit a message in text mode.
    pub async fn send(&mut self, content: &str) -> Result<SendOutcome> {
        self.send_with_mode(content, "text").await
    }

    /// Submit a message.
    ///
    /// The user message is appended optimistically before the network
    /// round trip; a failed send keeps it (the interaction contract
    /// favors not losing input) and surfaces a [`ChatEvent::SendFailed`]
    /// notification. If the reply carries a video task id, exactly one
    /// poller is spawned for the new assistant message.
    pub async fn send_with_mode(&mut self, content: &str, input_mode: &str) -> Result<SendOutcome> {
        let content = content.trim();
        if content.is_empty() {
            return Ok(SendOutcome::Empty);
        }

        let conversation_id = {
            let store = self.store.lock().await;
            store
                .conversation_id()
                .map(String::from)
                .ok_or_else(|| anyhow!("no conversation is open"))?
        };

        self.store.lock().await.push(ChatMessage::user(content));

        let reply = match self
            .transport
            .send_message(&conversation_id, content, input_mode)
            .await
        {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!("send to conversation {} failed: {}", conversation_id, err);
                let _ = self
                    .events
                    .send(ChatEvent::SendFailed {
                        detail: err.to_string(),
                    })
                    .await;
                return Ok(SendOutcome::Failed);
            }
        };

        let mut message = reply.message;
        match reply.video_task_id {
            Some(task_id) => {
                message.video_status = VideoPhase::Generating;
                let message_id = message.id.clone();
                self.store.lock().await.push(message);

                let _ = self
                    .events
                    .send(ChatEvent::GenerationStarted {
                        message_id: message_id.clone(),
                        task_id: task_id.clone(),
                    })
                    .await;

                let handle = spawn_video_poller(
                    Arc::clone(&self.transport),
                    self.store(),
                    VideoJob {
                        task_id,
                        message_id,
                    },
                    self.events.clone(),
                    self.poller_config.clone(),
                );
                self.pollers.push(handle);
                Ok(SendOutcome::GeneratingVideo)
            }
            None => {
                self.store.lock().await.push(message);
                Ok(SendOutcome::Delivered)
            }
        }
    }

    /// Snapshot of the open conversation's messages.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.store.lock().await.snapshot()
    }

    fn cancel_pollers(&mut self) {
        for poller in self.pollers.drain(..) {
            poller.cancel();
        }
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.cancel_pollers();
    }
}
