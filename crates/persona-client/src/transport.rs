use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Conversation, SendReply, VideoStatusReply};
use async_trait::async_trait;

/// The slice of the backend the chat session depends on.
///
/// Kept object-safe so session and poller logic can be driven against a
/// scripted implementation in tests.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Fetch a conversation with its messages.
    async fn fetch_conversation(&self, conversation_id: &str) -> Result<Conversation>;

    /// Submit a message, returning the assistant reply and an optional
    /// video task id.
    async fn send_message(
        &self,
        conversation_id: &str,
        content: &str,
        input_mode: &str,
    ) -> Result<SendReply>;

    /// One status check for a queued video task.
    async fn video_status(&self, task_id: &str) -> Result<VideoStatusReply>;
}

#[async_trait]
impl ChatTransport for ApiClient {
    async fn fetch_conversation(&self, conversation_id: &str) -> Result<Conversation> {
        self.conversations().get(conversation_id).await
    }

    async fn send_message(
        &self,
        conversation_id: &str,
        content: &str,
        input_mode: &str,
    ) -> Result<SendReply> {
        self.chat().send(conversation_id, content, input_mode).await
    }

    async fn video_status(&self, task_id: &str) -> Result<VideoStatusReply> {
        self.chat().video_status(task_id).await
    }
}
