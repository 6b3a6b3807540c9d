use persona_client::{ChatMessage, Conversation, VideoPhase};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Store shared between the session and its pollers.
pub type SharedStore = Arc<Mutex<MessageStore>>;

/// Ordered message list of the currently open conversation.
///
/// Pollers resolve their target by stable message id, never by
/// position, and every mutation is "update if present": once the
/// conversation is switched or cleared, a late update is a no-op and
/// the caller learns so from the return value.
#[derive(Debug, Default)]
pub struct MessageStore {
    conversation_id: Option<String>,
    messages: Vec<ChatMessage>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with a freshly loaded conversation.
    pub fn replace(&mut self, conversation: Conversation) {
        self.conversation_id = Some(conversation.id);
        self.messages = conversation.messages;
    }

    pub fn clear(&mut self) {
        self.conversation_id = None;
        self.messages.clear();
    }

    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn contains(&self, message_id: &str) -> bool {
        self.messages.iter().any(|m| m.id == message_id)
    }

    pub fn get(&self, message_id: &str) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == message_id)
    }

    /// Snapshot for rendering.
    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.messages.clone()
    }

    /// Set the video phase of a message. Returns false if the message
    /// is no longer present.
    pub fn set_video_phase(&mut self, message_id: &str, phase: VideoPhase) -> bool {
        match self.messages.iter_mut().find(|m| m.id == message_id) {
            Some(message) => {
                message.video_status = phase;
                true
            }
            None => false,
        }
    }

    /// Attach the finished video to a message and mark it completed.
    /// Returns false if the message is no longer present.
    pub fn complete_video(&mut self, message_id: &str, video_url: &str) -> bool {
        match self.messages.iter_mut().find(|m| m.id == message_id) {
            Some(message) => {
                message.video_url = Some(video_url.to_string());
                message.video_status = VideoPhase::Completed;
                true
            }
            None => false,
        }
    }
}
