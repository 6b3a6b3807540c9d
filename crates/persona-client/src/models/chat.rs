use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Client-side view of a message's video lifecycle. The backend only
/// stores the final `video_url`; the intermediate phases exist so the
/// UI can render a generating/failed state while a job is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoPhase {
    #[default]
    None,
    Generating,
    Completed,
    Failed,
}

impl VideoPhase {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// One turn of a conversation. Mutated in place when an associated
/// video job resolves; never deleted on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "VideoPhase::is_none")]
    pub video_status: VideoPhase,
}

impl ChatMessage {
    /// Create a user message with a fresh local id
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            response_time_ms: None,
            video_url: None,
            audio_url: None,
            video_status: VideoPhase::None,
        }
    }

    /// Create an assistant message with a fresh local id
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            response_time_ms: None,
            video_url: None,
            audio_url: None,
            video_status: VideoPhase::None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    pub started_at: DateTime<Utc>,
    pub last_message_at: DateTime<Utc>,
    #[serde(default)]
    pub message_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// List-view projection returned by `GET /conversations` (no messages).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message_count: u64,
    pub started_at: DateTime<Utc>,
    pub last_message_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Reply of `POST /chat/send`. A present `video_task_id` means a video
/// generation job was queued for the assistant message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendReply {
    pub message: ChatMessage,
    #[serde(default)]
    pub video_task_id: Option<String>,
    #[serde(default)]
    pub knowledge_used: bool,
}

/// Server-side status of an asynchronous generation task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Reply of `GET /chat/video-status/{task_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoStatusReply {
    pub task_id: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
