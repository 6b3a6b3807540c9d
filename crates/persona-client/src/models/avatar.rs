use super::chat::TaskStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Avatar training record returned by the avatar endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarRecord {
    pub id: String,
    pub user_id: String,
    pub training_status: TaskStatus,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Reply of `POST /voices/upload`: the cloning job was queued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceCloneTicket {
    pub success: bool,
    pub task_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply of `GET /voices/clone-status/{task_id}`. A completed clone
/// carries the id the backend will use for synthesized speech.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceCloneStatus {
    pub status: TaskStatus,
    #[serde(default)]
    pub clone_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
