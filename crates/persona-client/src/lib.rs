pub mod config;
pub mod error;
pub mod models;
pub mod client;
pub mod api;
pub mod transport;
pub mod routes;

pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use client::ApiClient;
pub use transport::ChatTransport;
pub use routes::{destination_for, Destination};
pub use models::{
    ChatMessage, Role, VideoPhase, Conversation, ConversationSummary,
    SendReply, TaskStatus, VideoStatusReply,
    UserProfile, PersonalityTraits, Preferences, ProfileUpdate, AuthReply,
    KnowledgeEntry, KnowledgeCreate,
    AvatarRecord, VoiceCloneTicket, VoiceCloneStatus,
};
