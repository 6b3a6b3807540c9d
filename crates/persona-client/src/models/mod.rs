pub mod chat;
pub mod user;
pub mod knowledge;
pub mod avatar;

pub use chat::{
    ChatMessage, Role, VideoPhase, Conversation, ConversationSummary, SendReply, TaskStatus,
    VideoStatusReply,
};
pub use user::{AuthReply, PersonalityTraits, Preferences, ProfileUpdate, UserProfile};
pub use knowledge::{KnowledgeCreate, KnowledgeEntry};
pub use avatar::{AvatarRecord, VoiceCloneStatus, VoiceCloneTicket};
