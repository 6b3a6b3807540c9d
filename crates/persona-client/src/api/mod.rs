pub mod auth;
pub mod users;
pub mod conversations;
pub mod chat;
pub mod knowledge;
pub mod avatars;
pub mod voices;

pub use auth::AuthApi;
pub use avatars::AvatarsApi;
pub use chat::ChatApi;
pub use conversations::ConversationsApi;
pub use knowledge::KnowledgeApi;
pub use users::UsersApi;
pub use voices::VoicesApi;
