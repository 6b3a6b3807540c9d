pub mod events;
pub mod store;
pub mod poller;
pub mod session;

pub use events::ChatEvent;
pub use store::{MessageStore, SharedStore};
pub use poller::{spawn_video_poller, CancelToken, PollerConfig, PollerHandle, VideoJob};
pub use session::{ChatSession, SendOutcome};
