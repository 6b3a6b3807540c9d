use serde::{Deserialize, Serialize};

/// User-visible notifications emitted by the chat session and its
/// video pollers.
///
/// Terminal video events are mutually exclusive per job: a poller emits
/// exactly one of `VideoReady`, `VideoFailed` or `VideoTimedOut`, and
/// nothing at all if its target message disappeared first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// A video generation job was queued for an assistant message.
    GenerationStarted {
        message_id: String,
        task_id: String,
    },

    /// The job completed; the message now carries the video URL.
    VideoReady {
        message_id: String,
        video_url: String,
    },

    /// The job itself reported failure.
    VideoFailed {
        message_id: String,
    },

    /// The attempt budget ran out before the job reached a terminal
    /// status.
    VideoTimedOut {
        message_id: String,
    },

    /// The send call failed; the optimistic user message stays in the
    /// store.
    SendFailed {
        detail: String,
    },
}
