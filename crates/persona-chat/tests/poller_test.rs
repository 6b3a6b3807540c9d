use async_trait::async_trait;
use persona_chat::{spawn_video_poller, ChatEvent, MessageStore, PollerConfig, VideoJob};
use persona_client::{
    ApiError, ChatMessage, ChatTransport, Conversation, SendReply, TaskStatus, VideoPhase,
    VideoStatusReply,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

/// Transport that only answers status checks, from a script. Once the
/// script is exhausted it keeps answering with the fallback status.
struct ScriptedStatus {
    replies: Mutex<VecDeque<Result<VideoStatusReply, ApiError>>>,
    fallback: TaskStatus,
    calls: AtomicU32,
}

impl ScriptedStatus {
    fn new(replies: Vec<Result<VideoStatusReply, ApiError>>, fallback: TaskStatus) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            fallback,
            calls: AtomicU32::new(0),
        })
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatTransport for ScriptedStatus {
    async fn fetch_conversation(&self, _id: &str) -> Result<Conversation, ApiError> {
        Err(ApiError::Internal("not scripted".to_string()))
    }

    async fn send_message(
        &self,
        _conversation_id: &str,
        _content: &str,
        _input_mode: &str,
    ) -> Result<SendReply, ApiError> {
        Err(ApiError::Internal("not scripted".to_string()))
    }

    async fn video_status(&self, task_id: &str) -> Result<VideoStatusReply, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.replies.lock().unwrap().pop_front();
        match scripted {
            Some(reply) => reply,
            None => Ok(status(task_id, self.fallback, None)),
        }
    }
}

fn status(task_id: &str, status: TaskStatus, url: Option<&str>) -> VideoStatusReply {
    VideoStatusReply {
        task_id: task_id.to_string(),
        status,
        video_url: url.map(String::from),
        error: None,
    }
}

/// Store holding a single assistant message, the poller's target.
fn store_with_target() -> (persona_chat::SharedStore, String) {
    let mut store = MessageStore::new();
    let mut message = ChatMessage::assistant("reply");
    message.video_status = VideoPhase::Generating;
    let id = message.id.clone();
    store.push(message);
    (Arc::new(tokio::sync::Mutex::new(store)), id)
}

async fn drain(mut rx: mpsc::Receiver<ChatEvent>) -> Vec<ChatEvent> {
    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    events
}

fn job(message_id: &str) -> VideoJob {
    VideoJob {
        task_id: "t1".to_string(),
        message_id: message_id.to_string(),
    }
}

#[tokio::test(start_paused = true)]
async fn completes_after_progress_updates() {
    let transport = ScriptedStatus::new(
        vec![
            Ok(status("t1", TaskStatus::Processing, None)),
            Ok(status("t1", TaskStatus::Processing, None)),
            Ok(status("t1", TaskStatus::Completed, Some("https://cdn.example.com/v.mp4"))),
        ],
        TaskStatus::Processing,
    );
    let (store, message_id) = store_with_target();
    let (tx, rx) = mpsc::channel(16);

    let handle = spawn_video_poller(
        transport.clone(),
        Arc::clone(&store),
        job(&message_id),
        tx,
        PollerConfig::default(),
    );
    handle.finished().await;

    assert_eq!(transport.calls(), 3);

    let events = drain(rx).await;
    assert_eq!(
        events,
        vec![ChatEvent::VideoReady {
            message_id: message_id.clone(),
            video_url: "https://cdn.example.com/v.mp4".to_string(),
        }]
    );

    let store = store.lock().await;
    let message = store.get(&message_id).unwrap();
    assert_eq!(message.video_status, VideoPhase::Completed);
    assert_eq!(message.video_url.as_deref(), Some("https://cdn.example.com/v.mp4"));
}

#[tokio::test(start_paused = true)]
async fn failure_on_first_poll_emits_single_failure() {
    let transport = ScriptedStatus::new(
        vec![Ok(status("t1", TaskStatus::Failed, None))],
        TaskStatus::Processing,
    );
    let (store, message_id) = store_with_target();
    let (tx, rx) = mpsc::channel(16);

    let handle = spawn_video_poller(
        transport.clone(),
        Arc::clone(&store),
        job(&message_id),
        tx,
        PollerConfig::default(),
    );
    handle.finished().await;

    assert_eq!(transport.calls(), 1);
    assert_eq!(
        drain(rx).await,
        vec![ChatEvent::VideoFailed {
            message_id: message_id.clone(),
        }]
    );

    let store = store.lock().await;
    let message = store.get(&message_id).unwrap();
    assert_eq!(message.video_status, VideoPhase::Failed);
    assert!(message.video_url.is_none());
}

#[tokio::test(start_paused = true)]
async fn budget_exhaustion_emits_single_timeout() {
    let transport = ScriptedStatus::new(Vec::new(), TaskStatus::Processing);
    let (store, message_id) = store_with_target();
    let (tx, rx) = mpsc::channel(16);

    let handle = spawn_video_poller(
        transport.clone(),
        Arc::clone(&store),
        job(&message_id),
        tx,
        PollerConfig::default(),
    );
    handle.finished().await;

    assert_eq!(transport.calls(), 60);
    assert_eq!(
        drain(rx).await,
        vec![ChatEvent::VideoTimedOut {
            message_id: message_id.clone(),
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn completion_without_url_counts_as_failure() {
    let transport = ScriptedStatus::new(
        vec![Ok(status("t1", TaskStatus::Completed, None))],
        TaskStatus::Processing,
    );
    let (store, message_id) = store_with_target();
    let (tx, rx) = mpsc::channel(16);

    let handle = spawn_video_poller(
        transport.clone(),
        Arc::clone(&store),
        job(&message_id),
        tx,
        PollerConfig::default(),
    );
    handle.finished().await;

    assert_eq!(
        drain(rx).await,
        vec![ChatEvent::VideoFailed {
            message_id: message_id.clone(),
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn transport_errors_consume_attempts_without_terminating() {
    let transport = ScriptedStatus::new(
        vec![
            Err(ApiError::Internal("connection reset".to_string())),
            Err(ApiError::Internal("connection reset".to_string())),
            Ok(status("t1", TaskStatus::Completed, Some("https://cdn.example.com/v.mp4"))),
        ],
        TaskStatus::Processing,
    );
    let (store, message_id) = store_with_target();
    let (tx, rx) = mpsc::channel(16);

    let handle = spawn_video_poller(
        transport.clone(),
        Arc::clone(&store),
        job(&message_id),
        tx,
        PollerConfig::default(),
    );
    handle.finished().await;

    assert_eq!(transport.calls(), 3);
    let events = drain(rx).await;
    assert!(matches!(events.as_slice(), [ChatEvent::VideoReady { .. }]));
}

#[tokio::test(start_paused = true)]
async fn missing_target_stops_silently() {
    let transport = ScriptedStatus::new(Vec::new(), TaskStatus::Processing);
    let store = Arc::new(tokio::sync::Mutex::new(MessageStore::new()));
    let (tx, rx) = mpsc::channel(16);

    let handle = spawn_video_poller(
        transport.clone(),
        Arc::clone(&store),
        job("removed"),
        tx,
        PollerConfig::default(),
    );
    handle.finished().await;

    assert_eq!(transport.calls(), 0);
    assert!(drain(rx).await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn target_removed_mid_poll_stops_without_mutation() {
    let transport = ScriptedStatus::new(
        vec![Ok(status("t1", TaskStatus::Processing, None))],
        TaskStatus::Processing,
    );
    let (store, message_id) = store_with_target();
    let (tx, rx) = mpsc::channel(16);

    let handle = spawn_video_poller(
        transport.clone(),
        Arc::clone(&store),
        job(&message_id),
        tx,
        PollerConfig {
            max_attempts: 10,
            interval: Duration::from_secs(2),
        },
    );

    // Let the first check happen, then yank the conversation away.
    tokio::time::sleep(Duration::from_secs(1)).await;
    store.lock().await.clear();
    handle.finished().await;

    assert!(transport.calls() <= 2);
    assert!(drain(rx).await.is_empty());
    assert!(store.lock().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancelled_before_first_check_issues_no_requests() {
    let transport = ScriptedStatus::new(Vec::new(), TaskStatus::Processing);
    let (store, message_id) = store_with_target();
    let (tx, rx) = mpsc::channel(16);

    let handle = spawn_video_poller(
        transport.clone(),
        Arc::clone(&store),
        job(&message_id),
        tx,
        PollerConfig::default(),
    );
    handle.cancel();
    handle.finished().await;

    assert_eq!(transport.calls(), 0);
    assert!(drain(rx).await.is_empty());

    let store = store.lock().await;
    assert_eq!(
        store.get(&message_id).unwrap().video_status,
        VideoPhase::Generating
    );
}
