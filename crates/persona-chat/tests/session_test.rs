use async_trait::async_trait;
use chrono::Utc;
use persona_chat::{ChatEvent, ChatSession, SendOutcome};
use persona_client::{
    ApiError, ChatMessage, ChatTransport, Conversation, SendReply, TaskStatus, VideoPhase,
    VideoStatusReply,
};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-memory backend scripted per test.
struct FakeBackend {
    conversations: Mutex<HashMap<String, Conversation>>,
    send_replies: Mutex<VecDeque<Result<SendReply, ApiError>>>,
    status_replies: Mutex<VecDeque<VideoStatusReply>>,
    status_fallback: TaskStatus,
    status_calls: AtomicU32,
}

impl FakeBackend {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            conversations: Mutex::new(HashMap::new()),
            send_replies: Mutex::new(VecDeque::new()),
            status_replies: Mutex::new(VecDeque::new()),
            status_fallback: TaskStatus::Processing,
            status_calls: AtomicU32::new(0),
        })
    }

    fn add_conversation(&self, id: &str) {
        let conversation = Conversation {
            id: id.to_string(),
            user_id: "u1".to_string(),
            title: "New Conversation".to_string(),
            messages: Vec::new(),
            started_at: Utc::now(),
            last_message_at: Utc::now(),
            message_count: 0,
            summary: None,
            tags: Vec::new(),
        };
        self.conversations
            .lock()
            .unwrap()
            .insert(id.to_string(), conversation);
    }

    fn script_send(&self, reply: Result<SendReply, ApiError>) {
        self.send_replies.lock().unwrap().push_back(reply);
    }

    fn script_status(&self, status: TaskStatus, url: Option<&str>) {
        self.status_replies.lock().unwrap().push_back(VideoStatusReply {
            task_id: "t1".to_string(),
            status,
            video_url: url.map(String::from),
            error: None,
        });
    }

    fn status_calls(&self) -> u32 {
        self.status_calls.load(Ordering::SeqCst)
    }
}

fn reply(content: &str, video_task_id: Option<&str>) -> SendReply {
    SendReply {
        message: ChatMessage::assistant(content),
        video_task_id: video_task_id.map(String::from),
        knowledge_used: false,
    }
}

#[async_trait]
impl ChatTransport for FakeBackend {
    async fn fetch_conversation(&self, conversation_id: &str) -> Result<Conversation, ApiError> {
        self.conversations
            .lock()
            .unwrap()
            .get(conversation_id)
            .cloned()
            .ok_or(ApiError::Status {
                code: 404,
                detail: "Conversation not found".to_string(),
            })
    }

    async fn send_message(
        &self,
        _conversation_id: &str,
        _content: &str,
        _input_mode: &str,
    ) -> Result<SendReply, ApiError> {
        self.send_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ApiError::Internal("no scripted reply".to_string())))
    }

    async fn video_status(&self, task_id: &str) -> Result<VideoStatusReply, ApiError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.status_replies.lock().unwrap().pop_front();
        Ok(scripted.unwrap_or(VideoStatusReply {
            task_id: task_id.to_string(),
            status: self.status_fallback,
            video_url: None,
            error: None,
        }))
    }
}

#[tokio::test(start_paused = true)]
async fn send_without_job_appends_exactly_two_messages() {
    let backend = FakeBackend::new();
    backend.add_conversation("c1");
    backend.script_send(Ok(reply("Hi! How can I help?", None)));

    let (mut session, mut rx) = ChatSession::new(backend.clone());
    session.open("c1").await.unwrap();

    let outcome = session.send("hello").await.unwrap();
    assert_eq!(outcome, SendOutcome::Delivered);

    let messages = session.messages().await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, "hello");
    assert_eq!(messages[1].content, "Hi! How can I help?");

    // No job, no poller, no notifications.
    assert_eq!(backend.status_calls(), 0);
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn send_with_job_polls_to_completion() {
    let backend = FakeBackend::new();
    backend.add_conversation("c1");
    backend.script_send(Ok(reply("Watch this", Some("t1"))));
    backend.script_status(TaskStatus::Processing, None);
    backend.script_status(TaskStatus::Processing, None);
    backend.script_status(TaskStatus::Completed, Some("https://cdn.example.com/v.mp4"));

    let (mut session, mut rx) = ChatSession::new(backend.clone());
    session.open("c1").await.unwrap();

    let outcome = session.send("make a video").await.unwrap();
    assert_eq!(outcome, SendOutcome::GeneratingVideo);

    let started = rx.recv().await.unwrap();
    let message_id = match started {
        ChatEvent::GenerationStarted {
            message_id,
            task_id,
        } => {
            assert_eq!(task_id, "t1");
            message_id
        }
        other => panic!("expected GenerationStarted, got {:?}", other),
    };

    let ready = rx.recv().await.unwrap();
    assert_eq!(
        ready,
        ChatEvent::VideoReady {
            message_id: message_id.clone(),
            video_url: "https://cdn.example.com/v.mp4".to_string(),
        }
    );

    let messages = session.messages().await;
    let assistant = messages.iter().find(|m| m.id == message_id).unwrap();
    assert_eq!(assistant.video_status, VideoPhase::Completed);
    assert_eq!(
        assistant.video_url.as_deref(),
        Some("https://cdn.example.com/v.mp4")
    );

    // Exactly one terminal notification.
    assert_eq!(backend.status_calls(), 3);
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn failed_send_keeps_optimistic_user_message() {
    let backend = FakeBackend::new();
    backend.add_conversation("c1");
    backend.script_send(Err(ApiError::Internal("connection reset".to_string())));

    let (mut session, mut rx) = ChatSession::new(backend.clone());
    session.open("c1").await.unwrap();

    let outcome = session.send("hello?").await.unwrap();
    assert_eq!(outcome, SendOutcome::Failed);

    let messages = session.messages().await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "hello?");

    match rx.recv().await.unwrap() {
        ChatEvent::SendFailed { .. } => {}
        other => panic!("expected SendFailed, got {:?}", other),
    }
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn empty_input_is_not_dispatched() {
    let backend = FakeBackend::new();
    backend.add_conversation("c1");

    let (mut session, mut rx) = ChatSession::new(backend.clone());
    session.open("c1").await.unwrap();

    let outcome = session.send("   ").await.unwrap();
    assert_eq!(outcome, SendOutcome::Empty);
    assert!(session.messages().await.is_empty());
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn send_without_open_conversation_is_an_error() {
    let backend = FakeBackend::new();
    let (mut session, _rx) = ChatSession::new(backend.clone());

    assert!(session.send("hello").await.is_err());
    assert!(session.messages().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn switching_conversations_cancels_inflight_pollers() {
    let backend = FakeBackend::new();
    backend.add_conversation("c1");
    backend.add_conversation("c2");
    // Job never reaches a terminal status.
    backend.script_send(Ok(reply("Rendering...", Some("t1"))));

    let (mut session, mut rx) = ChatSession::new(backend.clone());
    session.open("c1").await.unwrap();
    session.send("make a video").await.unwrap();

    match rx.recv().await.unwrap() {
        ChatEvent::GenerationStarted { .. } => {}
        other => panic!("expected GenerationStarted, got {:?}", other),
    }

    session.open("c2").await.unwrap();
    let calls_at_switch = backend.status_calls();

    // Long enough that an uncancelled poller would have timed out.
    tokio::time::sleep(Duration::from_secs(300)).await;

    assert!(backend.status_calls() <= calls_at_switch + 1);
    assert!(rx.try_recv().is_err());
    assert!(session.messages().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn closing_the_session_cancels_pollers() {
    let backend = FakeBackend::new();
    backend.add_conversation("c1");
    backend.script_send(Ok(reply("Rendering...", Some("t1"))));

    let (mut session, mut rx) = ChatSession::new(backend.clone());
    session.open("c1").await.unwrap();
    session.send("make a video").await.unwrap();

    match rx.recv().await.unwrap() {
        ChatEvent::GenerationStarted { .. } => {}
        other => panic!("expected GenerationStarted, got {:?}", other),
    }

    session.close().await;
    let calls_at_close = backend.status_calls();

    tokio::time::sleep(Duration::from_secs(300)).await;

    assert!(backend.status_calls() <= calls_at_close + 1);
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn opening_a_conversation_loads_its_messages() {
    let backend = FakeBackend::new();
    backend.add_conversation("c1");
    {
        let mut conversations = backend.conversations.lock().unwrap();
        let conversation = conversations.get_mut("c1").unwrap();
        conversation.messages.push(ChatMessage::user("earlier"));
        conversation.messages.push(ChatMessage::assistant("context"));
    }

    let (mut session, _rx) = ChatSession::new(backend.clone());
    session.open("c1").await.unwrap();

    let messages = session.messages().await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, "earlier");
}
