use crate::events::ChatEvent;
use crate::store::SharedStore;
use persona_client::{ChatTransport, TaskStatus, VideoPhase};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Cooperative cancellation flag shared with a spawned poller. The
/// task is never aborted; it checks the flag each cycle and exits on
/// its own.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Client-side handle for one server-side video generation task, bound
/// to the assistant message it must update. A new send always creates
/// a fresh job; handles are never reused.
#[derive(Debug, Clone)]
pub struct VideoJob {
    pub task_id: String,
    pub message_id: String,
}

#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Status checks issued before the job is declared timed out.
    pub max_attempts: u32,
    /// Suspension between consecutive checks.
    pub interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            max_attempts: 60,
            interval: Duration::from_secs(2),
        }
    }
}

/// Revocable handle to a spawned poller.
pub struct PollerHandle {
    token: CancelToken,
    join: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop the poller: no further requests, no further mutation. A
    /// status response already in flight is discarded on arrival.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait for the task to wind down (used in tests).
    pub async fn finished(self) {
        let _ = self.join.await;
    }
}

/// Spawn the status poller for one video job.
///
/// The task polls until the job reports a terminal status or the
/// attempt budget runs out, then emits exactly one terminal event. If
/// the target message has disappeared from the store (conversation
/// switched or deleted), it stops silently. Transport errors on a
/// single check are logged and consume an attempt.
pub fn spawn_video_poller(
    transport: Arc<dyn ChatTransport>,
    store: SharedStore,
    job: VideoJob,
    events: mpsc::Sender<ChatEvent>,
    config: PollerConfig,
) -> PollerHandle {
    let token = CancelToken::new();
    let cancel = token.clone();

    let join = tokio::spawn(async move {
        poll_loop(transport, store, job, events, config, cancel).await;
    });

    PollerHandle { token, join }
}

async fn poll_loop(
    transport: Arc<dyn ChatTransport>,
    store: SharedStore,
    job: VideoJob,
    events: mpsc::Sender<ChatEvent>,
    config: PollerConfig,
    cancel: CancelToken,
) {
    for attempt in 1..=config.max_attempts {
        if cancel.is_cancelled() {
            return;
        }
        // Target gone: the conversation was switched or deleted.
        if !store.lock().await.contains(&job.message_id) {
            return;
        }

        match transport.video_status(&job.task_id).await {
            Ok(reply) => {
                if cancel.is_cancelled() {
                    // Late result after cancellation: discard.
                    return;
                }
                match reply.status {
                    TaskStatus::Completed => {
                        match reply.video_url {
                            Some(url) => {
                                let updated =
                                    store.lock().await.complete_video(&job.message_id, &url);
                                if updated {
                                    let _ = events
                                        .send(ChatEvent::VideoReady {
                                            message_id: job.message_id.clone(),
                                            video_url: url,
                                        })
                                        .await;
                                }
                            }
                            None => {
                                // Completion without a result payload is a failure.
                                tracing::warn!(
                                    "video task {} completed without a URL",
                                    job.task_id
                                );
                                mark_failed(&store, &events, &job).await;
                            }
                        }
                        return;
                    }
                    TaskStatus::Failed => {
                        mark_failed(&store, &events, &job).await;
                        return;
                    }
                    TaskStatus::Pending | TaskStatus::Processing | TaskStatus::Unknown => {}
                }
            }
            Err(err) => {
                tracing::warn!(
                    "status check {} for video task {} failed: {}",
                    attempt,
                    job.task_id,
                    err
                );
            }
        }

        if attempt < config.max_attempts {
            tokio::time::sleep(config.interval).await;
        }
    }

    if cancel.is_cancelled() {
        return;
    }
    let updated = store
        .lock()
        .await
        .set_video_phase(&job.message_id, VideoPhase::Failed);
    if updated {
        tracing::warn!(
            "video task {} still not terminal after {} attempts",
            job.task_id,
            config.max_attempts
        );
        let _ = events
            .send(ChatEvent::VideoTimedOut {
                message_id: job.message_id.clone(),
            })
            .await;
    }
}

async fn mark_failed(store: &SharedStore, events: &mpsc::Sender<ChatEvent>, job: &VideoJob) {
    let updated = store
        .lock()
        .await
        .set_video_phase(&job.message_id, VideoPhase::Failed);
    if updated {
        let _ = events
            .send(ChatEvent::VideoFailed {
                message_id: job.message_id.clone(),
            })
            .await;
    }
}
