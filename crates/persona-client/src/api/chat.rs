use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{SendReply, VideoStatusReply};
use serde::Serialize;

#[derive(Serialize)]
struct SendBody<'a> {
    content: &'a str,
    input_mode: &'a str,
}

pub struct ChatApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ChatApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Send a message and receive the assistant reply. The reply may
    /// carry a `video_task_id` for an asynchronously generated video.
    pub async fn send(
        &self,
        conversation_id: &str,
        content: &str,
        input_mode: &str,
    ) -> Result<SendReply> {
        self.client
            .post_with_query(
                "/chat/send",
                &[("conversation_id", conversation_id)],
                &SendBody {
                    content,
                    input_mode,
                },
            )
            .await
    }

    /// Poll the status of a queued video generation task.
    pub async fn video_status(&self, task_id: &str) -> Result<VideoStatusReply> {
        self.client
            .get(&format!("/chat/video-status/{}", task_id))
            .await
    }
}
