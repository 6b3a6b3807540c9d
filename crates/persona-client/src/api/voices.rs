use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{VoiceCloneStatus, VoiceCloneTicket};

pub struct VoicesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> VoicesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Upload a voice sample; queues a cloning job and returns its task id.
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<VoiceCloneTicket> {
        self.client
            .post_file("/voices/upload", file_name, content_type, bytes)
            .await
    }

    /// Poll a cloning job. A completed clone also updates the user's
    /// voice id server-side.
    pub async fn clone_status(&self, task_id: &str) -> Result<VoiceCloneStatus> {
        self.client
            .get(&format!("/voices/clone-status/{}", task_id))
            .await
    }
}
