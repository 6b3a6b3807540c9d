use crate::client::ApiClient;
use crate::error::Result;
use crate::models::AvatarRecord;

pub struct AvatarsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AvatarsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Upload the recorded training video; queues avatar training.
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<AvatarRecord> {
        self.client
            .post_file("/avatars/upload", file_name, content_type, bytes)
            .await
    }

    pub async fn status(&self, avatar_id: &str) -> Result<AvatarRecord> {
        self.client
            .get(&format!("/avatars/status/{}", avatar_id))
            .await
    }

    /// The authenticated user's avatar, if one exists.
    pub async fn my_avatar(&self) -> Result<AvatarRecord> {
        self.client.get("/avatars/my-avatar").await
    }
}
