use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{KnowledgeCreate, KnowledgeEntry};

pub struct KnowledgeApi<'a> {
    client: &'a ApiClient,
}

impl<'a> KnowledgeApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create an entry from raw text.
    pub async fn create(&self, entry: &KnowledgeCreate) -> Result<KnowledgeEntry> {
        self.client.post("/knowledge", entry).await
    }

    /// Upload a document (.pdf or .txt); the backend extracts the text.
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<KnowledgeEntry> {
        self.client
            .post_file("/knowledge/upload", file_name, content_type, bytes)
            .await
    }

    pub async fn list(&self) -> Result<Vec<KnowledgeEntry>> {
        self.client.get("/knowledge").await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/knowledge/{}", id)).await
    }
}
