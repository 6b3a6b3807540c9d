use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Conversation, ConversationSummary};
use serde::Serialize;

#[derive(Serialize)]
struct CreateBody<'a> {
    title: &'a str,
}

pub struct ConversationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ConversationsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, title: &str) -> Result<Conversation> {
        self.client
            .post("/conversations", &CreateBody { title })
            .await
    }

    /// Create with the product's default title.
    pub async fn create_default(&self) -> Result<Conversation> {
        self.create("New Conversation").await
    }

    pub async fn list(&self) -> Result<Vec<ConversationSummary>> {
        self.client.get("/conversations").await
    }

    /// Fetch a conversation with its messages.
    pub async fn get(&self, id: &str) -> Result<Conversation> {
        self.client.get(&format!("/conversations/{}", id)).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/conversations/{}", id)).await
    }
}
