use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{ProfileUpdate, UserProfile};

pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn profile(&self) -> Result<UserProfile> {
        self.client.get("/users/profile").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        self.client.put("/users/profile", update).await
    }
}
