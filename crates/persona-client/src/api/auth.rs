use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{AuthReply, UserProfile};
use serde::Serialize;

#[derive(Serialize)]
struct RegisterBody<'a> {
    email: &'a str,
    name: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Register a new account. On success the returned token is
    /// installed on the client.
    pub async fn register(&self, email: &str, name: &str, password: &str) -> Result<AuthReply> {
        let reply: AuthReply = self
            .client
            .post_anonymous("/auth/register", &RegisterBody { email, name, password })
            .await?;
        self.client.set_token(reply.access_token.clone());
        Ok(reply)
    }

    /// Log in with existing credentials. On success the returned token
    /// is installed on the client.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthReply> {
        let reply: AuthReply = self
            .client
            .post_anonymous("/auth/login", &LoginBody { email, password })
            .await?;
        self.client.set_token(reply.access_token.clone());
        Ok(reply)
    }

    /// Resume a persisted session: install the stored token, then fetch
    /// the profile it belongs to.
    pub async fn restore(&self, token: impl Into<String>) -> Result<UserProfile> {
        self.client.set_token(token);
        match self.me().await {
            Ok(profile) => Ok(profile),
            Err(err) => {
                self.client.clear_token();
                Err(err)
            }
        }
    }

    /// Profile of the authenticated user.
    pub async fn me(&self) -> Result<UserProfile> {
        self.client.get("/auth/me").await
    }

    /// Explicit session teardown; purely local.
    pub fn logout(&self) {
        self.client.clear_token();
    }
}
