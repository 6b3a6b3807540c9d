use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: String,
    pub user_id: String,
    pub source: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /knowledge` for raw text entries. Document uploads go
/// through the multipart endpoint instead.
#[derive(Debug, Clone, Serialize)]
pub struct KnowledgeCreate {
    pub source: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl KnowledgeCreate {
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            source: "manual".to_string(),
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}
