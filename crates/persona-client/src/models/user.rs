use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Personality sliders, each in [1, 10].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityTraits {
    pub formality: u8,
    pub enthusiasm: u8,
    pub verbosity: u8,
    pub humor: u8,
    #[serde(default)]
    pub traits: Vec<String>,
}

impl Default for PersonalityTraits {
    fn default() -> Self {
        Self {
            formality: 5,
            enthusiasm: 5,
            verbosity: 5,
            humor: 5,
            traits: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub voice_speed: f32,
    pub video_quality: String,
    pub context_window: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            voice_speed: 1.0,
            video_quality: "720p".to_string(),
            context_window: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub avatar_id: Option<String>,
    #[serde(default)]
    pub voice_id: Option<String>,
    pub onboarding_completed: bool,
    #[serde(default)]
    pub personality: PersonalityTraits,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Reply of `POST /auth/register` and `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthReply {
    pub access_token: String,
    pub token_type: String,
    pub user: UserProfile,
}

/// Body of `PUT /users/profile`. Only the present fields are updated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality: Option<PersonalityTraits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onboarding_completed: Option<bool>,
}

impl ProfileUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn personality(mut self, personality: PersonalityTraits) -> Self {
        self.personality = Some(personality);
        self
    }

    pub fn preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = Some(preferences);
        self
    }

    pub fn onboarding_completed(mut self, completed: bool) -> Self {
        self.onboarding_completed = Some(completed);
        self
    }
}
