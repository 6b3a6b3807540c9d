use async_trait::async_trait;
use persona_client::{
    ApiClient, ApiError, AvatarRecord, ProfileUpdate, UserProfile, VoiceCloneStatus,
    VoiceCloneTicket,
};

/// The slice of the backend the onboarding flow depends on.
#[async_trait]
pub trait OnboardingBackend: Send + Sync {
    async fn upload_avatar_video(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<AvatarRecord, ApiError>;

    async fn upload_voice_sample(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<VoiceCloneTicket, ApiError>;

    async fn voice_clone_status(&self, task_id: &str) -> Result<VoiceCloneStatus, ApiError>;

    async fn save_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError>;
}

#[async_trait]
impl OnboardingBackend for ApiClient {
    async fn upload_avatar_video(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<AvatarRecord, ApiError> {
        self.avatars().upload(file_name, content_type, bytes).await
    }

    async fn upload_voice_sample(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<VoiceCloneTicket, ApiError> {
        self.voices().upload(file_name, content_type, bytes).await
    }

    async fn voice_clone_status(&self, task_id: &str) -> Result<VoiceCloneStatus, ApiError> {
        self.voices().clone_status(task_id).await
    }

    async fn save_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        self.users().update_profile(update).await
    }
}
