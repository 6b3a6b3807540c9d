use crate::backend::OnboardingBackend;
use crate::capture::RecordedClip;
use crate::error::{OnboardingError, Result};
use crate::personality::PersonalitySliders;
use persona_client::{AvatarRecord, ProfileUpdate, UserProfile, VoiceCloneTicket};

/// Steps of the onboarding wizard, strictly linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OnboardingStep {
    Profile,
    VideoCapture,
    VoiceCapture,
    Personality,
    Complete,
}

impl OnboardingStep {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Profile => "Profile Setup",
            Self::VideoCapture => "Record Video",
            Self::VoiceCapture => "Voice Training",
            Self::Personality => "Personality",
            Self::Complete => "Complete",
        }
    }

    fn previous(&self) -> Option<Self> {
        match self {
            Self::Profile => None,
            Self::VideoCapture => Some(Self::Profile),
            Self::VoiceCapture => Some(Self::VideoCapture),
            Self::Personality => Some(Self::VoiceCapture),
            // Completion is terminal.
            Self::Complete => None,
        }
    }
}

/// Wizard state machine: Profile → VideoCapture → VoiceCapture →
/// Personality → Complete.
///
/// Forward transitions happen only through the gating action of the
/// current step (Profile has none); Back returns to the prior step
/// without losing recordings already made.
pub struct OnboardingFlow {
    step: OnboardingStep,
    video: Option<RecordedClip>,
    avatar_id: Option<String>,
    voice: Option<RecordedClip>,
    voice_clone_task: Option<String>,
    personality: PersonalitySliders,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::Profile,
            video: None,
            avatar_id: None,
            voice: None,
            voice_clone_task: None,
            personality: PersonalitySliders::default(),
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn is_complete(&self) -> bool {
        self.step == OnboardingStep::Complete
    }

    pub fn avatar_id(&self) -> Option<&str> {
        self.avatar_id.as_deref()
    }

    pub fn voice_clone_task(&self) -> Option<&str> {
        self.voice_clone_task.as_deref()
    }

    pub fn personality(&self) -> &PersonalitySliders {
        &self.personality
    }

    pub fn personality_mut(&mut self) -> &mut PersonalitySliders {
        &mut self.personality
    }

    fn expect_step(&self, expected: OnboardingStep) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(OnboardingError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    /// Leave the profile step. No gating action.
    pub fn begin(&mut self) -> Result<()> {
        self.expect_step(OnboardingStep::Profile)?;
        self.step = OnboardingStep::VideoCapture;
        Ok(())
    }

    /// Return to the previous step. No-op on Profile; completion is
    /// terminal.
    pub fn back(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    /// Hold a finished video recording for review.
    pub fn set_video(&mut self, clip: RecordedClip) -> Result<()> {
        self.expect_step(OnboardingStep::VideoCapture)?;
        self.video = Some(clip);
        Ok(())
    }

    /// Discard the held recording to re-record.
    pub fn discard_video(&mut self) {
        self.video = None;
    }

    pub fn has_video(&self) -> bool {
        self.video.is_some()
    }

    /// Upload the reviewed recording; on success training is queued
    /// and the flow advances to voice capture.
    pub async fn upload_video(&mut self, backend: &dyn OnboardingBackend) -> Result<AvatarRecord> {
        self.expect_step(OnboardingStep::VideoCapture)?;
        let clip = self.video.as_ref().ok_or(OnboardingError::MissingRecording)?;

        let record = backend
            .upload_avatar_video("avatar.webm", &clip.mime_type, clip.bytes.clone())
            .await?;
        tracing::info!("avatar training queued: {}", record.id);

        self.avatar_id = Some(record.id.clone());
        self.step = OnboardingStep::VoiceCapture;
        Ok(record)
    }

    /// Hold a finished voice recording for review.
    pub fn set_voice(&mut self, clip: RecordedClip) -> Result<()> {
        self.expect_step(OnboardingStep::VoiceCapture)?;
        self.voice = Some(clip);
        Ok(())
    }

    pub fn discard_voice(&mut self) {
        self.voice = None;
    }

    pub fn has_voice(&self) -> bool {
        self.voice.is_some()
    }

    /// Submit the held sample for voice cloning. Optional; does not
    /// advance the flow.
    pub async fn submit_voice(
        &mut self,
        backend: &dyn OnboardingBackend,
    ) -> Result<VoiceCloneTicket> {
        self.expect_step(OnboardingStep::VoiceCapture)?;
        let clip = self.voice.as_ref().ok_or(OnboardingError::MissingRecording)?;

        let ticket = backend
            .upload_voice_sample("voice.webm", &clip.mime_type, clip.bytes.clone())
            .await?;
        tracing::info!("voice clone queued: {}", ticket.task_id);

        self.voice_clone_task = Some(ticket.task_id.clone());
        Ok(ticket)
    }

    /// Complete the voice step. Requires a held recording.
    pub fn finish_voice(&mut self) -> Result<()> {
        self.expect_step(OnboardingStep::VoiceCapture)?;
        if self.voice.is_none() {
            return Err(OnboardingError::MissingRecording);
        }
        self.step = OnboardingStep::Personality;
        Ok(())
    }

    /// Persist the personality profile and flip the completion flag.
    /// Route guards redirect away from onboarding permanently after
    /// this succeeds.
    pub async fn save_and_complete(
        &mut self,
        backend: &dyn OnboardingBackend,
    ) -> Result<UserProfile> {
        self.expect_step(OnboardingStep::Personality)?;

        let update = ProfileUpdate::new()
            .personality(self.personality.to_traits())
            .onboarding_completed(true);
        let profile = backend.save_profile(&update).await?;

        self.step = OnboardingStep::Complete;
        Ok(profile)
    }
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}
