//! Convenience re-exports for the common path: configure, log in,
//! chat, onboard.

pub use persona_client::{
    destination_for, ApiClient, ApiError, ChatMessage, ChatTransport, ClientConfig, Destination,
    Role, TaskStatus, UserProfile, VideoPhase,
};

pub use persona_chat::{ChatEvent, ChatSession, PollerConfig, SendOutcome};

pub use persona_onboarding::{
    CaptureTimeline, OnboardingFlow, OnboardingStep, PersonalitySliders, RecordedClip,
};
