pub mod backend;
pub mod capture;
pub mod error;
pub mod flow;
pub mod personality;

pub use backend::OnboardingBackend;
pub use capture::{
    avatar_segments, reading_script, CaptureSegment, CaptureTimeline, RecordedClip,
};
pub use error::OnboardingError;
pub use flow::{OnboardingFlow, OnboardingStep};
pub use personality::PersonalitySliders;
