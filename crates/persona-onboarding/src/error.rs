use crate::flow::OnboardingStep;
use persona_client::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OnboardingError {
    #[error("Action belongs to the {expected:?} step, but the flow is in {actual:?}")]
    WrongStep {
        expected: OnboardingStep,
        actual: OnboardingStep,
    },

    #[error("No recording is held for this step")]
    MissingRecording,

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, OnboardingError>;
