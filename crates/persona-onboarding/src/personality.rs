use persona_client::PersonalityTraits;
use serde::{Deserialize, Serialize};

const SLIDER_MIN: u8 = 1;
const SLIDER_MAX: u8 = 10;

fn clamp(value: u8) -> u8 {
    value.clamp(SLIDER_MIN, SLIDER_MAX)
}

/// The four personality sliders of the onboarding wizard, each bounded
/// to [1, 10]. Setters clamp out-of-range values instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalitySliders {
    formality: u8,
    enthusiasm: u8,
    verbosity: u8,
    humor: u8,
}

impl Default for PersonalitySliders {
    fn default() -> Self {
        Self {
            formality: 5,
            enthusiasm: 5,
            verbosity: 5,
            humor: 5,
        }
    }
}

impl PersonalitySliders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn formality(&self) -> u8 {
        self.formality
    }

    pub fn enthusiasm(&self) -> u8 {
        self.enthusiasm
    }

    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    pub fn humor(&self) -> u8 {
        self.humor
    }

    pub fn set_formality(&mut self, value: u8) {
        self.formality = clamp(value);
    }

    pub fn set_enthusiasm(&mut self, value: u8) {
        self.enthusiasm = clamp(value);
    }

    pub fn set_verbosity(&mut self, value: u8) {
        self.verbosity = clamp(value);
    }

    pub fn set_humor(&mut self, value: u8) {
        self.humor = clamp(value);
    }

    /// Wire representation for the profile update.
    pub fn to_traits(&self) -> PersonalityTraits {
        PersonalityTraits {
            formality: self.formality,
            enthusiasm: self.enthusiasm,
            verbosity: self.verbosity,
            humor: self.humor,
            traits: Vec::new(),
        }
    }
}

impl From<PersonalitySliders> for PersonalityTraits {
    fn from(sliders: PersonalitySliders) -> Self {
        sliders.to_traits()
    }
}
