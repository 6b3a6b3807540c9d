use crate::models::UserProfile;

/// Screen a navigation attempt must land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Auth,
    Onboarding,
    Dashboard,
}

/// Route-guard decision table, applied identically at every navigation
/// boundary:
///
/// | authenticated | onboarding_completed | destination |
/// |---------------|----------------------|-------------|
/// | no            | -                    | Auth        |
/// | yes           | no                   | Onboarding  |
/// | yes           | yes                  | Dashboard   |
pub fn destination_for(profile: Option<&UserProfile>) -> Destination {
    match profile {
        None => Destination::Auth,
        Some(user) if !user.onboarding_completed => Destination::Onboarding,
        Some(_) => Destination::Dashboard,
    }
}
