//! Profile screen: one combined fetch, then local tab switching.

use catalog_contract::{DownloadRecord, FavoriteRecord, ProfileBundle, UserProfile};

/// Shown when the profile could not be loaded or the backend knows no user.
pub const PROFILE_UNAVAILABLE_MESSAGE: &str = "Unable to load profile";

/// Placeholder for an empty download history.
pub const NO_DOWNLOADS_MESSAGE: &str = "No downloads yet";

/// Placeholder for an empty favorites list.
pub const NO_FAVORITES_MESSAGE: &str = "No favorites yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Profile history tabs.
pub enum ProfileTab {
    /// Download history.
    #[default]
    Downloads,
    /// Favorite items.
    Favorites,
}

impl ProfileTab {
    /// Tab button label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Downloads => "📥 Downloads",
            Self::Favorites => "❤️ Favorites",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Loaded profile data.
pub struct LoadedProfile {
    /// The signed-in user.
    pub user: UserProfile,
    /// Download history, newest first as delivered by the backend.
    pub downloads: Vec<DownloadRecord>,
    /// Favorite items.
    pub favorites: Vec<FavoriteRecord>,
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Render state of the profile screen.
pub enum ProfileStatus {
    /// Fetch in flight.
    #[default]
    Loading,
    /// Fetch failed or no user is known.
    Unavailable,
    /// Profile is available.
    Loaded(LoadedProfile),
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Screen state for the profile.
pub struct ProfileState {
    /// Render state.
    pub status: ProfileStatus,
    /// Selected history tab.
    pub active_tab: ProfileTab,
    mounted: bool,
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_profile`].
pub enum ProfileAction {
    /// Screen mounted; fetches once.
    Mount,
    /// The combined profile payload arrived.
    Loaded(ProfileBundle),
    /// The fetch failed.
    Failed,
    /// A tab button was clicked.
    SelectTab(ProfileTab),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_profile`].
pub enum ProfileEffect {
    /// Fetch the combined profile payload.
    FetchProfile,
}

/// Applies `action` to `state` and returns the fetches it requires.
pub fn reduce_profile(state: &mut ProfileState, action: ProfileAction) -> Vec<ProfileEffect> {
    match action {
        ProfileAction::Mount => {
            if state.mounted {
                return Vec::new();
            }
            state.mounted = true;
            state.status = ProfileStatus::Loading;
            vec![ProfileEffect::FetchProfile]
        }
        ProfileAction::Loaded(bundle) => {
            state.status = match bundle.user {
                Some(user) => ProfileStatus::Loaded(LoadedProfile {
                    user,
                    downloads: bundle.downloads,
                    favorites: bundle.favorites,
                }),
                None => ProfileStatus::Unavailable,
            };
            Vec::new()
        }
        ProfileAction::Failed => {
            state.status = ProfileStatus::Unavailable;
            Vec::new()
        }
        ProfileAction::SelectTab(tab) => {
            state.active_tab = tab;
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn user() -> UserProfile {
        UserProfile {
            user_id: Some(7),
            first_name: Some("Ada".to_string()),
            last_name: Some("L".to_string()),
            username: Some("ada".to_string()),
            total_downloads: Some(3),
        }
    }

    #[test]
    fn null_user_is_unavailable_not_loading() {
        let mut state = ProfileState::default();
        assert_eq!(
            reduce_profile(&mut state, ProfileAction::Mount),
            vec![ProfileEffect::FetchProfile]
        );
        reduce_profile(&mut state, ProfileAction::Loaded(ProfileBundle::default()));

        assert_eq!(state.status, ProfileStatus::Unavailable);
    }

    #[test]
    fn failure_is_unavailable() {
        let mut state = ProfileState::default();
        reduce_profile(&mut state, ProfileAction::Mount);
        reduce_profile(&mut state, ProfileAction::Failed);
        assert_eq!(state.status, ProfileStatus::Unavailable);
    }

    #[test]
    fn loaded_profile_keeps_history_and_tabs_emit_nothing() {
        let mut state = ProfileState::default();
        reduce_profile(&mut state, ProfileAction::Mount);
        reduce_profile(
            &mut state,
            ProfileAction::Loaded(ProfileBundle {
                user: Some(user()),
                downloads: Vec::new(),
                favorites: Vec::new(),
            }),
        );

        let ProfileStatus::Loaded(profile) = &state.status else {
            panic!("expected loaded profile, got {:?}", state.status);
        };
        assert_eq!(profile.user.handle().as_deref(), Some("@ada"));

        assert!(reduce_profile(&mut state, ProfileAction::SelectTab(ProfileTab::Favorites))
            .is_empty());
        assert_eq!(state.active_tab, ProfileTab::Favorites);
        assert!(reduce_profile(&mut state, ProfileAction::Mount).is_empty());
    }
}
