//! Bottom tab bar and home launcher entries.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One bottom navigation tab.
pub struct NavTab {
    /// Emoji icon.
    pub icon: &'static str,
    /// Visible label.
    pub label: &'static str,
    /// Route path.
    pub path: &'static str,
}

impl NavTab {
    /// A tab is active iff its path equals the current route path.
    pub fn is_active(&self, pathname: &str) -> bool {
        self.path == pathname
    }
}

/// Tabs in display order.
pub const NAV_TABS: [NavTab; 5] = [
    NavTab {
        icon: "🏠",
        label: "Home",
        path: "/",
    },
    NavTab {
        icon: "🎮",
        label: "Games",
        path: "/games",
    },
    NavTab {
        icon: "🎬",
        label: "Movies",
        path: "/movies",
    },
    NavTab {
        icon: "🎨",
        label: "NFTs",
        path: "/nfts",
    },
    NavTab {
        icon: "👤",
        label: "Profile",
        path: "/profile",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One launcher card on the home screen.
pub struct HomeFeature {
    /// Emoji icon.
    pub icon: &'static str,
    /// Card title.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Route path.
    pub path: &'static str,
    /// Accent color for the card border.
    pub accent: &'static str,
}

/// Launcher cards in display order.
pub const HOME_FEATURES: [HomeFeature; 5] = [
    HomeFeature {
        icon: "🎮",
        title: "Games",
        description: "Browse and download games",
        path: "/games",
        accent: "#e74c3c",
    },
    HomeFeature {
        icon: "💻",
        title: "Software",
        description: "Professional tools & apps",
        path: "/software",
        accent: "#f39c12",
    },
    HomeFeature {
        icon: "🎬",
        title: "Movies",
        description: "Discover movies across categories",
        path: "/movies",
        accent: "#9b59b6",
    },
    HomeFeature {
        icon: "🎨",
        title: "NFTs",
        description: "Claim free NFTs",
        path: "/nfts",
        accent: "#3498db",
    },
    HomeFeature {
        icon: "📜",
        title: "Game Scripts",
        description: "Browse game scripts",
        path: "/scripts",
        accent: "#2ecc71",
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn exactly_one_tab_matches_each_tab_path() {
        for tab in NAV_TABS {
            let active = NAV_TABS
                .iter()
                .filter(|candidate| candidate.is_active(tab.path))
                .map(|candidate| candidate.label)
                .collect::<Vec<_>>();
            assert_eq!(active, vec![tab.label]);
        }
    }

    #[test]
    fn unlisted_routes_activate_no_tab() {
        assert!(NAV_TABS.iter().all(|tab| !tab.is_active("/scripts")));
        assert!(NAV_TABS.iter().all(|tab| !tab.is_active("/games/")));
    }

    #[test]
    fn home_links_every_listing_screen() {
        let paths = HOME_FEATURES.map(|feature| feature.path);
        assert_eq!(paths, ["/games", "/software", "/movies", "/nfts", "/scripts"]);
    }
}
