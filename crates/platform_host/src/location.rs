//! Page location snapshot used for origin-relative endpoint resolution.

/// Protocol and hostname of the page hosting the mini-app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    /// Scheme including the trailing colon, e.g. `https:`.
    pub protocol: String,
    /// Hostname without port.
    pub hostname: String,
}

impl PageLocation {
    /// Creates a location from raw `window.location` parts.
    pub fn new(protocol: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            hostname: hostname.into(),
        }
    }

    /// Returns whether the page is served from a loopback address.
    pub fn is_loopback(&self) -> bool {
        matches!(
            self.hostname.trim_matches(|c| c == '[' || c == ']'),
            "localhost" | "127.0.0.1" | "::1"
        )
    }

    /// Returns `protocol//hostname` without a port.
    pub fn origin(&self) -> String {
        format!("{}//{}", self.protocol, self.hostname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_detection_covers_common_spellings() {
        assert!(PageLocation::new("http:", "localhost").is_loopback());
        assert!(PageLocation::new("http:", "127.0.0.1").is_loopback());
        assert!(PageLocation::new("http:", "[::1]").is_loopback());
        assert!(!PageLocation::new("https:", "catalog.example").is_loopback());
    }

    #[test]
    fn origin_omits_port() {
        assert_eq!(
            PageLocation::new("https:", "catalog.example").origin(),
            "https://catalog.example"
        );
    }
}
