//! Session credential adapter reading the host's launch payload on every call.

use platform_host::SessionCredentialSource;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Reads `Telegram.WebApp.initData` each time a credential is requested.
pub struct WebSessionCredential;

impl SessionCredentialSource for WebSessionCredential {
    fn session_credential(&self) -> Option<String> {
        bridge::init_data()
    }
}
