//! Alert presentation contracts and in-memory adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`AlertService`].
pub type AlertFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for modal user-facing messages.
///
/// The returned future resolves once the host accepted (or dismissed) the alert.
pub trait AlertService {
    /// Presents `message` to the user.
    fn show_alert<'a>(&'a self, message: &'a str) -> AlertFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op alert service for unsupported targets.
pub struct NoopAlertService;

impl AlertService for NoopAlertService {
    fn show_alert<'a>(&'a self, _message: &'a str) -> AlertFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory alert service that records every presented message.
pub struct MemoryAlertService {
    shown: Rc<RefCell<Vec<String>>>,
}

impl MemoryAlertService {
    /// Returns every message shown so far, oldest first.
    pub fn shown(&self) -> Vec<String> {
        self.shown.borrow().clone()
    }
}

impl AlertService for MemoryAlertService {
    fn show_alert<'a>(&'a self, message: &'a str) -> AlertFuture<'a, Result<(), String>> {
        self.shown.borrow_mut().push(message.to_string());
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_alert_service_records_messages_in_order() {
        let alerts = MemoryAlertService::default();
        let service: &dyn AlertService = &alerts;

        block_on(service.show_alert("first")).expect("first alert");
        block_on(service.show_alert("second")).expect("second alert");

        assert_eq!(alerts.shown(), vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn noop_alert_service_always_succeeds() {
        assert_eq!(block_on(NoopAlertService.show_alert("ignored")), Ok(()));
    }
}
