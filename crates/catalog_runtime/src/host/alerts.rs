//! Serialized presentation of host alerts.
//!
//! The host shows one modal at a time and rejects a second alert while the first is open, so
//! every message goes through a single [`AlertQueue`] that awaits each alert before the next.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

use leptos::logging;
use platform_host::AlertService;

#[derive(Clone)]
/// FIFO of pending alert messages shared by every screen.
pub struct AlertQueue {
    alerts: Rc<dyn AlertService>,
    pending: Rc<RefCell<VecDeque<String>>>,
    draining: Rc<Cell<bool>>,
}

impl AlertQueue {
    /// Creates an empty queue presenting through `alerts`.
    pub fn new(alerts: Rc<dyn AlertService>) -> Self {
        Self {
            alerts,
            pending: Rc::new(RefCell::new(VecDeque::new())),
            draining: Rc::new(Cell::new(false)),
        }
    }

    /// Number of messages waiting behind the alert currently shown.
    pub fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Queues `message` and, unless another caller is already draining, presents queued
    /// messages in order until the queue is empty.
    ///
    /// Returns immediately when a drain is in progress; that drain shows `message` later.
    pub async fn present(&self, message: String) {
        self.pending.borrow_mut().push_back(message);
        if self.draining.replace(true) {
            return;
        }

        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(message) = next else {
                break;
            };
            if let Err(err) = self.alerts.show_alert(&message).await {
                logging::warn!("host alert failed: {err}");
            }
        }
        self.draining.set(false);
    }
}

#[cfg(test)]
mod tests {
    use std::task::Poll;

    use futures::{executor::block_on, future::poll_fn, join};
    use platform_host::{AlertFuture, MemoryAlertService};
    use pretty_assertions::assert_eq;

    use super::*;

    async fn yield_once() {
        let mut yielded = false;
        poll_fn(move |cx| {
            if yielded {
                Poll::Ready(())
            } else {
                yielded = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        })
        .await
    }

    /// Modal host: an alert stays open across one poll and a second alert is refused meanwhile.
    #[derive(Default)]
    struct ModalAlerts {
        open: Cell<bool>,
        shown: RefCell<Vec<String>>,
        refused: RefCell<Vec<String>>,
    }

    impl AlertService for ModalAlerts {
        fn show_alert<'a>(&'a self, message: &'a str) -> AlertFuture<'a, Result<(), String>> {
            Box::pin(async move {
                if self.open.replace(true) {
                    self.refused.borrow_mut().push(message.to_string());
                    return Err("popup already opened".to_string());
                }
                yield_once().await;
                self.shown.borrow_mut().push(message.to_string());
                self.open.set(false);
                Ok(())
            })
        }
    }

    #[test]
    fn concurrent_messages_are_shown_one_after_another() {
        let modal = Rc::new(ModalAlerts::default());
        let queue = AlertQueue::new(modal.clone());

        block_on(async {
            join!(
                queue.present("first".to_string()),
                queue.present("second".to_string()),
                queue.present("third".to_string()),
            )
        });

        assert!(modal.refused.borrow().is_empty());
        assert_eq!(
            modal.shown.borrow().clone(),
            vec!["first".to_string(), "second".to_string(), "third".to_string()]
        );
        assert_eq!(queue.pending_len(), 0);
    }

    #[test]
    fn modal_host_refuses_overlapping_alerts_without_the_queue() {
        let modal = ModalAlerts::default();

        let (first, second) = block_on(async {
            join!(modal.show_alert("first"), modal.show_alert("second"))
        });

        assert_eq!(first, Ok(()));
        assert!(second.is_err());
        assert_eq!(modal.refused.borrow().clone(), vec!["second".to_string()]);
    }

    #[test]
    fn queue_restarts_after_draining() {
        let alerts = MemoryAlertService::default();
        let queue = AlertQueue::new(Rc::new(alerts.clone()));

        block_on(queue.present("one".to_string()));
        block_on(queue.present("two".to_string()));

        assert_eq!(alerts.shown(), vec!["one".to_string(), "two".to_string()]);
    }
}
