//! Explicit handles for the fire-and-forget deferred actions.
//!
//! The storefront has exactly two deferred actions: the
//! confirmation-then-submit delay and the notification auto-dismiss. Both
//! are one-shot, and the current flows never cancel them, but each is
//! held as an explicit task handle with cancellation so a long-lived
//! process never leaks an untracked callback.

use std::future::Future;
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use shopfront_core::notification::{
    DismissScheduler, Notification, NotificationCenter, DISMISS_AFTER, EXIT_TRANSITION,
};
use shopfront_core::order::{OrderFields, OrderGateway, SUBMIT_DELAY};
use tokio::task::JoinHandle;

/// A one-shot deferred action: sleep, then run.
pub struct DelayedTask {
    handle: JoinHandle<()>,
}

impl DelayedTask {
    /// Spawns a task that runs `action` after `delay`.
    pub fn spawn<F>(delay: Duration, action: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        });
        Self { handle }
    }

    /// Cancels the deferred action if it has not run yet.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the action has completed (or been cancelled).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Schedules the deferred order dispatch: after [`SUBMIT_DELAY`], the
/// populated fields go to the gateway. A dispatch failure is logged and
/// dropped, invisible past the confirmation the user already saw.
pub fn schedule_order_dispatch(
    gateway: Arc<dyn OrderGateway>,
    fields: OrderFields,
) -> DelayedTask {
    DelayedTask::spawn(SUBMIT_DELAY, async move {
        if let Err(e) = gateway.submit(&fields).await {
            tracing::warn!("order dispatch failed: {}", e);
        }
    })
}

/// Auto-dismiss scheduler backed by [`DelayedTask`].
///
/// Holds a weak reference to the notification center it serves, since the
/// center holds the scheduler; call [`TokioDismissScheduler::bind`] after
/// constructing the center.
#[derive(Default)]
pub struct TokioDismissScheduler {
    center: Mutex<Weak<NotificationCenter>>,
}

impl TokioDismissScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the scheduler to the center whose notifications it dismisses.
    pub fn bind(&self, center: &Arc<NotificationCenter>) {
        *self.center.lock().unwrap() = Arc::downgrade(center);
    }
}

impl DismissScheduler for TokioDismissScheduler {
    fn schedule_dismiss(&self, notification: &Notification) {
        let center = self.center.lock().unwrap().clone();
        let id = notification.id;

        // Fire-and-forget: the handle is dropped, the task keeps running.
        // A superseded notification's dismissal lands on a stale id and is
        // a no-op in the center.
        let task = DelayedTask::spawn(DISMISS_AFTER, async move {
            tokio::time::sleep(EXIT_TRANSITION).await;
            if let Some(center) = center.upgrade() {
                center.dismiss(id);
            }
        });
        drop(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    /// A gateway that records every dispatched order.
    #[derive(Default)]
    struct RecordingGateway {
        submitted: Mutex<Vec<OrderFields>>,
    }

    impl RecordingGateway {
        fn submitted(&self) -> Vec<OrderFields> {
            self.submitted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl OrderGateway for RecordingGateway {
        async fn submit(&self, fields: &OrderFields) -> shopfront_core::error::Result<()> {
            self.submitted.lock().unwrap().push(fields.clone());
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_delayed_task_runs_after_delay() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();

        let task = DelayedTask::spawn(Duration::from_secs(1), async move {
            flag.store(true, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(!ran.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(ran.load(Ordering::SeqCst));
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_run() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();

        let task = DelayedTask::spawn(Duration::from_secs(1), async move {
            flag.store(true, Ordering::SeqCst);
        });
        task.cancel();

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_order_dispatch_reaches_gateway_after_delay_only() {
        let gateway = Arc::new(RecordingGateway::default());
        let fields = OrderFields {
            details: "ORDER DETAILS:\n\n2 × Eco-Friendly Plates - ₹38\n\nTOTAL: ₹38".to_string(),
            total: "38.00".to_string(),
        };

        let task = schedule_order_dispatch(gateway.clone(), fields.clone());

        // Just short of the submit delay: nothing dispatched yet.
        tokio::time::sleep(SUBMIT_DELAY - Duration::from_millis(10)).await;
        assert!(gateway.submitted().is_empty());

        tokio::time::sleep(Duration::from_millis(20)).await;
        tokio::task::yield_now().await;
        assert_eq!(gateway.submitted(), vec![fields]);
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduler_dismisses_after_timeout() {
        use shopfront_core::view::NullView;

        let scheduler = Arc::new(TokioDismissScheduler::new());
        let center = Arc::new(
            NotificationCenter::new(Arc::new(NullView)).with_scheduler(scheduler.clone()),
        );
        scheduler.bind(&center);

        center.notify_default("done");
        assert!(center.current().is_some());

        // Past the dismiss delay plus the exit transition.
        tokio::time::sleep(DISMISS_AFTER + EXIT_TRANSITION + Duration::from_millis(10)).await;
        tokio::task::yield_now().await;
        assert!(center.current().is_none());
    }
}
