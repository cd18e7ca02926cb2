//! Toast state

use std::time::Duration;

use leptos::prelude::*;
use lib_core::notify::{NoticeQueue, Toast};

/// Global toast context
#[derive(Clone, Copy)]
pub struct NotificationContext {
    pub queue: RwSignal<NoticeQueue>,
    duration: Duration,
}

impl NotificationContext {
    pub fn new(duration: Duration) -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
            duration,
        }
    }

    /// Show a toast and schedule its dismissal.
    pub fn push(&self, toast: Toast) {
        let Some(id) = self.queue.try_update(|q| q.push(toast)) else {
            return;
        };

        let queue = self.queue;
        let duration = self.duration;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(duration).await;
            queue.try_update(|q| q.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

pub fn provide_notification_context(duration: Duration) -> NotificationContext {
    let context = NotificationContext::new(duration);
    provide_context(context);
    context
}

pub fn use_notifications() -> NotificationContext {
    expect_context::<NotificationContext>()
}
