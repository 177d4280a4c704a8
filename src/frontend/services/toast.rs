//! Toast queue backing the notification collaborator.

use crate::backend::notify::{Notification, Notifier};
use dioxus::prelude::*;
use std::time::Duration;

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    pub toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
    duration_ms: u64,
}

impl Toaster {
    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|toast| toast.id != id);
    }
}

impl Notifier for Toaster {
    fn notify(&self, notification: Notification) {
        let mut next_id = self.next_id;
        let id = next_id();
        next_id.set(id + 1);

        let mut toasts = self.toasts;
        toasts.write().push(Toast { id, notification });

        let toaster = *self;
        let duration = Duration::from_millis(self.duration_ms);
        spawn(async move {
            tokio::time::sleep(duration).await;
            toaster.dismiss(id);
        });
    }
}

pub fn use_toaster_provider(duration_ms: u64) -> Toaster {
    use_context_provider(|| Toaster {
        toasts: Signal::new(Vec::new()),
        next_id: Signal::new(0),
        duration_ms,
    })
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}
