//! Transient notifications ("toasts") shown above the layout.
//!
//! Usage:
//! ```ignore
//! let notifications = use_notifications();
//! notifications.error("You do not have access to this page.");
//! ```

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::config::NOTIFICATION_TTL_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Notices currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    next_id: u64,
    items: Vec<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

/// Centralized notification service, provided once at the app root.
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NoticeQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
        }
    }

    pub fn show(&self, kind: NoticeKind, text: impl Into<String>) {
        let text = text.into();
        log::debug!("notification {:?}: {}", kind, text);

        let mut id = 0;
        self.queue.update(|queue| id = queue.push(kind, text));

        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TTL_MS).await;
            // The service may be gone if the app unmounted meanwhile.
            queue.try_update(|queue| queue.dismiss(id));
        });
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(NoticeKind::Info, text);
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(NoticeKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| queue.dismiss(id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the notification stack. Mount once, next to the router outlet.
#[component]
pub fn Notifications() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notifications">
            <For
                each=move || service.queue.with(|queue| queue.items().to_vec())
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let intent = match notice.kind {
                        NoticeKind::Info => MessageBarIntent::Info,
                        NoticeKind::Success => MessageBarIntent::Success,
                        NoticeKind::Error => MessageBarIntent::Error,
                    };
                    let id = notice.id;
                    view! {
                        <div class="notifications__item" on:click=move |_| service.dismiss(id)>
                            <MessageBar intent=intent>{notice.text}</MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_order_and_dismiss() {
        let mut queue = NoticeQueue::default();
        let first = queue.push(NoticeKind::Info, "saved");
        let second = queue.push(NoticeKind::Error, "denied");
        assert_ne!(first, second);

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].text, "denied");

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
    }

    #[test]
    fn test_ids_not_reused() {
        let mut queue = NoticeQueue::default();
        let first = queue.push(NoticeKind::Info, "a");
        queue.dismiss(first);
        let second = queue.push(NoticeKind::Info, "b");
        assert!(second > first);
    }
}
