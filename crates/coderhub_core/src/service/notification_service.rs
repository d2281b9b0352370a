//! Single-slot transient notification manager.
//!
//! # Responsibility
//! - Own the one notification slot of the page and its lifecycle:
//!   `absent -> visible -> dismissing -> absent`.
//! - Schedule automatic dismissal and the exit-animation detach.
//!
//! # Invariants
//! - At most one notification is mounted at any time; `notify` evicts the
//!   current one synchronously, without an exit animation.
//! - A notification is detached exactly once.
//! - Every pending timer belongs to the notification in the slot; eviction
//!   and manual dismissal cancel the timers they make obsolete, and timer
//!   callbacks re-check the notification id before acting.

use crate::config::NotificationConfig;
use crate::model::notification::{Notification, NotificationId, NotificationState, Severity};
use crate::port::dom::{CloseAction, NotificationView};
use crate::port::scheduler::{Scheduler, TimerHandle};
use log::{debug, info};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Timing applied to every notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    pub auto_dismiss_ms: u32,
    pub exit_ms: u32,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: 5000,
            exit_ms: 300,
        }
    }
}

impl From<&NotificationConfig> for NotificationTiming {
    fn from(value: &NotificationConfig) -> Self {
        Self {
            auto_dismiss_ms: value.auto_dismiss_ms,
            exit_ms: value.exit_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DismissTrigger {
    Auto,
    Manual,
}

impl DismissTrigger {
    fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Manual => "manual",
        }
    }
}

struct ActiveNotification {
    notification: Notification,
    dismissing: bool,
    auto_timer: Option<TimerHandle>,
    exit_timer: Option<TimerHandle>,
}

impl ActiveNotification {
    fn state(&self) -> NotificationState {
        if self.dismissing {
            NotificationState::Dismissing
        } else {
            NotificationState::Visible
        }
    }
}

struct ManagerInner {
    view: Rc<dyn NotificationView>,
    scheduler: Rc<dyn Scheduler>,
    timing: NotificationTiming,
    slot: RefCell<Option<ActiveNotification>>,
    next_id: Cell<NotificationId>,
}

/// Cloneable handle to the page's notification slot.
#[derive(Clone)]
pub struct NotificationManager {
    inner: Rc<ManagerInner>,
}

impl NotificationManager {
    pub fn new(
        view: Rc<dyn NotificationView>,
        scheduler: Rc<dyn Scheduler>,
        timing: NotificationTiming,
    ) -> Self {
        Self {
            inner: Rc::new(ManagerInner {
                view,
                scheduler,
                timing,
                slot: RefCell::new(None),
                next_id: Cell::new(1),
            }),
        }
    }

    /// Shows `message`, replacing whatever notification is on screen.
    ///
    /// Returns the id of the new notification.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let inner = &self.inner;
        evict(inner);

        let id = inner.next_id.get();
        inner.next_id.set(id + 1);
        let notification = Notification {
            id,
            message: message.into(),
            severity,
            created_at_ms: inner.scheduler.now_ms(),
        };

        let weak = Rc::downgrade(inner);
        let close_weak = weak.clone();
        let on_close: CloseAction = Rc::new(move || {
            if let Some(inner) = close_weak.upgrade() {
                begin_dismiss(&inner, id, DismissTrigger::Manual);
            }
        });
        inner.view.mount(&notification, on_close);

        let auto_timer = inner.scheduler.delay(
            inner.timing.auto_dismiss_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    begin_dismiss(&inner, id, DismissTrigger::Auto);
                }
            }),
        );

        info!(
            "event=notification_show module=notification status=ok id={} severity={}",
            id,
            severity.as_str()
        );
        *inner.slot.borrow_mut() = Some(ActiveNotification {
            notification,
            dismissing: false,
            auto_timer: Some(auto_timer),
            exit_timer: None,
        });
        id
    }

    /// Manually dismisses the current notification.
    ///
    /// Returns `false` when the slot is empty or already dismissing.
    pub fn dismiss(&self) -> bool {
        match self.current_id() {
            Some(id) => begin_dismiss(&self.inner, id, DismissTrigger::Manual),
            None => false,
        }
    }

    /// Manually dismisses notification `id` if it is still visible.
    pub fn dismiss_id(&self, id: NotificationId) -> bool {
        begin_dismiss(&self.inner, id, DismissTrigger::Manual)
    }

    pub fn state(&self) -> NotificationState {
        self.inner
            .slot
            .borrow()
            .as_ref()
            .map_or(NotificationState::Absent, ActiveNotification::state)
    }

    /// Snapshot of the notification in the slot, if any.
    pub fn current(&self) -> Option<Notification> {
        self.inner
            .slot
            .borrow()
            .as_ref()
            .map(|active| active.notification.clone())
    }

    fn current_id(&self) -> Option<NotificationId> {
        self.inner
            .slot
            .borrow()
            .as_ref()
            .map(|active| active.notification.id)
    }
}

fn evict(inner: &ManagerInner) {
    let Some(active) = inner.slot.borrow_mut().take() else {
        return;
    };
    for handle in [active.auto_timer, active.exit_timer].into_iter().flatten() {
        inner.scheduler.cancel(handle);
    }
    inner.view.detach(active.notification.id);
    debug!(
        "event=notification_evict module=notification status=ok id={} state={:?}",
        active.notification.id,
        active.state()
    );
}

fn begin_dismiss(inner: &Rc<ManagerInner>, id: NotificationId, trigger: DismissTrigger) -> bool {
    let auto_timer = {
        let mut slot = inner.slot.borrow_mut();
        match slot.as_mut() {
            Some(active) if active.notification.id == id && !active.dismissing => {
                active.dismissing = true;
                active.auto_timer.take()
            }
            _ => return false,
        }
    };
    if trigger == DismissTrigger::Manual {
        if let Some(handle) = auto_timer {
            inner.scheduler.cancel(handle);
        }
    }

    let weak: Weak<ManagerInner> = Rc::downgrade(inner);
    let exit_timer = inner.scheduler.delay(
        inner.timing.exit_ms,
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                finish_dismiss(&inner, id);
            }
        }),
    );
    if let Some(active) = inner.slot.borrow_mut().as_mut() {
        active.exit_timer = Some(exit_timer);
    }
    inner.view.begin_exit(id);

    debug!(
        "event=notification_dismiss module=notification status=ok id={} trigger={}",
        id,
        trigger.as_str()
    );
    true
}

fn finish_dismiss(inner: &ManagerInner, id: NotificationId) {
    let removed = {
        let mut slot = inner.slot.borrow_mut();
        match slot.as_ref() {
            Some(active) if active.notification.id == id && active.dismissing => slot.take(),
            _ => None,
        }
    };
    if removed.is_some() {
        inner.view.detach(id);
        debug!(
            "event=notification_detach module=notification status=ok id={}",
            id
        );
    }
}
