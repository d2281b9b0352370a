//! Deterministic in-memory port implementations.
//!
//! # Responsibility
//! - Let tests and headless hosts run every service without a browser.
//! - Simulate elapsed time and visibility changes synchronously.
//!
//! # Invariants
//! - No callback runs while a fake holds an internal borrow, so callbacks
//!   may call back into the same fake.
//! - `ManualScheduler` fires due timers in due-time order (ties in request
//!   order) and animation frames on a fixed 16ms cadence.

use crate::model::field::{FieldName, FieldSet};
use crate::model::notification::{Notification, NotificationId, Severity};
use crate::port::dom::{CloseAction, ContactForm, NotificationView, PageElement, TextSink, Viewport};
use crate::port::scheduler::{FrameCallback, Scheduler, TimerCallback, TimerHandle};
use crate::port::visibility::{VisibilityCallback, VisibilityObserver};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

/// Frame cadence of `ManualScheduler`, in ms.
pub const FRAME_INTERVAL_MS: f64 = 16.0;

struct PendingTimer {
    handle: TimerHandle,
    due_ms: f64,
    callback: TimerCallback,
}

#[derive(Default)]
struct SchedulerState {
    now_ms: f64,
    next_handle: u64,
    timers: Vec<PendingTimer>,
    frames: Vec<FrameCallback>,
}

enum Due {
    Timer(usize),
    Frame(f64),
}

/// Virtual-clock scheduler.
#[derive(Default)]
pub struct ManualScheduler {
    state: RefCell<SchedulerState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in ms.
    pub fn now(&self) -> f64 {
        self.state.borrow().now_ms
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    /// Advances the clock by `ms`, firing every timer and frame that falls
    /// due on the way, including ones scheduled by callbacks fired here.
    pub fn advance(&self, ms: u32) {
        let target = self.now() + f64::from(ms);
        while let Some(due) = self.next_due(target) {
            match due {
                Due::Timer(index) => {
                    let timer = {
                        let mut state = self.state.borrow_mut();
                        let timer = state.timers.remove(index);
                        state.now_ms = timer.due_ms;
                        timer
                    };
                    (timer.callback)();
                }
                Due::Frame(at_ms) => self.fire_frames(at_ms),
            }
        }
        self.state.borrow_mut().now_ms = target;
    }

    /// Jumps to the next frame boundary and fires the pending frames.
    ///
    /// Returns `false` when no frame was pending.
    pub fn next_frame(&self) -> bool {
        if self.pending_frames() == 0 {
            return false;
        }
        let at_ms = next_frame_boundary(self.now());
        self.fire_frames(at_ms);
        true
    }

    fn fire_frames(&self, at_ms: f64) {
        let frames = {
            let mut state = self.state.borrow_mut();
            state.now_ms = at_ms;
            std::mem::take(&mut state.frames)
        };
        for frame in frames {
            frame(at_ms);
        }
    }

    fn next_due(&self, target: f64) -> Option<Due> {
        let state = self.state.borrow();
        let timer = state
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= target)
            .min_by(|(_, a), (_, b)| {
                a.due_ms
                    .total_cmp(&b.due_ms)
                    .then(a.handle.cmp(&b.handle))
            })
            .map(|(index, timer)| (index, timer.due_ms));
        let frame_at = next_frame_boundary(state.now_ms);
        let frame = (!state.frames.is_empty() && frame_at <= target).then_some(frame_at);

        match (timer, frame) {
            (Some((_, due_ms)), Some(frame_at)) if frame_at < due_ms => {
                Some(Due::Frame(frame_at))
            }
            (Some((index, _)), _) => Some(Due::Timer(index)),
            (None, Some(frame_at)) => Some(Due::Frame(frame_at)),
            (None, None) => None,
        }
    }
}

fn next_frame_boundary(now_ms: f64) -> f64 {
    ((now_ms / FRAME_INTERVAL_MS).floor() + 1.0) * FRAME_INTERVAL_MS
}

impl Scheduler for ManualScheduler {
    fn now_ms(&self) -> f64 {
        self.now()
    }

    fn request_frame(&self, callback: FrameCallback) {
        self.state.borrow_mut().frames.push(callback);
    }

    fn delay(&self, delay_ms: u32, callback: TimerCallback) -> TimerHandle {
        let mut state = self.state.borrow_mut();
        state.next_handle += 1;
        let handle = TimerHandle::new(state.next_handle);
        let due_ms = state.now_ms + f64::from(delay_ms);
        state.timers.push(PendingTimer {
            handle,
            due_ms,
            callback,
        });
        handle
    }

    fn cancel(&self, handle: TimerHandle) {
        self.state
            .borrow_mut()
            .timers
            .retain(|timer| timer.handle != handle);
    }
}

/// Text sink recording every write.
#[derive(Debug, Default)]
pub struct MemorySink {
    text: RefCell<String>,
    writes: RefCell<Vec<String>>,
}

impl MemorySink {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(text.into()),
            writes: RefCell::new(Vec::new()),
        }
    }

    /// Every value written through `set_text`, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl TextSink for MemorySink {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
        self.writes.borrow_mut().push(text.to_string());
    }
}

/// Element with attributes, classes, inline style and text.
#[derive(Debug, Default)]
pub struct MemoryElement {
    attributes: RefCell<BTreeMap<String, String>>,
    classes: RefCell<BTreeSet<String>>,
    styles: RefCell<BTreeMap<String, String>>,
    text: MemorySink,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    pub fn with_text(self, text: &str) -> Self {
        self.text.set_text(text);
        self
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl PageElement for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }

    fn set_style(&self, property: &str, value: &str) {
        self.styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }
}

impl TextSink for MemoryElement {
    fn text(&self) -> String {
        self.text.text()
    }

    fn set_text(&self, text: &str) {
        self.text.set_text(text);
    }
}

type SharedCallback = Rc<RefCell<VisibilityCallback>>;

/// Visibility observer driven by `set_visible`.
#[derive(Default)]
pub struct FakeVisibility {
    callbacks: RefCell<BTreeMap<String, SharedCallback>>,
}

impl FakeVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_observed(&self, target: &str) -> bool {
        self.callbacks.borrow().contains_key(target)
    }

    pub fn observed_count(&self) -> usize {
        self.callbacks.borrow().len()
    }

    /// Fires the callback of `target`, if it is observed.
    ///
    /// Returns `false` when `target` is not observed.
    pub fn set_visible(&self, target: &str, visible: bool) -> bool {
        let callback = self.callbacks.borrow().get(target).cloned();
        match callback {
            Some(callback) => {
                (*callback.borrow_mut())(visible);
                true
            }
            None => false,
        }
    }
}

impl VisibilityObserver for FakeVisibility {
    type Target = String;

    fn observe(&self, target: &String, callback: VisibilityCallback) {
        self.callbacks
            .borrow_mut()
            .insert(target.clone(), Rc::new(RefCell::new(callback)));
    }

    fn unobserve(&self, target: &String) {
        self.callbacks.borrow_mut().remove(target);
    }
}

/// Contact form holding values and invalid flags in memory.
#[derive(Debug, Default)]
pub struct MemoryForm {
    fields: RefCell<FieldSet>,
    invalid: RefCell<BTreeSet<FieldName>>,
    resets: Cell<usize>,
}

impl MemoryForm {
    pub fn new(fields: FieldSet) -> Self {
        Self {
            fields: RefCell::new(fields),
            ..Self::default()
        }
    }

    pub fn fill(&self, fields: FieldSet) {
        *self.fields.borrow_mut() = fields;
    }

    pub fn fields(&self) -> FieldSet {
        self.fields.borrow().clone()
    }

    /// Currently flagged fields in form order.
    pub fn invalid_fields(&self) -> Vec<FieldName> {
        self.invalid.borrow().iter().copied().collect()
    }

    pub fn reset_count(&self) -> usize {
        self.resets.get()
    }
}

impl ContactForm for MemoryForm {
    fn read_fields(&self) -> FieldSet {
        self.fields()
    }

    fn set_invalid(&self, field: FieldName, invalid: bool) {
        let mut flags = self.invalid.borrow_mut();
        if invalid {
            flags.insert(field);
        } else {
            flags.remove(&field);
        }
    }

    fn reset(&self) {
        *self.fields.borrow_mut() = FieldSet::default();
        self.resets.set(self.resets.get() + 1);
    }
}

/// One call observed by `RecordingNotificationView`.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Mounted {
        id: NotificationId,
        message: String,
        severity: Severity,
    },
    ExitStarted(NotificationId),
    Detached(NotificationId),
}

/// Notification view that records calls and keeps close actions clickable.
#[derive(Default)]
pub struct RecordingNotificationView {
    events: RefCell<Vec<ViewEvent>>,
    mounted: RefCell<BTreeMap<NotificationId, (Notification, CloseAction)>>,
}

impl RecordingNotificationView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    /// Notifications currently attached to the page.
    pub fn mounted(&self) -> Vec<Notification> {
        self.mounted
            .borrow()
            .values()
            .map(|(notification, _)| notification.clone())
            .collect()
    }

    /// Clicks the close button of notification `id`.
    ///
    /// Returns `false` when `id` is not mounted.
    pub fn click_close(&self, id: NotificationId) -> bool {
        let action = self
            .mounted
            .borrow()
            .get(&id)
            .map(|(_, action)| Rc::clone(action));
        match action {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }

    /// Number of detach calls for `id`.
    pub fn detach_count(&self, id: NotificationId) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| **event == ViewEvent::Detached(id))
            .count()
    }
}

impl NotificationView for RecordingNotificationView {
    fn mount(&self, notification: &Notification, on_close: CloseAction) {
        self.events.borrow_mut().push(ViewEvent::Mounted {
            id: notification.id,
            message: notification.message.clone(),
            severity: notification.severity,
        });
        self.mounted
            .borrow_mut()
            .insert(notification.id, (notification.clone(), on_close));
    }

    fn begin_exit(&self, id: NotificationId) {
        self.events.borrow_mut().push(ViewEvent::ExitStarted(id));
    }

    fn detach(&self, id: NotificationId) {
        self.events.borrow_mut().push(ViewEvent::Detached(id));
        self.mounted.borrow_mut().remove(&id);
    }
}

/// Viewport with a settable scroll offset and known element offsets.
#[derive(Debug, Default)]
pub struct FakeViewport {
    scroll_y: Cell<f64>,
    offsets: RefCell<BTreeMap<String, f64>>,
    scrolls: RefCell<Vec<f64>>,
}

impl FakeViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(self, element_id: &str, offset_top: f64) -> Self {
        self.offsets
            .borrow_mut()
            .insert(element_id.to_string(), offset_top);
        self
    }

    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.scroll_y.set(scroll_y);
    }

    /// Destinations passed to `smooth_scroll_to`, oldest first.
    pub fn scrolls(&self) -> Vec<f64> {
        self.scrolls.borrow().clone()
    }
}

impl Viewport for FakeViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn offset_top(&self, element_id: &str) -> Option<f64> {
        self.offsets.borrow().get(element_id).copied()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
    }
}

#[cfg(test)]
mod tests {
    use super::{ManualScheduler, FRAME_INTERVAL_MS};
    use crate::port::scheduler::Scheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn timers_fire_in_due_order_and_respect_cancel() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (delay, label) in [(30, "c"), (10, "a"), (20, "b")] {
            let log = Rc::clone(&log);
            scheduler.delay(delay, Box::new(move || log.borrow_mut().push(label)));
        }
        let cancelled = {
            let log = Rc::clone(&log);
            scheduler.delay(15, Box::new(move || log.borrow_mut().push("x")))
        };
        scheduler.cancel(cancelled);

        scheduler.advance(25);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
        assert_eq!(scheduler.now(), 25.0);
        scheduler.advance(5);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn frames_fire_on_cadence_boundaries() {
        let scheduler = Rc::new(ManualScheduler::new());
        let stamps = Rc::new(RefCell::new(Vec::new()));
        fn again(scheduler: Rc<ManualScheduler>, stamps: Rc<RefCell<Vec<f64>>>, left: u32) {
            let next = Rc::clone(&scheduler);
            scheduler.request_frame(Box::new(move |at| {
                stamps.borrow_mut().push(at);
                if left > 1 {
                    again(next, stamps, left - 1);
                }
            }));
        }
        again(Rc::clone(&scheduler), Rc::clone(&stamps), 3);

        scheduler.advance(100);
        assert_eq!(
            *stamps.borrow(),
            vec![FRAME_INTERVAL_MS, 2.0 * FRAME_INTERVAL_MS, 3.0 * FRAME_INTERVAL_MS]
        );
        assert_eq!(scheduler.pending_frames(), 0);
    }
}
