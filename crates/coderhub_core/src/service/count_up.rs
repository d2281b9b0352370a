//! Count-up effect for statistic numbers.
//!
//! # Responsibility
//! - Start a count-up task the first time a statistic becomes visible.
//! - Drive the task frame by frame until it renders its end value.
//!
//! # Invariants
//! - A statistic is animated at most once: its observation is dropped on
//!   the first visible notification, whether or not a task starts.
//! - Text without a digit run is never touched.
//! - No frame is requested after the finishing frame.

use crate::model::animation::{CountUpTarget, CountUpTask};
use crate::port::dom::TextSink;
use crate::port::scheduler::Scheduler;
use crate::port::visibility::VisibilityObserver;
use log::debug;
use std::rc::Rc;

/// Drives count-up tasks on a scheduler.
#[derive(Clone)]
pub struct CountUpAnimator {
    scheduler: Rc<dyn Scheduler>,
    duration_ms: u32,
}

impl CountUpAnimator {
    /// Creates an animator whose text-parsed tasks last `duration_ms`.
    pub fn new(scheduler: Rc<dyn Scheduler>, duration_ms: u32) -> Self {
        Self {
            scheduler,
            duration_ms,
        }
    }

    /// Animates `sink` from 0 to `end_value`, rendering `value + suffix`.
    pub fn animate(
        &self,
        sink: Rc<dyn TextSink>,
        end_value: u64,
        duration_ms: u32,
        suffix: impl Into<String>,
    ) {
        let task = CountUpTask::new(
            CountUpTarget::new(end_value, suffix),
            duration_ms,
            self.scheduler.now_ms(),
        );
        debug!(
            "event=count_up_start module=count_up status=ok end_value={} duration_ms={}",
            end_value, duration_ms
        );
        request_tick(Rc::clone(&self.scheduler), sink, Rc::new(task));
    }

    /// Parses the sink's current text and animates toward it.
    ///
    /// Returns `false`, leaving the text untouched, when the text has no
    /// usable digit run.
    pub fn start(&self, sink: Rc<dyn TextSink>) -> bool {
        let Some(target) = CountUpTarget::parse(&sink.text()) else {
            debug!("event=count_up_start module=count_up status=skip reason=no_digits");
            return false;
        };
        self.animate(sink, target.end_value, self.duration_ms, target.suffix);
        true
    }

    /// Observes `target` and starts the count-up on its first visibility.
    pub fn watch<O>(&self, observer: &Rc<O>, target: O::Target, sink: Rc<dyn TextSink>)
    where
        O: VisibilityObserver + 'static,
    {
        let animator = self.clone();
        let weak_observer = Rc::downgrade(observer);
        let observed = target.clone();
        observer.observe(
            &target,
            Box::new(move |visible| {
                if !visible {
                    return;
                }
                if let Some(observer) = weak_observer.upgrade() {
                    observer.unobserve(&observed);
                }
                animator.start(Rc::clone(&sink));
            }),
        );
    }
}

fn request_tick(scheduler: Rc<dyn Scheduler>, sink: Rc<dyn TextSink>, task: Rc<CountUpTask>) {
    let next_scheduler = Rc::clone(&scheduler);
    scheduler.request_frame(Box::new(move |now_ms| {
        let frame = task.frame(now_ms);
        sink.set_text(&frame.text);
        if frame.finished {
            debug!(
                "event=count_up_finish module=count_up status=ok end_value={}",
                task.target().end_value
            );
            return;
        }
        request_tick(next_scheduler, sink, task);
    }));
}
