//! Typing effect for the hero heading.
//!
//! # Responsibility
//! - Blank the heading, then reveal its text one character per tick.
//!
//! # Invariants
//! - The sink is cleared synchronously in `start`, before any delay.
//! - Exactly one tick runs per character; no tick is scheduled after the
//!   last character.

use crate::config::TypingConfig;
use crate::model::animation::TypingTask;
use crate::port::dom::TextSink;
use crate::port::scheduler::Scheduler;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Drives a typing task on a scheduler.
pub struct TypingAnimator {
    scheduler: Rc<dyn Scheduler>,
    initial_delay_ms: u32,
    char_delay_ms: u32,
}

impl TypingAnimator {
    pub fn new(scheduler: Rc<dyn Scheduler>, config: &TypingConfig) -> Self {
        Self {
            scheduler,
            initial_delay_ms: config.initial_delay_ms,
            char_delay_ms: config.char_delay_ms,
        }
    }

    /// Clears `sink` and types `full_text` into it.
    pub fn start(&self, sink: Rc<dyn TextSink>, full_text: &str) {
        sink.set_text("");
        let task = Rc::new(RefCell::new(TypingTask::new(full_text)));
        debug!(
            "event=typing_start module=typing status=ok chars={}",
            task.borrow().len()
        );
        schedule_tick(
            Rc::clone(&self.scheduler),
            self.initial_delay_ms,
            self.char_delay_ms,
            sink,
            task,
        );
    }

    /// Types the sink's own current text back into it.
    pub fn start_from_sink(&self, sink: Rc<dyn TextSink>) {
        let full_text = sink.text();
        self.start(sink, &full_text);
    }
}

fn schedule_tick(
    scheduler: Rc<dyn Scheduler>,
    delay_ms: u32,
    char_delay_ms: u32,
    sink: Rc<dyn TextSink>,
    task: Rc<RefCell<TypingTask>>,
) {
    let next_scheduler = Rc::clone(&scheduler);
    scheduler.delay(
        delay_ms,
        Box::new(move || {
            let next = task.borrow_mut().next_char();
            if let Some(ch) = next {
                let mut buf = [0u8; 4];
                sink.append_text(ch.encode_utf8(&mut buf));
            }
            if task.borrow().is_finished() {
                debug!("event=typing_finish module=typing status=ok");
                return;
            }
            schedule_tick(next_scheduler, char_delay_ms, char_delay_ms, sink, task);
        }),
    );
}
