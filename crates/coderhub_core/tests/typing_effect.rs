use coderhub_core::config::TypingConfig;
use coderhub_core::testing::{ManualScheduler, MemorySink};
use coderhub_core::{TextSink, TypingAnimator};
use std::rc::Rc;

fn start(text: &str) -> (Rc<ManualScheduler>, Rc<MemorySink>) {
    let scheduler = Rc::new(ManualScheduler::new());
    let sink = Rc::new(MemorySink::new(text));
    TypingAnimator::new(scheduler.clone(), &TypingConfig::default()).start_from_sink(sink.clone());
    (scheduler, sink)
}

#[test]
fn sink_is_blank_during_lead_in() {
    let (scheduler, sink) = start("Hello");
    assert_eq!(sink.text(), "");
    scheduler.advance(499);
    assert_eq!(sink.text(), "");
    scheduler.advance(1);
    assert_eq!(sink.text(), "H");
}

#[test]
fn five_ticks_type_hello_then_stop() {
    let (scheduler, sink) = start("Hello");

    scheduler.advance(500);
    let mut seen = vec![sink.text()];
    for _ in 0..4 {
        scheduler.advance(100);
        seen.push(sink.text());
    }

    assert_eq!(seen, ["H", "He", "Hel", "Hell", "Hello"]);
    assert_eq!(scheduler.pending_timers(), 0);

    scheduler.advance(1000);
    assert_eq!(sink.text(), "Hello");
}

#[test]
fn empty_text_stays_empty_and_schedules_nothing_after_first_tick() {
    let (scheduler, sink) = start("");
    assert_eq!(scheduler.pending_timers(), 1);
    scheduler.advance(500);
    assert_eq!(sink.text(), "");
    assert_eq!(scheduler.pending_timers(), 0);
}

#[test]
fn custom_delays_are_honored() {
    let scheduler = Rc::new(ManualScheduler::new());
    let sink = Rc::new(MemorySink::new("ignored"));
    let config = TypingConfig {
        initial_delay_ms: 0,
        char_delay_ms: 10,
    };
    TypingAnimator::new(scheduler.clone(), &config).start(sink.clone(), "¡Sí!");

    scheduler.advance(0);
    assert_eq!(sink.text(), "¡");
    scheduler.advance(30);
    assert_eq!(sink.text(), "¡Sí!");
    assert_eq!(scheduler.pending_timers(), 0);
}
