//! Browser clock: `requestAnimationFrame`, `setTimeout` and
//! `performance.now()`.

use coderhub_core::{FrameCallback, Scheduler, TimerCallback, TimerHandle};
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast as _;
use web_sys::{Performance, Window};

pub struct BrowserScheduler {
    window: Window,
    performance: Option<Performance>,
}

impl BrowserScheduler {
    pub fn new(window: Window) -> Self {
        let performance = window.performance();
        Self {
            window,
            performance,
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }

    fn request_frame(&self, callback: FrameCallback) {
        // The JS function frees itself after its single call.
        let function = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        if let Err(err) = self
            .window
            .request_animation_frame(function.unchecked_ref())
        {
            warn!("event=request_frame module=web status=error err={err:?}");
        }
    }

    fn delay(&self, delay_ms: u32, callback: TimerCallback) -> TimerHandle {
        let function = Closure::once_into_js(move || callback());
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(function.unchecked_ref(), timeout)
        {
            Ok(id) => TimerHandle::new(u64::from(id.unsigned_abs())),
            Err(err) => {
                warn!("event=set_timeout module=web status=error err={err:?}");
                TimerHandle::new(0)
            }
        }
    }

    fn cancel(&self, handle: TimerHandle) {
        // A cancelled timeout never calls its closure, so that closure leaks;
        // it is bounded by one per dismissed notification.
        if let Ok(id) = i32::try_from(handle.raw()) {
            if id != 0 {
                self.window.clear_timeout_with_handle(id);
            }
        }
    }
}
