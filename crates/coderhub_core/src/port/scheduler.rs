//! Frame and timer scheduling contract.

/// Callback for one animation frame; receives the frame timestamp in ms.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Callback for one elapsed delay.
pub type TimerCallback = Box<dyn FnOnce()>;

/// Opaque id of a pending delay, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Host clock and callback queue.
///
/// Every callback fires at most once. A continuing animation must request a
/// new frame from inside its frame callback.
pub trait Scheduler {
    /// Current clock reading in ms, on the same timeline as frame timestamps.
    fn now_ms(&self) -> f64;

    /// Invokes `callback` once on the next display refresh.
    fn request_frame(&self, callback: FrameCallback);

    /// Invokes `callback` once after `delay_ms`.
    fn delay(&self, delay_ms: u32, callback: TimerCallback) -> TimerHandle;

    /// Drops a pending delay. Unknown or already-fired handles are ignored.
    fn cancel(&self, handle: TimerHandle);
}
