//! Time-driven animation task state.
//!
//! # Responsibility
//! - Parse count-up targets from the text a statistic element already shows.
//! - Compute the count-up text for a given clock reading.
//! - Track the reveal position of a typing effect.
//!
//! # Invariants
//! - Count-up frames are recomputed from the start timestamp, never from
//!   accumulated deltas.
//! - A finished count-up frame renders exactly `end_value` plus suffix.
//! - A typing task never yields a character past the end of its source.

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit regex"));

/// End value and trailing text parsed from a statistic element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUpTarget {
    pub end_value: u64,
    /// Original text with the first digit run removed.
    pub suffix: String,
}

impl CountUpTarget {
    pub fn new(end_value: u64, suffix: impl Into<String>) -> Self {
        Self {
            end_value,
            suffix: suffix.into(),
        }
    }

    /// Extracts the first maximal digit run of `text` as the end value.
    ///
    /// Returns `None` when `text` has no digit run, or when the run does not
    /// fit in `u64`.
    pub fn parse(text: &str) -> Option<Self> {
        let digits = DIGIT_RUN_RE.find(text)?;
        let end_value = match digits.as_str().parse::<u64>() {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=count_up_parse module=animation status=skip digits_len={} reason={}",
                    digits.as_str().len(),
                    err
                );
                return None;
            }
        };
        let mut suffix = String::with_capacity(text.len() - digits.as_str().len());
        suffix.push_str(&text[..digits.start()]);
        suffix.push_str(&text[digits.end()..]);
        Some(Self { end_value, suffix })
    }
}

/// Text to render for one count-up frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUpFrame {
    pub text: String,
    /// `true` on the frame that reaches `end_value`; no frame follows it.
    pub finished: bool,
}

/// A count-up animation from 0 to a target value.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUpTask {
    target: CountUpTarget,
    duration_ms: f64,
    started_at_ms: f64,
}

impl CountUpTask {
    pub fn new(target: CountUpTarget, duration_ms: u32, started_at_ms: f64) -> Self {
        Self {
            target,
            duration_ms: f64::from(duration_ms),
            started_at_ms,
        }
    }

    pub fn target(&self) -> &CountUpTarget {
        &self.target
    }

    /// Elapsed fraction of the duration, clamped to `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Computes the frame for clock reading `now_ms`.
    pub fn frame(&self, now_ms: f64) -> CountUpFrame {
        let progress = self.progress(now_ms);
        let finished = progress >= 1.0;
        let value = if finished {
            self.target.end_value
        } else {
            (progress * self.target.end_value as f64).floor() as u64
        };
        CountUpFrame {
            text: format!("{value}{}", self.target.suffix),
            finished,
        }
    }
}

/// Character-by-character reveal of a fixed string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingTask {
    chars: Vec<char>,
    index: usize,
}

impl TypingTask {
    pub fn new(full_text: &str) -> Self {
        Self {
            chars: full_text.chars().collect(),
            index: 0,
        }
    }

    /// Number of characters in the source string.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// Returns the next character and advances, or `None` once exhausted.
    pub fn next_char(&mut self) -> Option<char> {
        let next = self.chars.get(self.index).copied()?;
        self.index += 1;
        Some(next)
    }

    /// Characters revealed so far.
    pub fn typed(&self) -> String {
        self.chars[..self.index].iter().collect()
    }
}
