//! Animated numeric counters.
//!
//! [`CounterAnimation`] is an iterator over the values a counter displays:
//! a fixed number of linear steps from zero towards the target, each rounded
//! up, then the exact target. The DOM layer pulls one value per timer tick,
//! so total duration is `steps × tick` regardless of the target's magnitude.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::error::{Result, SitewireError};

/// Parse a `data-target` attribute with integer-prefix semantics.
///
/// Leading whitespace and an optional sign are accepted, then the leading
/// run of ASCII digits is taken and the rest ignored (`"250+"` → 250).
///
/// # Errors
///
/// Returns [`SitewireError::CounterTarget`] when no digits lead the value or
/// the number does not fit in an `i64`.
pub fn parse_target(raw: &str) -> Result<i64> {
    let trimmed = raw.trim_start();
    let (sign_len, negative) = match trimmed.as_bytes().first() {
        Some(b'-') => (1, true),
        Some(b'+') => (1, false),
        _ => (0, false),
    };
    let rest = &trimmed[sign_len..];
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(SitewireError::CounterTarget(raw.to_owned()));
    }
    let digits = &rest[..digits_len];
    let magnitude: i64 = digits
        .parse()
        .map_err(|_| SitewireError::CounterTarget(raw.to_owned()))?;
    Ok(if negative { -magnitude } else { magnitude })
}

#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    count: f64,
    increment: f64,
    finished: bool,
}

impl CounterAnimation {
    /// Animate from zero to `target` in `steps` increments.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: i64, steps: u32) -> Self {
        let increment = target as f64 / f64::from(steps.max(1));
        Self { target, count: 0.0, increment, finished: false }
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Iterator for CounterAnimation {
    type Item = i64;

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<i64> {
        if self.finished {
            return None;
        }
        if self.count < self.target as f64 {
            self.count += self.increment;
            let shown = (self.count.ceil() as i64).min(self.target);
            return Some(shown);
        }
        self.finished = true;
        Some(self.target)
    }
}
