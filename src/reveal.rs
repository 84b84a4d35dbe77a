//! One-shot reveal-on-intersection state.
//!
//! A [`RevealSet`] tracks a list of observed elements by index. Each element
//! moves from pending to revealed exactly once, the first time an
//! intersection sample reports it intersecting. The threshold is not checked
//! here: it configures the observer, which only reports crossings of it. The
//! returned [`Reveal`] tells the DOM layer to add the class and unobserve the
//! element; later samples for the same index produce nothing.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts;

/// Which presentation a reveal applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// `.fade-on-scroll` → `fade-in`.
    Fade,
    /// `.slide-on-scroll` → `slide-in`.
    Slide,
    /// `.counter-number` → `visible`, then the counter animation starts.
    Counter,
}

impl RevealKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Fade => consts::CLASS_FADE_IN,
            Self::Slide => consts::CLASS_SLIDE_IN,
            Self::Counter => consts::CLASS_VISIBLE,
        }
    }

    /// Selector for elements of this kind.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::Fade => consts::SEL_FADE,
            Self::Slide => consts::SEL_SLIDE,
            Self::Counter => consts::SEL_COUNTER,
        }
    }
}

/// One intersection observer entry, reduced to what the engine needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub target: usize,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionSample {
    #[must_use]
    pub fn new(target: usize, is_intersecting: bool, ratio: f64) -> Self {
        Self { target, is_intersecting, ratio }
    }
}

/// Instruction to add `class` to element `target` and stop observing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub target: usize,
    pub class: &'static str,
}

#[derive(Debug, Clone)]
pub struct RevealSet {
    kind: RevealKind,
    threshold: f64,
    revealed: Vec<bool>,
}

impl RevealSet {
    #[must_use]
    pub fn new(kind: RevealKind, len: usize, threshold: f64) -> Self {
        Self { kind, threshold, revealed: vec![false; len] }
    }

    #[must_use]
    pub fn kind(&self) -> RevealKind {
        self.kind
    }

    /// Visibility ratio the observer should report at.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    /// An empty set needs no observer at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Number of elements still being observed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }

    /// Process one observer callback batch in the order supplied.
    ///
    /// Unknown indices and already-revealed elements are ignored.
    pub fn on_entries(&mut self, samples: &[IntersectionSample]) -> Vec<Reveal> {
        let mut out = Vec::new();
        for sample in samples {
            if !sample.is_intersecting {
                continue;
            }
            let Some(slot) = self.revealed.get_mut(sample.target) else {
                continue;
            };
            if *slot {
                continue;
            }
            *slot = true;
            out.push(Reveal { target: sample.target, class: self.kind.class() });
        }
        out
    }
}
