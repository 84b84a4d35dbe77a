//! Single-open toggle group shared by service cards and the accordion.
//!
//! Clicking a member closes every other member and toggles the clicked one,
//! so at most one member is ever open.

#[cfg(test)]
#[path = "group_test.rs"]
mod group_test;

/// Class changes produced by one click.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupChange {
    /// Member that was open before the click and is now closed.
    pub closed: Option<usize>,
    /// Member that is open after the click.
    pub opened: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct SingleOpenGroup {
    len: usize,
    open: Option<usize>,
}

impl SingleOpenGroup {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Handle a click on member `index`. Out-of-range indices change nothing.
    pub fn toggle(&mut self, index: usize) -> GroupChange {
        if index >= self.len {
            return GroupChange::default();
        }
        let previous = self.open.take();
        if previous == Some(index) {
            return GroupChange { closed: previous, opened: None };
        }
        self.open = Some(index);
        GroupChange { closed: previous, opened: Some(index) }
    }
}
