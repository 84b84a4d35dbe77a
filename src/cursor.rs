//! Custom cursor dot and trail.
//!
//! The dot follows the pointer. While the pointer is over the document a
//! repeating timer spawns trail clones at the most recent position; every
//! move replaces that timer, and leaving the document cancels it. The timer
//! handle itself stays in the DOM layer; this state only decides what the
//! handle should be.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

/// Pointer position in client CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `left` style value.
    #[must_use]
    pub fn left(self) -> String {
        px(self.x)
    }

    /// `top` style value.
    #[must_use]
    pub fn top(self) -> String {
        px(self.y)
    }
}

#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// What the DOM layer must do with the trail interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrailCommand {
    /// Drop any live interval and start a new one spawning at this position.
    Restart(Position),
    /// Drop any live interval.
    Stop,
    /// Leave the interval as it is.
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorTrail {
    visible: bool,
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl CursorTrail {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Opacity for the dot.
    #[must_use]
    pub fn opacity(&self) -> &'static str {
        if self.visible { "1" } else { "0" }
    }

    /// Every move restarts the trail, even while the dot is hidden.
    #[allow(clippy::unused_self)]
    pub fn on_move(&mut self, at: Position) -> TrailCommand {
        TrailCommand::Restart(at)
    }

    pub fn on_leave(&mut self) -> TrailCommand {
        self.visible = false;
        TrailCommand::Stop
    }

    /// Entering shows the dot again; the trail resumes on the next move.
    pub fn on_enter(&mut self) -> TrailCommand {
        self.visible = true;
        TrailCommand::Keep
    }
}
