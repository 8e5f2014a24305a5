// Input events as the app sees them, independent of the window backend.

use crate::geometry::Point;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Button {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerAction {
    Move,
    Press,
    Release,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyCode {
    Escape,
    Other,
}

/// Window lifecycle stages.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Stage {
    Visible,
    Focused,
    Dead,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// New window size in pixels. 0x0 means the window went away.
    Resize { width: usize, height: usize },
    Pointer {
        pos: Point,
        button: Option<Button>,
        action: PointerAction,
    },
    Key(KeyCode),
    Lifecycle(Stage),
    /// Redraw with the current transform.
    Paint,
    /// The event stream reported a problem. Not fatal.
    #[allow(dead_code)] // minifb has no error channel
    Error(String),
}

/// Ordered supply of events. `None` once the source is exhausted.
pub trait EventSource {
    fn next_event(&mut self) -> Option<Event>;
}

/// Plain FIFO source.
#[derive(Debug)]
pub struct QueueSource {
    queue: VecDeque<Event>,
}

impl QueueSource {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self { queue: events.into_iter().collect() }
    }

    pub fn push(&mut self, event: Event) {
        self.queue.push_back(event);
    }
}

impl EventSource for QueueSource {
    fn next_event(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }
}

/// Wall-clock rate limiter for pointer redraws.
#[derive(Debug, Clone)]
pub struct Debounce {
    interval: Duration,
    last: Option<Instant>,
}

impl Debounce {
    pub fn new(interval: Duration) -> Self {
        Self { interval, last: None }
    }

    /// True (and `now` is remembered) when more than `interval` has passed
    /// since the last accepted call.
    pub fn ready(&mut self, now: Instant) -> bool {
        let pass = match self.last {
            None => true,
            Some(last) => now > last + self.interval,
        };
        if pass {
            self.last = Some(now);
        }
        pass
    }
}
