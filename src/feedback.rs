//! Boundary between the engine and whatever presents it.
//!
//! The session only hands back [`GameEvent`] values. A [`FeedbackTable`] fans each
//! event out to the registered sinks, which decide what the player sees (or hears).

use std::cell::RefCell;
use std::rc::Rc;
use log::{info, warn};
use crate::core::{BlockReason, GameEvent, Session};

pub trait Feedback {
    fn on_event(&mut self, event: &GameEvent, session: &Session);
}

#[derive(Default)]
pub struct FeedbackTable {
    sinks: Vec<Box<dyn Feedback>>,
}

impl FeedbackTable {
    pub fn new() -> Self {
        FeedbackTable { sinks: Vec::new() }
    }

    pub fn with(mut self, sink: impl Feedback + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn register(&mut self, sink: Box<dyn Feedback>) {
        self.sinks.push(sink);
    }

    pub fn dispatch(&mut self, event: &GameEvent, session: &Session) {
        for sink in self.sinks.iter_mut() {
            sink.on_event(event, session);
        }
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Bump,
    Success,
}

/// Remembers the most recent event as a one-line message for the footer.
#[derive(Clone, Debug, Default)]
pub struct StatusLine {
    message: String,
    tone: Tone,
}

impl StatusLine {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn clear(&mut self) {
        self.message.clear();
        self.tone = Tone::Neutral;
    }
}

pub fn describe(event: &GameEvent) -> (&'static str, Tone) {
    match event {
        GameEvent::Moved => ("", Tone::Neutral),
        GameEvent::Pushed => ("Heave!", Tone::Neutral),
        GameEvent::Blocked(BlockReason::Wall) => ("Ouch, that's a wall", Tone::Bump),
        GameEvent::Blocked(BlockReason::OutOfBounds) => ("Nothing out there", Tone::Bump),
        GameEvent::Blocked(BlockReason::CrateStuck) => ("The crate won't budge", Tone::Bump),
        GameEvent::Blocked(BlockReason::NoMover) => ("Nobody here to move", Tone::Bump),
        GameEvent::CrateCompleted => ("Crate in place!", Tone::Success),
        GameEvent::Won => ("Warehouse cleared!", Tone::Success),
    }
}

impl Feedback for StatusLine {
    fn on_event(&mut self, event: &GameEvent, _session: &Session) {
        let (message, tone) = describe(event);
        self.message = message.to_string();
        self.tone = tone;
    }
}

/// Writes every event through the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct EventLog;

impl Feedback for EventLog {
    fn on_event(&mut self, event: &GameEvent, session: &Session) {
        let pos = session.mover();
        match event {
            GameEvent::Blocked(reason) => warn!(
                "move {}: blocked by {:?} at ({}, {})",
                session.move_count(), reason, pos.row, pos.col
            ),
            GameEvent::Won => info!("move {}: level won", session.move_count()),
            other => info!(
                "move {}: {:?}, mover at ({}, {})",
                session.move_count(), other, pos.row, pos.col
            ),
        }
    }
}

impl<T: Feedback> Feedback for Rc<RefCell<T>> {
    fn on_event(&mut self, event: &GameEvent, session: &Session) {
        self.borrow_mut().on_event(event, session);
    }
}
