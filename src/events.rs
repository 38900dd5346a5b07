//! Terminal event source abstraction to enable driving the main loop in tests

use anyhow::Result;
use crossterm::event::{self, Event};
use std::time::Duration;

/// Source of terminal input events
#[cfg_attr(test, mockall::automock)]
pub trait EventSource {
    /// Wait up to `timeout` for an event; returns true if one is ready
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next event, blocking until one is available
    fn read(&mut self) -> Result<Event>;
}

/// Events from the real terminal
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}
