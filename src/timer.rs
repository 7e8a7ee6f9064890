// SPDX-License-Identifier: MPL-2.0

//! Broadcast notifications to registered listeners after a delay.
//!
//! A [`TimerManager`] keeps an ordered list of listeners. [`TimerManager::notify`] blocks the
//! calling thread for the requested delay, then calls every listener in registration order with
//! the same [`TimerEvent`].
//!
//! ```
//! use std::{cell::RefCell, rc::Rc, time::Duration};
//! use collections_kit::timer::TimerManager;
//!
//! let received = Rc::new(RefCell::new(Vec::new()));
//! let mut timer = TimerManager::new();
//! let sink = Rc::clone(&received);
//! timer.register(move |event| sink.borrow_mut().push(event.message().to_owned()));
//!
//! timer.notify("ring", Duration::ZERO).unwrap();
//! assert_eq!(*received.borrow(), ["ring"]);
//! ```

use std::{thread, time::Duration};

use tracing::{debug, trace};

/// Errors triggered by timer operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TimerError {
    /// Error when the message to broadcast is empty or only whitespace.
    #[error("message must not be blank")]
    BlankMessage,
}

/// The payload delivered to listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimerEvent {
    message: String,
}

impl TimerEvent {
    /// Creates an event carrying `message`.
    ///
    /// # Errors
    /// Returns [`TimerError::BlankMessage`] if `message` is empty or only whitespace.
    pub fn new(message: impl Into<String>) -> Result<Self, TimerError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(TimerError::BlankMessage);
        }

        Ok(Self { message })
    }

    /// The broadcast message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Handle returned by [`TimerManager::register`], used to unregister the listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&TimerEvent)>;

/// Notifies registered listeners.
#[derive(Default)]
pub struct TimerManager {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl TimerManager {
    /// Creates a manager with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `listener` to the end of the notification list.
    pub fn register<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&TimerEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        trace!(listener = id.0, "registered timer listener");
        id
    }

    /// Removes the listener registered under `id`. Returns `false` if it was not registered.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        let removed = self.listeners.len() != before;
        trace!(listener = id.0, removed, "unregistered timer listener");
        removed
    }

    /// Returns the number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Waits for `delay`, then calls every listener with `message`.
    ///
    /// The message is validated before waiting, so a failed call has no effect.
    ///
    /// # Errors
    /// Returns [`TimerError::BlankMessage`] if `message` is empty or only whitespace.
    pub fn notify(&mut self, message: &str, delay: Duration) -> Result<(), TimerError> {
        let event = TimerEvent::new(message)?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        debug!(
            listeners = self.listeners.len(),
            ?delay,
            "broadcasting timer event"
        );
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }

        Ok(())
    }
}

impl core::fmt::Debug for TimerManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TimerManager")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
