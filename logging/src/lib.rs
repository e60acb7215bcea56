//! Simple rivulet logging.
//!
//! Instrumented code logs typed events through a [`Logger`], which stamps
//! each event with an elapsed time and a setup identifier and buffers the
//! triples. Buffers are handed to a subscriber-supplied action once they
//! reach capacity, and once more when the logger is dropped; a final empty
//! batch marks the end of the event stream. Loggers are created and looked
//! up by name through a [`Registry`].

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Number of buffered events that triggers a flush to the action.
const BUFFER_CAPACITY: usize = 1024;

/// A buffering logger for events of type `E`, stamped with a setup `S`.
///
/// Cloning a logger yields another handle to the same buffer, so a logger
/// can be held both by the registry and by the instrumented code.
pub struct Logger<E, S: Clone> {
    inner: Rc<RefCell<LoggerInner<E, S>>>,
}

impl<E, S: Clone> Clone for Logger<E, S> {
    fn clone(&self) -> Self {
        Logger { inner: Rc::clone(&self.inner) }
    }
}

struct LoggerInner<E, S: Clone> {
    /// Base instant against which event times are measured.
    time: Instant,
    /// Identifier stamped on every event.
    setup: S,
    /// Buffered events awaiting a flush.
    buffer: Vec<(Duration, S, E)>,
    /// Subscriber action; receives the elapsed time and the batch to drain.
    action: Box<dyn FnMut(&Duration, &mut Vec<(Duration, S, E)>)>,
}

impl<E, S: Clone> Logger<E, S> {
    /// Allocates a new logger around a subscriber action.
    pub fn new<F>(time: Instant, setup: S, action: F) -> Self
    where
        F: FnMut(&Duration, &mut Vec<(Duration, S, E)>) + 'static,
    {
        Logger {
            inner: Rc::new(RefCell::new(LoggerInner {
                time,
                setup,
                buffer: Vec::with_capacity(BUFFER_CAPACITY),
                action: Box::new(action),
            })),
        }
    }

    /// Logs one event.
    pub fn log<T: Into<E>>(&self, event: T) {
        self.inner.borrow_mut().push(event.into());
    }

    /// Logs a sequence of events.
    pub fn log_many<I>(&self, events: I)
    where
        I: IntoIterator,
        I::Item: Into<E>,
    {
        let mut inner = self.inner.borrow_mut();
        for event in events {
            inner.push(event.into());
        }
    }

    /// Flushes buffered events through the action.
    pub fn flush(&self) {
        self.inner.borrow_mut().flush();
    }
}

impl<E, S: Clone> LoggerInner<E, S> {
    fn push(&mut self, event: E) {
        let elapsed = self.time.elapsed();
        let setup = self.setup.clone();
        self.buffer.push((elapsed, setup, event));
        if self.buffer.len() >= BUFFER_CAPACITY {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            let elapsed = self.time.elapsed();
            (self.action)(&elapsed, &mut self.buffer);
            self.buffer.clear();
        }
    }
}

impl<E, S: Clone> Drop for LoggerInner<E, S> {
    fn drop(&mut self) {
        self.flush();
        // An empty batch tells the subscriber no further events will arrive.
        let elapsed = self.time.elapsed();
        (self.action)(&elapsed, &mut self.buffer);
    }
}

/// A registry of named logging streams.
///
/// Subscribers [`insert`](Registry::insert) an action under a name before a
/// computation runs; instrumented code [`get`](Registry::get)s a typed
/// [`Logger`] under the same name. Events are stamped with the registry's
/// setup identifier.
pub struct Registry<S: Clone> {
    /// Base instant shared by all loggers created through this registry.
    time: Instant,
    /// Identifier stamped on every event.
    setup: S,
    /// Installed loggers, keyed by name.
    map: HashMap<String, Box<dyn Any>>,
}

impl<S: Clone + 'static> Registry<S> {
    /// Allocates a new registry with a time base and a setup identifier.
    pub fn new(time: Instant, setup: S) -> Self {
        Registry {
            time,
            setup,
            map: HashMap::new(),
        }
    }

    /// Installs a logging action under `name`, returning any logger the name
    /// previously bound.
    pub fn insert<E: 'static, F>(&mut self, name: &str, action: F) -> Option<Box<dyn Any>>
    where
        F: FnMut(&Duration, &mut Vec<(Duration, S, E)>) + 'static,
    {
        let logger = Logger::new(self.time, self.setup.clone(), action);
        self.insert_logger(name, logger)
    }

    /// Installs a pre-built logger under `name`.
    pub fn insert_logger<E: 'static>(
        &mut self,
        name: &str,
        logger: Logger<E, S>,
    ) -> Option<Box<dyn Any>> {
        self.map.insert(name.to_owned(), Box::new(logger))
    }

    /// Looks up the logger bound to `name`, if any with matching event type.
    pub fn get<E: 'static>(&self, name: &str) -> Option<Logger<E, S>> {
        self.map
            .get(name)
            .and_then(|any| any.downcast_ref::<Logger<E, S>>())
            .cloned()
    }

    /// Removes and returns the logger bound to `name`.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Any>> {
        self.map.remove(name)
    }
}
