#![forbid(unsafe_code)]

//! Elm-style model/update/view contract for page sections.
//!
//! A section owns its state (the [`Model`]), reacts to messages in
//! [`Model::update`], and writes markup in [`Model::view`]. Side effects are
//! returned as [`Cmd`] values and executed by the host loop
//! ([`crate::StepProgram`]), which keeps every state transition testable
//! without a browser.
//!
//! # Example
//!
//! ```
//! use folio_runtime::{Cmd, Frame, Model};
//!
//! struct Counter {
//!     count: i32,
//! }
//!
//! enum Msg {
//!     Increment,
//!     Decrement,
//! }
//!
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message> {
//!         match msg {
//!             Msg::Increment => self.count += 1,
//!             Msg::Decrement => self.count -= 1,
//!         }
//!         Cmd::none()
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         frame.element("span", &[], &self.count.to_string());
//!     }
//! }
//! ```

use std::fmt;
use std::rc::Rc;

use web_time::Duration;

use crate::frame::Frame;

/// Application state and behavior.
pub trait Model: Sized {
    /// Messages that drive state transitions.
    type Message: 'static;

    /// Startup commands, run once before the first render.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// Apply one message. Returns commands for any side effects.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state.
    fn view(&self, frame: &mut Frame);
}

/// Single-threaded handle for delivering messages back into a program.
///
/// Tasks receive a mailbox and may post immediately or keep it and post
/// later, e.g. from a browser callback.
pub struct Mailbox<M> {
    sink: Rc<dyn Fn(M)>,
}

impl<M> Clone for Mailbox<M> {
    fn clone(&self) -> Self {
        Self {
            sink: Rc::clone(&self.sink),
        }
    }
}

impl<M> fmt::Debug for Mailbox<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mailbox").finish_non_exhaustive()
    }
}

impl<M: 'static> Mailbox<M> {
    /// Build a mailbox from any message sink.
    pub fn from_fn(sink: impl Fn(M) + 'static) -> Self {
        Self {
            sink: Rc::new(sink),
        }
    }

    /// Deliver a message.
    pub fn post(&self, msg: M) {
        (self.sink)(msg);
    }
}

/// A deferred side effect that reports back through a [`Mailbox`].
pub struct Task<M> {
    name: &'static str,
    run: Box<dyn FnOnce(Mailbox<M>)>,
}

impl<M> fmt::Debug for Task<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").field("name", &self.name).finish()
    }
}

impl<M: 'static> Task<M> {
    pub fn new(name: &'static str, run: impl FnOnce(Mailbox<M>) + 'static) -> Self {
        Self {
            name,
            run: Box::new(run),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Execute the task, handing it `mailbox`.
    pub fn run(self, mailbox: Mailbox<M>) {
        (self.run)(mailbox);
    }

    fn map_rc<N: 'static>(self, f: Rc<dyn Fn(M) -> N>) -> Task<N> {
        let Task { name, run } = self;
        Task {
            name,
            run: Box::new(move |outer: Mailbox<N>| {
                let inner = Mailbox::from_fn(move |msg: M| outer.post(f(msg)));
                run(inner);
            }),
        }
    }
}

/// Side effects returned from `init()` and `update()`.
#[derive(Debug)]
pub enum Cmd<M> {
    /// No operation.
    None,
    /// Stop processing messages.
    Quit,
    /// Execute several commands.
    Batch(Vec<Cmd<M>>),
    /// Feed a message straight back into `update()`.
    Msg(M),
    /// Deliver a message once the host clock has advanced by the duration.
    Delay(Duration, M),
    /// Run a task that reports back through a mailbox.
    Task(Task<M>),
}

impl<M> Cmd<M> {
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    #[inline]
    pub fn quit() -> Self {
        Self::Quit
    }

    #[inline]
    pub fn msg(m: M) -> Self {
        Self::Msg(m)
    }

    #[inline]
    pub fn delay(after: Duration, m: M) -> Self {
        Self::Delay(after, m)
    }

    /// Combine commands, collapsing empty and single-element batches.
    pub fn batch(cmds: Vec<Self>) -> Self {
        let mut cmds: Vec<Self> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Self::None,
            1 => cmds.pop().unwrap_or(Self::None),
            _ => Self::Batch(cmds),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<M: 'static> Cmd<M> {
    pub fn task(name: &'static str, run: impl FnOnce(Mailbox<M>) + 'static) -> Self {
        Self::Task(Task::new(name, run))
    }

    /// Lift a child model's commands into a parent message type.
    pub fn map<N: 'static>(self, f: impl Fn(M) -> N + 'static) -> Cmd<N> {
        self.map_rc(Rc::new(f))
    }

    fn map_rc<N: 'static>(self, f: Rc<dyn Fn(M) -> N>) -> Cmd<N> {
        match self {
            Self::None => Cmd::None,
            Self::Quit => Cmd::Quit,
            Self::Msg(m) => Cmd::Msg(f(m)),
            Self::Delay(after, m) => Cmd::Delay(after, f(m)),
            Self::Task(task) => Cmd::Task(task.map_rc(f)),
            Self::Batch(cmds) => Cmd::Batch(
                cmds.into_iter()
                    .map(|c| c.map_rc(Rc::clone(&f)))
                    .collect(),
            ),
        }
    }
}

impl<M> Default for Cmd<M> {
    fn default() -> Self {
        Self::None
    }
}
