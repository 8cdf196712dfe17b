#![forbid(unsafe_code)]

//! Host-driven program loop with a deterministic clock.
//!
//! The host (browser glue or a test) owns time: it calls
//! [`StepProgram::advance_time`] and [`StepProgram::step`] from its own
//! event loop. Nothing here reads a wall clock, so every delay-driven state
//! transition (simulated submission, toast expiry, delivery timeouts) can be
//! replayed exactly.
//!
//! # Invariants
//!
//! 1. Delayed messages fire in deadline order; equal deadlines fire in the
//!    order they were scheduled.
//! 2. A message posted to the mailbox during `step()` is processed in the
//!    same step, bounded by [`MAX_MESSAGES_PER_STEP`].
//! 3. The frame is re-rendered at most once per step, and only when a
//!    message was processed or `init()` ran.
//! 4. After `Cmd::Quit` no further messages are applied.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::{debug, trace, warn};
use web_time::Duration;

use crate::frame::Frame;
use crate::program::{Cmd, Mailbox, Model};

/// Upper bound on messages applied by a single `step()`, so a message
/// ping-pong between two models cannot hang the host.
pub const MAX_MESSAGES_PER_STEP: u32 = 4096;

/// Outcome of one [`StepProgram::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepResult {
    pub running: bool,
    pub rendered: bool,
    pub messages_processed: u32,
}

struct PendingDelay<Msg> {
    deadline: Duration,
    seq: u64,
    msg: Msg,
}

/// A [`Model`] wrapped with an inbox, a timer wheel and a render target.
pub struct StepProgram<M: Model> {
    model: M,
    inbox: Rc<RefCell<VecDeque<M::Message>>>,
    delays: Vec<PendingDelay<M::Message>>,
    now: Duration,
    next_seq: u64,
    initialized: bool,
    running: bool,
    dirty: bool,
    frame: Frame,
    frame_idx: u64,
}

impl<M: Model> StepProgram<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            inbox: Rc::new(RefCell::new(VecDeque::new())),
            delays: Vec::new(),
            now: Duration::ZERO,
            next_seq: 0,
            initialized: false,
            running: true,
            dirty: true,
            frame: Frame::new(),
            frame_idx: 0,
        }
    }

    /// Run `Model::init` and render the first frame. Idempotent.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        let cmd = self.model.init();
        self.execute(cmd);
        self.render();
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handle that feeds messages into this program's inbox.
    #[must_use]
    pub fn mailbox(&self) -> Mailbox<M::Message> {
        let inbox = Rc::clone(&self.inbox);
        Mailbox::from_fn(move |msg| inbox.borrow_mut().push_back(msg))
    }

    /// Queue a message for the next `step()`.
    pub fn push(&mut self, msg: M::Message) {
        self.inbox.borrow_mut().push_back(msg);
    }

    /// Advance the clock and release every delayed message that is now due.
    pub fn advance_time(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
        if self.delays.is_empty() {
            return;
        }
        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.delays.drain(..).partition(|d| d.deadline <= now);
        self.delays = pending;
        due.sort_by_key(|d| (d.deadline, d.seq));
        let mut inbox = self.inbox.borrow_mut();
        for delay in due {
            inbox.push_back(delay.msg);
        }
    }

    /// Current host clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Time until the earliest pending delay, if any.
    ///
    /// Hosts use this to arm a single timer instead of polling.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.delays
            .iter()
            .map(|d| d.deadline.saturating_sub(self.now))
            .min()
    }

    #[must_use]
    pub fn pending_delays(&self) -> usize {
        self.delays.len()
    }

    /// Apply queued messages and re-render if anything changed.
    pub fn step(&mut self) -> StepResult {
        if !self.initialized {
            self.init();
        }
        let mut processed = 0u32;
        while self.running && processed < MAX_MESSAGES_PER_STEP {
            // Release the borrow before update(); tasks may post synchronously.
            let next = self.inbox.borrow_mut().pop_front();
            let Some(msg) = next else {
                break;
            };
            let cmd = self.model.update(msg);
            self.execute(cmd);
            processed += 1;
            self.dirty = true;
        }
        if processed == MAX_MESSAGES_PER_STEP && !self.inbox.borrow().is_empty() {
            warn!(
                limit = MAX_MESSAGES_PER_STEP,
                "message budget exhausted; deferring remainder to next step"
            );
        }
        let rendered = self.dirty;
        if rendered {
            self.render();
        }
        StepResult {
            running: self.running,
            rendered,
            messages_processed: processed,
        }
    }

    fn execute(&mut self, cmd: Cmd<M::Message>) {
        match cmd {
            Cmd::None => {}
            Cmd::Quit => {
                debug!("program quit requested");
                self.running = false;
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd);
                }
            }
            Cmd::Msg(msg) => self.inbox.borrow_mut().push_back(msg),
            Cmd::Delay(after, msg) => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.delays.push(PendingDelay {
                    deadline: self.now.saturating_add(after),
                    seq,
                    msg,
                });
            }
            Cmd::Task(task) => {
                trace!(task = task.name(), "running task");
                let mailbox = self.mailbox();
                task.run(mailbox);
            }
        }
    }

    fn render(&mut self) {
        self.frame.clear();
        self.model.view(&mut self.frame);
        self.frame_idx += 1;
        self.dirty = false;
    }

    /// Force a render on the next step, e.g. after mutating the model directly.
    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    /// Markup of the last rendered frame.
    #[must_use]
    pub fn html(&self) -> &str {
        self.frame.as_str()
    }

    #[must_use]
    pub fn frame_idx(&self) -> u64 {
        self.frame_idx
    }

    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable model access. Marks the frame dirty.
    pub fn model_mut(&mut self) -> &mut M {
        self.dirty = true;
        &mut self.model
    }
}
