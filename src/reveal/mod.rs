//! Timed reveal of favorites, one card per tick.
//!
//! DESIGN
//! ======
//! `RevealSession` is the pure state machine: a queue, a position that only
//! moves forward, and a running flag. `RevealController` owns at most one
//! session task at a time. Starting a new reveal aborts the previous task
//! and retires its session id before anything else happens, so a stale task
//! cannot append to the display even if it is mid-poll on another worker.
//!
//! TIMING
//! ======
//! Ticks fire every `interval` (first one after a full interval). Each tick
//! reveals `queue[position]`. The tick after the last item stops the ticker
//! and releases the button; the completion message follows after
//! `completion_delay`. An empty queue skips the ticker entirely.

pub mod flatten;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};
use uuid::Uuid;

use crate::content::favorite_card;
use crate::profile::Favorites;
use crate::surface::{ContainerId, RenderCommand, Surface};
use flatten::{FlattenedEntry, flatten_favorites};

pub const DEFAULT_REVEAL_INTERVAL_MS: u64 = 2500;
pub const DEFAULT_COMPLETION_DELAY_MS: u64 = 1000;

/// Floor for the tick period; a zero period cannot drive a ticker.
const MIN_REVEAL_INTERVAL: Duration = Duration::from_millis(1);

pub const REVEALING_LABEL: &str = "Revealing Favorites...";
pub const SHOW_AGAIN_LABEL: &str = "Show Again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Time between reveals.
    pub interval: Duration,
    /// Extra wait between the final tick and the completion message.
    pub completion_delay: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_REVEAL_INTERVAL_MS),
            completion_delay: Duration::from_millis(DEFAULT_COMPLETION_DELAY_MS),
        }
    }
}

// =============================================================================
// SESSION STATE MACHINE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// No session has been started.
    Idle,
    /// Items remain to be shown.
    Running,
    /// The final item is shown; waiting for the stop tick.
    Draining,
    /// Ticker stopped. Terminal for this session.
    Complete,
}

/// Outcome of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    Reveal { index: usize, entry: FlattenedEntry },
    Finished,
}

#[derive(Debug)]
pub struct RevealSession {
    id: Uuid,
    queue: Vec<FlattenedEntry>,
    position: usize,
    is_running: bool,
}

impl RevealSession {
    /// An empty queue starts out complete.
    #[must_use]
    pub fn new(queue: Vec<FlattenedEntry>) -> Self {
        let is_running = !queue.is_empty();
        Self { id: Uuid::new_v4(), queue, position: 0, is_running }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.is_running
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        if !self.is_running {
            RevealPhase::Complete
        } else if self.position < self.queue.len() {
            RevealPhase::Running
        } else {
            RevealPhase::Draining
        }
    }

    /// Advance one tick. Reveals the item at `position` and moves past it,
    /// or stops the session once every item has been shown. Ticking a
    /// stopped session changes nothing.
    pub fn tick(&mut self) -> Tick {
        if !self.is_running {
            return Tick::Finished;
        }
        match self.queue.get(self.position) {
            Some(entry) => {
                let index = self.position;
                let entry = entry.clone();
                self.position += 1;
                Tick::Reveal { index, entry }
            }
            None => {
                self.is_running = false;
                Tick::Finished
            }
        }
    }
}

// =============================================================================
// STATUS
// =============================================================================

/// Snapshot of the active session, readable from outside the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStatus {
    pub session_id: Option<Uuid>,
    pub phase: RevealPhase,
    pub position: usize,
    pub total: usize,
    pub completion_shown: bool,
}

impl RevealStatus {
    #[must_use]
    pub fn idle() -> Self {
        Self { session_id: None, phase: RevealPhase::Idle, position: 0, total: 0, completion_shown: false }
    }

    fn of(session: &RevealSession) -> Self {
        Self {
            session_id: Some(session.id()),
            phase: session.phase(),
            position: session.position(),
            total: session.len(),
            completion_shown: false,
        }
    }

    /// The reveal trigger stays disabled while a session is showing items.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, RevealPhase::Running | RevealPhase::Draining)
    }
}

/// Serializes status updates and surface writes. A write is only applied
/// when it comes from the currently active session.
struct SessionGate {
    surface: Arc<dyn Surface>,
    status: Mutex<RevealStatus>,
}

impl SessionGate {
    fn lock(&self) -> MutexGuard<'_, RevealStatus> {
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, next: RevealStatus, commands: impl IntoIterator<Item = RenderCommand>) {
        let mut status = self.lock();
        *status = next;
        for command in commands {
            self.surface.emit(command);
        }
    }

    /// Returns `false` if the session has been replaced.
    fn publish(&self, next: RevealStatus, commands: impl IntoIterator<Item = RenderCommand>) -> bool {
        let mut status = self.lock();
        if status.session_id != next.session_id {
            return false;
        }
        *status = next;
        for command in commands {
            self.surface.emit(command);
        }
        true
    }

    fn retire(&self) {
        *self.lock() = RevealStatus::idle();
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Owns the single live reveal session.
pub struct RevealController {
    gate: Arc<SessionGate>,
    timing: RevealTiming,
    active: Option<JoinHandle<()>>,
}

impl RevealController {
    #[must_use]
    pub fn new(surface: Arc<dyn Surface>, timing: RevealTiming) -> Self {
        let gate = Arc::new(SessionGate { surface, status: Mutex::new(RevealStatus::idle()) });
        Self { gate, timing, active: None }
    }

    /// Begin a fresh reveal over `favorites`, cancelling any session in
    /// flight. Must be called from within a tokio runtime.
    pub fn start(&mut self, favorites: Option<&Favorites>) -> Uuid {
        self.cancel();

        let session = RevealSession::new(flatten_favorites(favorites));
        let session_id = session.id();
        info!(%session_id, total = session.len(), "reveal started");

        self.gate.begin(
            RevealStatus::of(&session),
            [
                RenderCommand::SetRevealButton { label: REVEALING_LABEL.to_string(), enabled: false },
                RenderCommand::Clear { target: ContainerId::Favorites },
                RenderCommand::Hide { target: ContainerId::CompletionMessage },
            ],
        );

        let gate = Arc::clone(&self.gate);
        self.active = Some(tokio::spawn(run_session(session, gate, self.timing)));
        session_id
    }

    /// Stop the current session's timers. Its pending ticks never fire.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.abort();
            let previous = self.gate.lock().session_id;
            self.gate.retire();
            if let Some(session_id) = previous {
                debug!(%session_id, "reveal session cancelled");
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> RevealStatus {
        *self.gate.lock()
    }

    /// Wait until the current session has shown its completion message.
    pub async fn finished(&mut self) {
        if let Some(handle) = self.active.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        if let Some(handle) = self.active.take() {
            handle.abort();
        }
    }
}

async fn run_session(mut session: RevealSession, gate: Arc<SessionGate>, timing: RevealTiming) {
    let session_id = session.id();

    if session.is_running() {
        let period = timing.interval.max(MIN_REVEAL_INTERVAL);
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match session.tick() {
                Tick::Reveal { index, entry } => {
                    debug!(%session_id, index, category = %entry.category, name = %entry.item.name, "favorite revealed");
                    let card = favorite_card(&entry, index);
                    let published = gate.publish(
                        RevealStatus::of(&session),
                        [
                            RenderCommand::AppendFavorite { card },
                            RenderCommand::ScrollIntoView { target: ContainerId::Favorites },
                        ],
                    );
                    if !published {
                        return;
                    }
                }
                Tick::Finished => break,
            }
        }
    }

    let released = gate.publish(
        RevealStatus::of(&session),
        [RenderCommand::SetRevealButton { label: SHOW_AGAIN_LABEL.to_string(), enabled: true }],
    );
    if !released {
        return;
    }
    info!(%session_id, revealed = session.position(), "reveal finished");

    tokio::time::sleep(timing.completion_delay).await;
    gate.publish(
        RevealStatus { completion_shown: true, ..RevealStatus::of(&session) },
        [
            RenderCommand::Show { target: ContainerId::CompletionMessage },
            RenderCommand::ScrollIntoView { target: ContainerId::CompletionMessage },
        ],
    );
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
