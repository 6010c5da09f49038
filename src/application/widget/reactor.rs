// src/application/widget/reactor.rs
use std::fmt;
use std::mem;
use tokio::task::{AbortHandle, JoinHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactorPhase {
    Idle,
    Pending,
    Detached,
}

impl fmt::Display for ReactorPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Detached => "detached",
        })
    }
}

#[derive(Debug)]
struct PendingTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

#[derive(Debug, Default)]
enum ReactorState {
    #[default]
    Idle,
    Pending(PendingTimer),
    Detached,
}

/// Debounce state machine for title-driven slug updates.
///
/// Owns the single armed timer task. Arming always aborts the previous
/// timer, so at most one is outstanding. Once a timer fires its task is
/// tracked as the in-flight commit until detach.
#[derive(Debug, Default)]
pub struct Reactor {
    state: ReactorState,
    next_generation: u64,
    in_flight: Option<AbortHandle>,
}

impl Reactor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ReactorPhase {
        match self.state {
            ReactorState::Idle => ReactorPhase::Idle,
            ReactorState::Pending(_) => ReactorPhase::Pending,
            ReactorState::Detached => ReactorPhase::Detached,
        }
    }

    pub fn is_detached(&self) -> bool {
        matches!(self.state, ReactorState::Detached)
    }

    /// Replace any pending timer with one produced by `spawn`, which receives
    /// the generation the timer must present on fire.
    ///
    /// Returns false without calling `spawn` once detached.
    pub fn arm<F>(&mut self, spawn: F) -> bool
    where
        F: FnOnce(u64) -> JoinHandle<()>,
    {
        match mem::take(&mut self.state) {
            ReactorState::Detached => {
                self.state = ReactorState::Detached;
                return false;
            }
            ReactorState::Pending(previous) => {
                tracing::debug!(generation = previous.generation, "debounce timer superseded");
                previous.handle.abort();
            }
            ReactorState::Idle => {}
        }

        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        let handle = spawn(generation);
        self.state = ReactorState::Pending(PendingTimer { generation, handle });
        true
    }

    /// Transition `Pending -> Idle` for the timer identified by `generation`.
    ///
    /// Returns false if that timer is no longer the armed one, in which case
    /// the caller must not commit anything.
    pub fn fire(&mut self, generation: u64) -> bool {
        match mem::take(&mut self.state) {
            ReactorState::Pending(timer) if timer.generation == generation => {
                self.in_flight = Some(timer.handle.abort_handle());
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Abort the pending timer and any in-flight commit. Returns false if
    /// already detached.
    pub fn detach(&mut self) -> bool {
        let previous = mem::replace(&mut self.state, ReactorState::Detached);
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abort();
        }
        match previous {
            ReactorState::Detached => false,
            ReactorState::Pending(timer) => {
                timer.handle.abort();
                true
            }
            ReactorState::Idle => true,
        }
    }
}
