//! Cooperative cancellation
//!
//! A [`CancelToken`] is checked by the player between frames and wakes any
//! thread currently waiting on it, so a long animation can be abandoned
//! without killing the process.

use std::{
    sync::{Arc, Condvar, Mutex, PoisonError},
    time::{Duration, Instant},
};

#[derive(Debug, Default)]
struct State {
    cancelled: Mutex<bool>,
    wakeup: Condvar,
}

/// Shared cancellation flag
///
/// Clones refer to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    state: Arc<State>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation and wake all waiters
    pub fn cancel(&self) {
        let mut cancelled = self
            .state
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *cancelled = true;
        self.state.wakeup.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self
            .state
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Clear the flag so the token can drive another animation
    pub fn reset(&self) {
        *self
            .state
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = false;
    }

    /// Block for `timeout` or until cancelled
    ///
    /// Returns `true` if the wait ended because of cancellation.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now().checked_add(timeout);
        let mut cancelled = self
            .state
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        while !*cancelled {
            cancelled = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return false;
                    }
                    self.state
                        .wakeup
                        .wait_timeout(cancelled, deadline - now)
                        .unwrap_or_else(PoisonError::into_inner)
                        .0
                }
                // Too far in the future to represent, wait for cancellation only
                None => self
                    .state
                    .wakeup
                    .wait(cancelled)
                    .unwrap_or_else(PoisonError::into_inner),
            };
        }
        true
    }
}
