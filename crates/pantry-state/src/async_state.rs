//! Request lifecycle tracking for one-shot asynchronous operations.
//!
//! ```text
//! idle ──execute──▶ loading ──ok──▶ success
//!                      │
//!                      └──err──▶ failure
//!
//! success | failure ──execute──▶ loading   (error cleared, data kept)
//! ```
//!
//! A failure never clears previously loaded data. Nothing is retried: the
//! caller re-invokes `execute` explicitly.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

/// Coarse phase derived from an [`AsyncState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AsyncPhase {
    Idle,
    Loading,
    Success,
    Failure,
}

impl AsyncPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for AsyncPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{data, error, loading}` for one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsyncState<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub loading: bool,
}

impl<T> Default for AsyncState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
        }
    }
}

impl<T> AsyncState<T> {
    /// Enter `loading`: error cleared, data kept.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Resolve with a value.
    pub fn succeed(&mut self, data: T) {
        self.data = Some(data);
        self.error = None;
        self.loading = false;
    }

    /// Resolve with a failure message. Prior data survives.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    #[must_use]
    pub const fn phase(&self) -> AsyncPhase {
        if self.loading {
            AsyncPhase::Loading
        } else if self.error.is_some() {
            AsyncPhase::Failure
        } else if self.data.is_some() {
            AsyncPhase::Success
        } else {
            AsyncPhase::Idle
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Shared handle around an [`AsyncState`].
///
/// Clones observe and drive the same state. `execute` takes `&self`, so a
/// second invocation may start while the first is still in flight; each
/// writes its own outcome when it resolves and the last one to resolve wins.
/// The lock is only held for the synchronous transition, never across an
/// `.await`.
pub struct AsyncTask<T> {
    state: Arc<Mutex<AsyncState<T>>>,
}

impl<T> Clone for AsyncTask<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> Default for AsyncTask<T> {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(AsyncState::default())),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for AsyncTask<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AsyncTask").field(&*self.state.lock()).finish()
    }
}

impl<T: Clone> AsyncTask<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> AsyncState<T> {
        self.state.lock().clone()
    }

    #[must_use]
    pub fn phase(&self) -> AsyncPhase {
        self.state.lock().phase()
    }

    /// Run `operation`, recording its outcome.
    ///
    /// Failures are captured as the error message (the error's `Display`) and
    /// never returned. The returned snapshot is the state right after this
    /// invocation resolved.
    pub async fn execute<F, Fut, E>(&self, operation: F) -> AsyncState<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        self.state.lock().begin();

        let outcome = operation().await;

        let mut state = self.state.lock();
        match outcome {
            Ok(data) => {
                tracing::debug!("async operation succeeded");
                state.succeed(data);
            }
            Err(error) => {
                let message = error.to_string();
                tracing::warn!(error = %message, "async operation failed");
                state.fail(message);
            }
        }
        state.clone()
    }
}
