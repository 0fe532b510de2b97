//! Test support utilities shared across unit and integration tests.

use std::collections::{BTreeSet, VecDeque};
use std::env;
use std::ffi::OsString;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use serde_json::Value;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard};

use crate::transport::{Transport, TransportCall, TransportFuture};

/// Provider-style failure returned by [`RecordingTransport`].
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{code}: {message}")]
pub struct ScriptedTransportError {
    /// Provider error code, for example `InvalidInstanceID.NotFound`.
    pub code: String,
    /// Provider message.
    pub message: String,
}

/// Transport double that records every call and replays scripted responses
/// in FIFO order.
#[derive(Clone, Debug, Default)]
pub struct RecordingTransport {
    responses: Arc<StdMutex<VecDeque<Result<Value, ScriptedTransportError>>>>,
    calls: Arc<StdMutex<Vec<TransportCall>>>,
}

impl RecordingTransport {
    /// Creates a transport with no queued responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn push_response(&self, response: Value) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Ok(response));
    }

    /// Queues a provider failure.
    pub fn push_failure(&self, code: impl Into<String>, message: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Err(ScriptedTransportError {
                code: code.into(),
                message: message.into(),
            }));
    }

    /// Returns a snapshot of all calls recorded so far.
    #[must_use]
    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns whether the transport has been invoked at all.
    #[must_use]
    pub fn was_called(&self) -> bool {
        !self
            .calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Transport for RecordingTransport {
    type Error = ScriptedTransportError;

    fn execute(&self, call: TransportCall) -> TransportFuture<'_, Value, Self::Error> {
        let operation = call.operation;
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
        let next = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        Box::pin(async move {
            next.unwrap_or_else(|| {
                Err(ScriptedTransportError {
                    code: String::from("NoScriptedResponse"),
                    message: format!("no scripted response available for {operation}"),
                })
            })
        })
    }
}

/// Global mutex used to serialise environment mutation in tests.
pub static ENV_LOCK: Mutex<()> = Mutex::const_new(());

/// Guard that holds the env mutex and restores variables on drop.
pub struct EnvGuard {
    previous: Vec<(String, Option<OsString>)>,
    _guard: MutexGuard<'static, ()>,
}

impl EnvGuard {
    /// Sets multiple environment variables while holding a global mutex.
    /// Variables listed in `unset` are removed for the guard's lifetime.
    pub async fn set_vars(pairs: &[(&str, &str)], unset: &[&str]) -> Self {
        debug_assert!(
            {
                let mut seen = BTreeSet::new();
                pairs
                    .iter()
                    .map(|(key, _)| key)
                    .chain(unset)
                    .all(|key| seen.insert(*key))
            },
            "duplicate environment variable keys passed to EnvGuard::set_vars"
        );

        let guard = ENV_LOCK.lock().await;
        let mut previous = Vec::with_capacity(pairs.len() + unset.len());
        for (key, value) in pairs {
            previous.push(((*key).to_owned(), env::var_os(key)));
            // SAFETY: Environment mutation is serialised by `ENV_LOCK`, preventing races.
            unsafe { env::set_var(key, value) };
        }
        for key in unset {
            previous.push(((*key).to_owned(), env::var_os(key)));
            // SAFETY: Environment mutation is serialised by `ENV_LOCK`, preventing races.
            unsafe { env::remove_var(key) };
        }

        Self {
            previous,
            _guard: guard,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, old) in &self.previous {
            // SAFETY: Environment mutation is serialised by holding `_guard`.
            unsafe {
                match old {
                    Some(val) => env::set_var(key, val),
                    None => env::remove_var(key),
                }
            }
        }
    }
}
