//! Controllable `UserDirectory` implementations.
//!
//! `ScriptedDirectory` releases its responses only when the test says so,
//! which makes overlapping-request scenarios deterministic regardless of
//! thread scheduling.

use opsdeck_providers::{Error, Result, UserDirectory};
use opsdeck_types::{QueryParams, UserPage};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::mpsc::{Receiver, Sender, channel};

#[derive(Debug)]
struct Scripted {
    gate: Receiver<()>,
    result: Result<UserPage>,
}

/// A directory whose responses are staged per search text and released by
/// hand.
#[derive(Default, Debug)]
pub struct ScriptedDirectory {
    responses: Mutex<HashMap<String, Scripted>>,
}

impl ScriptedDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage the response for queries whose search text equals `key`.
    ///
    /// The matching query blocks until the returned handle is released;
    /// dropping the handle releases it too.
    pub fn stage(&self, key: &str, result: Result<UserPage>) -> Release {
        let (tx, rx) = channel();
        self.responses
            .lock()
            .unwrap()
            .insert(key.to_string(), Scripted { gate: rx, result });
        Release { gate: tx }
    }
}

impl UserDirectory for ScriptedDirectory {
    fn name(&self) -> &str {
        "scripted"
    }

    fn query(&self, params: &QueryParams) -> Result<UserPage> {
        let scripted = self.responses.lock().unwrap().remove(&params.search);
        match scripted {
            Some(scripted) => {
                // Released or dropped, either way the response may proceed.
                let _ = scripted.gate.recv();
                scripted.result
            }
            None => Err(Error::Unavailable(format!(
                "no scripted response for search {:?}",
                params.search
            ))),
        }
    }
}

/// Lets one staged response proceed.
pub struct Release {
    gate: Sender<()>,
}

impl Release {
    pub fn release(self) {
        let _ = self.gate.send(());
    }
}

/// A directory that always fails, for exercising the error path.
#[derive(Debug)]
pub struct FailingDirectory {
    message: String,
}

impl FailingDirectory {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl UserDirectory for FailingDirectory {
    fn name(&self) -> &str {
        "failing"
    }

    fn query(&self, _params: &QueryParams) -> Result<UserPage> {
        Err(Error::Unavailable(self.message.clone()))
    }
}
