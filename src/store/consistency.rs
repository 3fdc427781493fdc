//! Read-after-write visibility polling
//!
//! The store is eventually consistent: a just-written item may not be
//! visible to an immediate read. When a caller opts in, writes block in
//! a bounded fixed-interval poll until the item shows up or the ceiling
//! is reached. Hitting the ceiling is an error, not a silent success.

use std::time::{Duration, Instant};

use crate::error::{Result, SableError};

/// Poll interval and ceiling for a visibility wait
#[derive(Debug, Clone, Copy)]
pub struct WaitPolicy {
    /// Delay between visibility probes
    pub interval: Duration,

    /// Max total time to keep probing
    pub ceiling: Duration,
}

impl WaitPolicy {
    pub fn new(interval: Duration, ceiling: Duration) -> Self {
        Self { interval, ceiling }
    }
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            ceiling: Duration::from_secs(10),
        }
    }
}

/// Block until `probe` reports the write visible
///
/// `probe` returns `Ok(true)` once the item can be read back. Probe
/// errors propagate immediately; exhausting the ceiling fails with
/// `ConsistencyTimeout`.
pub fn wait_for_visibility<F>(policy: WaitPolicy, mut probe: F) -> Result<()>
where
    F: FnMut() -> Result<bool>,
{
    let started = Instant::now();

    loop {
        if probe()? {
            return Ok(());
        }
        if started.elapsed() >= policy.ceiling {
            return Err(SableError::ConsistencyTimeout {
                waited_ms: started.elapsed().as_millis() as u64,
            });
        }
        std::thread::sleep(policy.interval);
    }
}
