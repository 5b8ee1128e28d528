// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Shared time budget for API calls

use crate::error::CallError;
use std::future::Future;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};

/// A fixed point in time after which pending API calls are abandoned.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Deadline `budget` from now
    pub fn after(budget: Duration) -> Self {
        Self {
            at: Instant::now() + budget,
        }
    }

    /// Deadline at a fixed instant
    pub fn at(at: Instant) -> Self {
        Self { at }
    }

    /// Time left before the deadline, zero once it has passed
    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    /// Drive `call` to completion, or fail with `DeadlineExceeded` once the deadline passes.
    pub async fn run<F, T>(&self, call: F) -> Result<T, CallError>
    where
        F: Future<Output = Result<T, kube::Error>>,
    {
        match timeout_at(self.at, call).await {
            Ok(result) => result.map_err(CallError::from),
            Err(_) => Err(CallError::DeadlineExceeded),
        }
    }
}
