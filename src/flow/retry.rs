//! Caller-supplied retry policy for fallible async operations

use std::fmt;
use std::future::Future;

/// Wraps a fallible async operation with a retry policy
pub trait Retry {
    fn retry<T, E, F, Fut>(&self, op: F) -> impl Future<Output = Result<T, E>>
    where
        E: fmt::Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>;
}

/// Runs the operation once
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleAttempt;

impl Retry for SingleAttempt {
    async fn retry<T, E, F, Fut>(&self, mut op: F) -> Result<T, E>
    where
        E: fmt::Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        op().await
    }
}
