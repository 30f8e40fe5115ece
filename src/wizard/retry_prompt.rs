//! Retry policy that asks the user before trying again

use crate::flow::Retry;
use crate::wizard::render::wizard_render_config;
use colored::Colorize;
use inquire::Confirm;
use std::fmt;
use std::future::Future;

/// Re-runs a failed operation for as long as the user confirms
#[derive(Debug, Clone)]
pub struct PromptRetry {
    message: String,
    interactive: bool,
}

impl PromptRetry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            interactive: true,
        }
    }

    /// Never prompt; the first failure is returned
    pub fn non_interactive() -> Self {
        Self {
            message: String::new(),
            interactive: false,
        }
    }

    async fn confirm(&self) -> bool {
        let message = self.message.clone();
        let answer = tokio::task::spawn_blocking(move || {
            Confirm::new(&message)
                .with_default(true)
                .with_render_config(wizard_render_config())
                .prompt()
        })
        .await;
        matches!(answer, Ok(Ok(true)))
    }
}

impl Retry for PromptRetry {
    async fn retry<T, E, F, Fut>(&self, mut op: F) -> Result<T, E>
    where
        E: fmt::Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::warn!("Attempt {} failed: {}", attempt, e);
                    if !self.interactive {
                        return Err(e);
                    }
                    eprintln!("{} {}", "⚠".yellow(), e);
                    if !self.confirm().await {
                        return Err(e);
                    }
                    attempt += 1;
                }
            }
        }
    }
}
