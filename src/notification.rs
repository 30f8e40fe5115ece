//! User-facing notifications

use colored::Colorize;

/// Surfaces errors to the user
pub trait NotificationManager: Send + Sync {
    fn show_error(&self, message: &str);
}

/// Prints notifications to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl NotificationManager for TerminalNotifier {
    fn show_error(&self, message: &str) {
        eprintln!("\n{} {}", "✗".red(), message.red());
    }
}
