use console::style;
use std::fmt::Display;

/// Centralized output formatting utilities for consistent CLI presentation
pub struct Output;

impl Output {
    /// Echo a command before it runs
    pub fn command<T: Display>(prefix: &str, command: T) {
        println!("{}{}", style(prefix).dim(), command);
    }

    /// Print a plain informational line
    pub fn info<T: Display>(message: T) {
        println!("{message}");
    }
}
