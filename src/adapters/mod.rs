//! Terminal-side adapters for the user feedback ports.

mod console;

pub use console::{ConsoleBadge, ConsoleNotifier};
