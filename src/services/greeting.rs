//! Greeting helper.

use crate::text::char_length;

/// Greet `name` and return its length in characters (0 for an empty name).
pub fn greet(name: &str) -> usize {
    if name.is_empty() {
        tracing::info!("Hello, stranger!");
        return 0;
    }

    tracing::info!(name = %name, "Hello from Rust");
    char_length(name)
}
