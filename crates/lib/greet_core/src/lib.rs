//! # greet_core
//!
//! Formats greetings and writes them to standard output.

pub mod error;
pub mod greeter;
pub mod locale;

pub use error::{Error, Result};
pub use greeter::{GreetingRequest, format_greeting, greet, greet_in, write_greeting};
pub use locale::Locale;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
