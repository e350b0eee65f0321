//! The greeter: renders a greeting line and writes it to a sink.
//!
//! Every call renders the whole line, newline included, into one buffer and
//! hands it to the sink in a single `write_all`. On stdout this happens under
//! the stdout lock, so lines from concurrent callers never interleave.

use std::io::{self, Write};

use log::debug;

use crate::{Locale, Result};

/// A single greeting, alive for the duration of one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingRequest {
    pub name: String,
}

impl GreetingRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The greeting line for this request, without a trailing newline.
    pub fn render(&self, locale: Locale) -> String {
        locale.render(&self.name)
    }
}

/// Formats the default (English) greeting for `name`.
pub fn format_greeting(name: &str) -> String {
    Locale::default().render(name)
}

/// Writes the default greeting for `name` to standard output.
///
/// # Errors
///
/// Returns [`crate::Error::Output`] if standard output cannot be written,
/// e.g. the reading end of a pipe was closed.
pub fn greet(name: &str) -> Result<()> {
    greet_in(Locale::default(), name)
}

/// Like [`greet`], with an explicit template language.
pub fn greet_in(locale: Locale, name: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_greeting(&mut out, locale, name)
}

/// Writes one greeting line for `name` to `writer` and flushes it.
pub fn write_greeting<W: Write + ?Sized>(writer: &mut W, locale: Locale, name: &str) -> Result<()> {
    let request = GreetingRequest::new(name);
    let mut line = request.render(locale);
    line.push('\n');

    writer.write_all(line.as_bytes())?;
    writer.flush()?;

    debug!("greeted {} byte name in {locale}", request.name.len());
    Ok(())
}
