//! CLI configuration.

use greet_core::Locale;

use crate::Result;

/// Configuration for the `greet` binary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GreetConfig {
    /// Greeting language used when `--lang` is absent.
    pub locale: Locale,
}

impl GreetConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable     | Default |
    /// |--------------|---------|
    /// | `GREET_LANG` | `en`    |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let locale = match lookup("GREET_LANG") {
            Some(tag) if !tag.trim().is_empty() => tag.parse()?,
            _ => Locale::default(),
        };
        Ok(Self { locale })
    }

    /// Picks the locale for this run: the `--lang` flag wins over the environment.
    pub fn resolve_locale(&self, flag: Option<&str>) -> Result<Locale> {
        match flag {
            Some(tag) => Ok(tag.parse()?),
            None => Ok(self.locale),
        }
    }
}
