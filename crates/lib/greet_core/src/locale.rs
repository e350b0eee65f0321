//! Greeting templates.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Language of the greeting template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// Short tag accepted by [`Locale::from_str`].
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Renders the greeting line for `name`, without a trailing newline.
    ///
    /// `name` is interpolated as-is.
    pub fn render(self, name: &str) -> String {
        match self {
            Locale::En => format!("Hello {name}, nice to meet you."),
            Locale::Zh => format!("你好{name}，很高兴认识你。"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::En),
            "zh" | "zh-cn" | "chinese" => Ok(Locale::Zh),
            _ => Err(Error::UnknownLocale(s.to_string())),
        }
    }
}
