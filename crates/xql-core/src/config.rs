//! Renderer configuration.

/// Formatting characters used by a [`Renderer`](crate::Renderer).
///
/// The configuration is fixed when a renderer is created. Changing it
/// changes every separator, space or quote in the output uniformly but never
/// which elements are emitted or in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    /// Written between tokens.
    pub whitespace: char,
    /// Written between list items.
    pub separator: char,
    /// Wraps identifiers that must be quoted.
    pub quote: char,
}

impl RenderConfig {
    /// The default configuration: space, comma and backtick.
    pub const DEFAULT: Self = Self::new(' ', ',', '`');

    /// Creates a configuration.
    #[must_use]
    pub const fn new(whitespace: char, separator: char, quote: char) -> Self {
        Self {
            whitespace,
            separator,
            quote,
        }
    }

    /// Sets the whitespace character.
    #[must_use]
    pub const fn with_whitespace(mut self, whitespace: char) -> Self {
        self.whitespace = whitespace;
        self
    }

    /// Sets the list separator character.
    #[must_use]
    pub const fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the identifier quote character.
    #[must_use]
    pub const fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
