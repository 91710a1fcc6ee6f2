//! Expansion configuration.

use crate::diagnostic::DEFAULT_DOMAIN;

/// Expression text used for the standard store when none is configured.
pub const DEFAULT_STANDARD_STORE: &str = "stowage_store::standard()";

/// Configuration shared by every expansion an [`Expander`](crate::Expander) runs.
///
/// # Example
///
/// ```
/// use stowage_engine::ExpansionConfig;
///
/// let config = ExpansionConfig::default()
///     .with_domain("com.example.settings")
///     .with_standard_store("settings::store()");
///
/// assert_eq!(config.domain(), "com.example.settings");
/// assert_eq!(config.standard_store(), "settings::store()");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionConfig {
    /// Domain stamped onto every diagnostic.
    domain: String,
    /// Expression substituted for the standard store when rendering text.
    standard_store: String,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            standard_store: DEFAULT_STANDARD_STORE.to_string(),
        }
    }
}

impl ExpansionConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostic domain.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Sets the standard store expression.
    #[must_use]
    pub fn with_standard_store(mut self, expr: impl Into<String>) -> Self {
        self.standard_store = expr.into();
        self
    }

    /// The diagnostic domain.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The standard store expression.
    pub fn standard_store(&self) -> &str {
        &self.standard_store
    }
}
