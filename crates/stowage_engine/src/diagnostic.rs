//! Structured diagnostics produced when an expansion fails.
//!
//! A [`Diagnostic`] is terminal for the property it was raised against: the
//! expansion emits no accessor for that property and the [`Reporter`] keeps
//! the record so the driver can surface it. Sibling properties are expanded
//! independently and never see each other's diagnostics.

use serde::Serialize;

/// Domain attached to diagnostics unless overridden through
/// [`ExpansionConfig::with_domain`](crate::ExpansionConfig::with_domain).
pub const DEFAULT_DOMAIN: &str = "com.stowage.macros";

/// The failure class of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The argument list or the declaration is missing required structure.
    SyntaxParseError,
    /// The default value does not map to one of the supported types.
    UnsupportedType,
}

impl DiagnosticKind {
    /// Stable identifier used as the diagnostic id suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SyntaxParseError => "syntax_parse_error",
            Self::UnsupportedType => "unsupported_type",
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::SyntaxParseError => "can't parse this syntax",
            Self::UnsupportedType => {
                "unsupported type, supported types are: String, Int, Bool, Float"
            }
        }
    }
}

/// Severity of a diagnostic. Every failure is an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The expansion for the property failed.
    #[default]
    Error,
}

/// A structured expansion failure.
///
/// # Example
///
/// ```
/// use stowage_engine::{Diagnostic, DiagnosticKind};
///
/// let diagnostic = Diagnostic::unsupported_type("[1, 2]");
/// assert_eq!(diagnostic.kind(), DiagnosticKind::UnsupportedType);
/// assert_eq!(diagnostic.extra(), Some("[1, 2]"));
/// assert_eq!(diagnostic.id(), "com.stowage.macros.unsupported_type");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}{}", context_suffix(.extra))]
pub struct Diagnostic {
    kind: DiagnosticKind,
    severity: Severity,
    domain: String,
    id: String,
    message: String,
    extra: Option<String>,
}

fn context_suffix(extra: &Option<String>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!(" ({extra})"),
        _ => String::new(),
    }
}

impl Diagnostic {
    /// Creates a diagnostic of the given kind in the default domain.
    pub fn new(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            domain: DEFAULT_DOMAIN.to_string(),
            id: format!("{DEFAULT_DOMAIN}.{}", kind.as_str()),
            message: kind.message().to_string(),
            extra: None,
        }
    }

    /// Creates a [`DiagnosticKind::SyntaxParseError`] with context.
    pub fn syntax_parse(extra: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::SyntaxParseError).with_extra(extra)
    }

    /// Creates a [`DiagnosticKind::UnsupportedType`] naming the offending expression.
    pub fn unsupported_type(extra: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::UnsupportedType).with_extra(extra)
    }

    /// Attaches free-text context identifying the offending input.
    #[must_use]
    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    /// Moves the diagnostic into another domain, updating its id.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self.id = format!("{}.{}", self.domain, self.kind.as_str());
        self
    }

    /// The failure class.
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// Always [`Severity::Error`].
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The reporting domain, e.g. `com.stowage.macros`.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// `<domain>.<kind>`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The fixed message for this kind.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Optional context, usually the textual form of the offending expression.
    pub fn extra(&self) -> Option<&str> {
        self.extra.as_deref()
    }
}

/// A diagnostic recorded against the site (property name) that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedDiagnostic {
    /// The property whose expansion failed.
    pub site: String,
    /// The failure.
    pub diagnostic: Diagnostic,
}

/// Collects diagnostics for one expansion run.
///
/// Reporting never aborts the run; the caller decides how to surface the
/// collected records once every property has been expanded.
#[derive(Debug, Default)]
pub struct Reporter {
    reported: Vec<ReportedDiagnostic>,
}

impl Reporter {
    /// Creates an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `diagnostic` against `site`.
    pub fn report(&mut self, site: impl Into<String>, diagnostic: Diagnostic) {
        let site = site.into();
        tracing::warn!(
            site = %site,
            id = diagnostic.id(),
            "expansion failed: {diagnostic}"
        );
        self.reported.push(ReportedDiagnostic { site, diagnostic });
    }

    /// All recorded diagnostics in reporting order.
    pub fn diagnostics(&self) -> &[ReportedDiagnostic] {
        &self.reported
    }

    /// Diagnostics recorded against `site`.
    pub fn for_site<'a>(&'a self, site: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.reported
            .iter()
            .filter(move |reported| reported.site == site)
            .map(|reported| &reported.diagnostic)
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.reported.len()
    }

    /// Returns `true` if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }

    /// Consumes the reporter, returning the recorded diagnostics.
    pub fn into_diagnostics(self) -> Vec<ReportedDiagnostic> {
        self.reported
    }
}
