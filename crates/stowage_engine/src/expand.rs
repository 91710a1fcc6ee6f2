//! The expansion pipeline.
//!
//! ```text
//! PropertyDecl ──parse──▶ PropertySpec ──classify──▶ ResolvedType ─┐
//!                              ├──resolve_key──▶ key ──────────────┼─▶ synthesize ─▶ AccessorDescription
//!                              └──resolve_store──▶ StoreRef ───────┘
//! ```
//!
//! Any failing stage short-circuits into a single [`Diagnostic`]. Properties
//! are expanded independently: [`Expander::expand_all`] keeps going after a
//! failure and only the failing property ends up without an accessor.

use crate::config::ExpansionConfig;
use crate::diagnostic::{Diagnostic, ReportedDiagnostic, Reporter};
use crate::literal::{DefaultValue, LiteralExpr, classify};
use crate::resolve::{resolve_key, resolve_store};
use crate::synthesize::{AccessorDescription, synthesize};

/// Label of the required default value argument.
pub const DEFAULT_VALUE_LABEL: &str = "default_value";
/// Label of the optional key argument.
pub const KEY_LABEL: &str = "key";
/// Label of the optional store argument.
pub const STORE_LABEL: &str = "store";

/// Accepted spelling of [`DEFAULT_VALUE_LABEL`] for camel-case hosts.
const DEFAULT_VALUE_ALIAS: &str = "defaultValue";

/// One entry of a normalized argument list: `label = expression` or a bare
/// expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    label: Option<String>,
    literal: LiteralExpr,
    source: String,
}

impl Argument {
    /// Creates an argument from its parts.
    pub fn new(label: Option<String>, literal: LiteralExpr, source: impl Into<String>) -> Self {
        Self {
            label,
            literal,
            source: source.into(),
        }
    }

    /// Creates a labeled argument whose source is the literal's canonical text.
    pub fn labeled(label: impl Into<String>, literal: LiteralExpr) -> Self {
        let source = literal.to_source();
        Self::new(Some(label.into()), literal, source)
    }

    /// Creates an unlabeled argument.
    pub fn unlabeled(literal: LiteralExpr) -> Self {
        let source = literal.to_source();
        Self::new(None, literal, source)
    }

    /// Replaces the source text.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// The label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The classified expression.
    pub fn literal(&self) -> &LiteralExpr {
        &self.literal
    }

    /// The expression's source text.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// A property declaration as handed over by the host: its name and the
/// argument list of its annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDecl {
    name: String,
    arguments: Option<Vec<Argument>>,
}

impl PropertyDecl {
    /// Creates a declaration with an argument list.
    pub fn new(name: impl Into<String>, arguments: Vec<Argument>) -> Self {
        Self {
            name: name.into(),
            arguments: Some(arguments),
        }
    }

    /// Creates a declaration whose annotation has no argument list at all.
    pub fn without_arguments(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: None,
        }
    }

    /// The declared property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The argument list, or `None` when the annotation had none.
    pub fn arguments(&self) -> Option<&[Argument]> {
        self.arguments.as_deref()
    }
}

/// A validated property declaration, ready for classification.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
    name: String,
    default: DefaultValue,
    key: Option<String>,
    store: Option<String>,
}

impl PropertySpec {
    /// Creates a spec with no explicit key or store.
    pub fn new(name: impl Into<String>, default: impl Into<DefaultValue>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            key: None,
            store: None,
        }
    }

    /// Sets the explicit key expression.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the explicit store expression.
    #[must_use]
    pub fn with_store(mut self, store: impl Into<String>) -> Self {
        self.store = Some(store.into());
        self
    }

    /// Validates a declaration's argument list.
    ///
    /// Fails with a [`SyntaxParseError`](crate::DiagnosticKind::SyntaxParseError)
    /// when the argument list is missing, the property has no name, an
    /// argument is unlabeled, a label is unknown or repeated, or there is no
    /// `default_value` argument.
    pub fn parse(decl: &PropertyDecl) -> Result<Self, Diagnostic> {
        let arguments = decl
            .arguments()
            .ok_or_else(|| Diagnostic::syntax_parse("missing argument list"))?;

        let name = decl.name().trim();
        if name.is_empty() {
            return Err(Diagnostic::syntax_parse("property has no identifier"));
        }

        let mut default = None;
        let mut key = None;
        let mut store = None;

        for argument in arguments {
            let Some(label) = argument.label() else {
                return Err(Diagnostic::syntax_parse(format!(
                    "unlabeled argument `{}`",
                    argument.source()
                )));
            };

            let (slot, canonical) = match label {
                DEFAULT_VALUE_LABEL | DEFAULT_VALUE_ALIAS => {
                    if default.is_some() {
                        return Err(duplicate(DEFAULT_VALUE_LABEL));
                    }
                    default = Some(DefaultValue::new(
                        argument.literal().clone(),
                        argument.source(),
                    ));
                    continue;
                }
                KEY_LABEL => (&mut key, KEY_LABEL),
                STORE_LABEL => (&mut store, STORE_LABEL),
                other => {
                    return Err(Diagnostic::syntax_parse(format!(
                        "unknown argument `{other}`"
                    )));
                }
            };

            if slot.is_some() {
                return Err(duplicate(canonical));
            }
            *slot = Some(argument.source().to_string());
        }

        let default = default.ok_or_else(|| {
            Diagnostic::syntax_parse(format!("missing `{DEFAULT_VALUE_LABEL}` argument"))
        })?;

        Ok(Self {
            name: name.to_string(),
            default,
            key,
            store,
        })
    }

    /// The property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default value.
    pub fn default_value(&self) -> &DefaultValue {
        &self.default
    }

    /// The explicit key expression, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The explicit store expression, if any.
    pub fn store(&self) -> Option<&str> {
        self.store.as_deref()
    }
}

fn duplicate(label: &str) -> Diagnostic {
    Diagnostic::syntax_parse(format!("duplicate `{label}` argument"))
}

/// The outcome for one property of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedProperty {
    /// The declared property name.
    pub name: String,
    /// The accessor, or `None` if expansion failed.
    pub accessor: Option<AccessorDescription>,
}

/// The outcome of [`Expander::expand_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// One entry per input declaration, in input order.
    pub properties: Vec<ExpandedProperty>,
    /// Diagnostics for the properties that failed.
    pub diagnostics: Vec<ReportedDiagnostic>,
}

impl Expansion {
    /// The accessor generated for `name`, if its expansion succeeded.
    pub fn accessor(&self, name: &str) -> Option<&AccessorDescription> {
        self.properties
            .iter()
            .find(|property| property.name == name)
            .and_then(|property| property.accessor.as_ref())
    }

    /// Returns `true` if no property failed.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Runs the expansion pipeline.
///
/// Holds only immutable configuration; a single expander may be shared
/// across threads.
///
/// # Example
///
/// ```
/// use stowage_engine::{Argument, Expander, LiteralExpr, PropertyDecl, ResolvedType};
///
/// let decl = PropertyDecl::new(
///     "enableNotification",
///     vec![Argument::labeled("default_value", LiteralExpr::Bool(false))],
/// );
///
/// let accessor = Expander::default().expand(&decl)?;
/// assert_eq!(accessor.value_type(), ResolvedType::Bool);
/// assert_eq!(accessor.get().key(), "\"enableNotification\"");
/// # Ok::<(), stowage_engine::Diagnostic>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Expander {
    config: ExpansionConfig,
}

impl Expander {
    /// Creates an expander with the given configuration.
    pub fn new(config: ExpansionConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    /// Parses and expands one declaration.
    pub fn expand(&self, decl: &PropertyDecl) -> Result<AccessorDescription, Diagnostic> {
        let spec = PropertySpec::parse(decl).map_err(|err| self.stamp(err))?;
        self.expand_spec(&spec)
    }

    /// Expands an already validated spec.
    pub fn expand_spec(&self, spec: &PropertySpec) -> Result<AccessorDescription, Diagnostic> {
        let value_type = classify(spec.default_value()).map_err(|err| self.stamp(err))?;
        let key = resolve_key(spec.key(), spec.name());
        let store = resolve_store(spec.store());

        tracing::debug!(
            property = spec.name(),
            value_type = %value_type,
            key = %key,
            store = %store,
            "resolved property"
        );

        synthesize(value_type, store, key, spec.default_value()).map_err(|err| self.stamp(err))
    }

    /// Expands one declaration, reporting a failure instead of returning it.
    ///
    /// Returns `None` after recording exactly one diagnostic when the
    /// expansion fails.
    pub fn expand_into(
        &self,
        decl: &PropertyDecl,
        reporter: &mut Reporter,
    ) -> Option<AccessorDescription> {
        match self.expand(decl) {
            Ok(accessor) => Some(accessor),
            Err(diagnostic) => {
                reporter.report(decl.name(), diagnostic);
                None
            }
        }
    }

    /// Expands every declaration independently.
    pub fn expand_all(&self, decls: &[PropertyDecl]) -> Expansion {
        let _span = tracing::debug_span!("expand_all", properties = decls.len()).entered();

        let mut reporter = Reporter::new();
        let properties = decls
            .iter()
            .map(|decl| ExpandedProperty {
                name: decl.name().to_string(),
                accessor: self.expand_into(decl, &mut reporter),
            })
            .collect();

        let expansion = Expansion {
            properties,
            diagnostics: reporter.into_diagnostics(),
        };
        tracing::debug!(
            failed = expansion.diagnostics.len(),
            "expansion finished"
        );
        expansion
    }

    fn stamp(&self, diagnostic: Diagnostic) -> Diagnostic {
        if diagnostic.domain() == self.config.domain() {
            diagnostic
        } else {
            diagnostic.with_domain(self.config.domain())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DiagnosticKind;

    fn default_arg(literal: LiteralExpr) -> Argument {
        Argument::labeled(DEFAULT_VALUE_LABEL, literal)
    }

    #[test]
    fn parse_collects_labels() {
        let decl = PropertyDecl::new(
            "userId",
            vec![
                default_arg(LiteralExpr::Str(String::new())),
                Argument::labeled(KEY_LABEL, LiteralExpr::Str("user_id".into())),
                Argument::labeled(STORE_LABEL, LiteralExpr::Unsupported("custom()".into())),
            ],
        );

        let spec = PropertySpec::parse(&decl).unwrap();
        assert_eq!(spec.name(), "userId");
        assert_eq!(spec.default_value().source(), "\"\"");
        assert_eq!(spec.key(), Some("\"user_id\""));
        assert_eq!(spec.store(), Some("custom()"));
    }

    #[test]
    fn camel_case_default_label_is_accepted() {
        let decl = PropertyDecl::new(
            "count",
            vec![Argument::labeled("defaultValue", LiteralExpr::Int(3))],
        );
        assert!(PropertySpec::parse(&decl).is_ok());
    }

    #[test]
    fn missing_argument_list() {
        let err = PropertySpec::parse(&PropertyDecl::without_arguments("count")).unwrap_err();
        assert_eq!(err.kind(), DiagnosticKind::SyntaxParseError);
        assert_eq!(err.extra(), Some("missing argument list"));
    }

    #[test]
    fn missing_default_value() {
        let decl = PropertyDecl::new(
            "count",
            vec![Argument::labeled(KEY_LABEL, LiteralExpr::Str("c".into()))],
        );
        let err = PropertySpec::parse(&decl).unwrap_err();
        assert_eq!(err.extra(), Some("missing `default_value` argument"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let decl = PropertyDecl::new(" ", vec![default_arg(LiteralExpr::Int(0))]);
        let err = PropertySpec::parse(&decl).unwrap_err();
        assert_eq!(err.extra(), Some("property has no identifier"));
    }

    #[test]
    fn unlabeled_and_unknown_arguments_are_rejected() {
        let unlabeled = PropertyDecl::new("count", vec![Argument::unlabeled(LiteralExpr::Int(0))]);
        assert_eq!(
            PropertySpec::parse(&unlabeled).unwrap_err().extra(),
            Some("unlabeled argument `0`")
        );

        let unknown = PropertyDecl::new(
            "count",
            vec![
                default_arg(LiteralExpr::Int(0)),
                Argument::labeled("suite", LiteralExpr::Str("x".into())),
            ],
        );
        assert_eq!(
            PropertySpec::parse(&unknown).unwrap_err().extra(),
            Some("unknown argument `suite`")
        );
    }

    #[test]
    fn duplicate_labels_are_rejected() {
        let decl = PropertyDecl::new(
            "count",
            vec![
                default_arg(LiteralExpr::Int(0)),
                Argument::labeled(KEY_LABEL, LiteralExpr::Str("a".into())),
                Argument::labeled(KEY_LABEL, LiteralExpr::Str("b".into())),
            ],
        );
        assert_eq!(
            PropertySpec::parse(&decl).unwrap_err().extra(),
            Some("duplicate `key` argument")
        );
    }

    #[test]
    fn configured_domain_is_stamped() {
        let expander = Expander::new(ExpansionConfig::new().with_domain("com.example.macros"));
        let decl = PropertyDecl::new(
            "tags",
            vec![default_arg(LiteralExpr::Unsupported("vec![]".into()))],
        );

        let err = expander.expand(&decl).unwrap_err();
        assert_eq!(err.domain(), "com.example.macros");
        assert_eq!(err.id(), "com.example.macros.unsupported_type");
    }

    #[test]
    fn expand_into_reports_once() {
        let mut reporter = Reporter::new();
        let decl = PropertyDecl::without_arguments("broken");

        assert!(Expander::default().expand_into(&decl, &mut reporter).is_none());
        assert_eq!(reporter.len(), 1);
        assert_eq!(reporter.diagnostics()[0].site, "broken");
    }

    #[test]
    fn spec_builder_matches_parsed_spec() {
        let built = PropertySpec::new("count", LiteralExpr::Int(0)).with_key("\"c\"");
        let parsed = PropertySpec::parse(&PropertyDecl::new(
            "count",
            vec![
                default_arg(LiteralExpr::Int(0)),
                Argument::labeled(KEY_LABEL, LiteralExpr::Str("c".into())),
            ],
        ))
        .unwrap();

        assert_eq!(built, parsed);
    }
}
