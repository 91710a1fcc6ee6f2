//! Normalization of `#[store_access(...)]` into engine arguments.

use quote::ToTokens;
use stowage_engine::{Argument, Diagnostic, LiteralExpr};
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, ExprPath, ExprUnary, Lit, LitInt, Meta, Token, UnOp};

/// Name of the per-field attribute.
pub(crate) const ATTRIBUTE: &str = "store_access";

/// Returns `true` for `#[store_access]` attributes.
pub(crate) fn is_store_access(attr: &Attribute) -> bool {
    attr.path().is_ident(ATTRIBUTE)
}

/// Converts the attribute's argument list into engine arguments.
///
/// Returns `Ok(None)` for a bare `#[store_access]` without an argument list.
pub(crate) fn normalize(attr: &Attribute) -> Result<Option<Vec<Argument>>, Diagnostic> {
    match &attr.meta {
        Meta::Path(_) => Ok(None),
        Meta::List(list) => {
            let exprs = list
                .parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated)
                .map_err(|err| Diagnostic::syntax_parse(err.to_string()))?;
            Ok(Some(exprs.iter().map(argument).collect()))
        }
        Meta::NameValue(_) => Err(Diagnostic::syntax_parse(format!(
            "expected `#[{ATTRIBUTE}(default_value = ...)]`"
        ))),
    }
}

/// `label = expr` becomes a labeled argument; anything else is unlabeled.
fn argument(expr: &Expr) -> Argument {
    if let Expr::Assign(assign) = expr
        && let Expr::Path(ExprPath {
            qself: None, path, ..
        }) = &*assign.left
        && let Some(label) = path.get_ident()
    {
        return Argument::new(
            Some(label.to_string()),
            literal(&assign.right),
            source(&assign.right),
        );
    }
    Argument::new(None, literal(expr), source(expr))
}

fn source(expr: &Expr) -> String {
    expr.to_token_stream().to_string()
}

/// Classifies the syntactic form of an expression.
///
/// Integer literals must fit `i64` and carry no suffix other than `i64`;
/// float literals no suffix other than `f64`. Negated numeric literals are
/// literals. A path of two or more segments is a member reference on its
/// second-to-last segment, so `f64::NAN` is `NAN` on `f64`.
pub(crate) fn literal(expr: &Expr) -> LiteralExpr {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => match lit {
            Lit::Bool(value) => LiteralExpr::Bool(value.value),
            Lit::Int(value) if matches!(value.suffix(), "" | "i64") => value
                .base10_parse::<i64>()
                .map_or_else(|_| LiteralExpr::Unsupported(source(expr)), LiteralExpr::Int),
            Lit::Float(value) if matches!(value.suffix(), "" | "f64") => value
                .base10_parse::<f64>()
                .map_or_else(|_| LiteralExpr::Unsupported(source(expr)), LiteralExpr::Float),
            Lit::Str(value) => LiteralExpr::Str(value.value()),
            _ => LiteralExpr::Unsupported(source(expr)),
        },
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match negated_int(inner) {
            // Parsed with its sign so `i64::MIN` fits.
            Some(int) if matches!(int.suffix(), "" | "i64") => format!("-{}", int.base10_digits())
                .parse::<i64>()
                .map_or_else(|_| LiteralExpr::Unsupported(source(expr)), LiteralExpr::Int),
            _ => match literal(inner) {
                LiteralExpr::Float(value) => LiteralExpr::Float(-value),
                _ => LiteralExpr::Unsupported(source(expr)),
            },
        },
        Expr::Path(ExprPath {
            qself: None, path, ..
        }) if path.segments.len() >= 2 => {
            let mut segments = path.segments.iter().rev();
            match (segments.next(), segments.next()) {
                (Some(member), Some(base)) if member.arguments.is_none() => {
                    LiteralExpr::MemberRef {
                        type_name: base.ident.to_string(),
                        member: member.ident.to_string(),
                    }
                }
                _ => LiteralExpr::Unsupported(source(expr)),
            }
        }
        Expr::Paren(paren) => literal(&paren.expr),
        Expr::Group(group) => literal(&group.expr),
        _ => LiteralExpr::Unsupported(source(expr)),
    }
}

/// The integer literal under a negation, looking through parentheses.
fn negated_int(expr: &Expr) -> Option<&LitInt> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(int), ..
        }) => Some(int),
        Expr::Paren(paren) => negated_int(&paren.expr),
        Expr::Group(group) => negated_int(&group.expr),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn lit(expr: Expr) -> LiteralExpr {
        literal(&expr)
    }

    #[test]
    fn scalar_literals() {
        assert_eq!(lit(parse_quote!(false)), LiteralExpr::Bool(false));
        assert_eq!(lit(parse_quote!(42)), LiteralExpr::Int(42));
        assert_eq!(lit(parse_quote!(7i64)), LiteralExpr::Int(7));
        assert_eq!(lit(parse_quote!(-3)), LiteralExpr::Int(-3));
        assert_eq!(lit(parse_quote!(1.5)), LiteralExpr::Float(1.5));
        assert_eq!(lit(parse_quote!(-0.25)), LiteralExpr::Float(-0.25));
        assert_eq!(lit(parse_quote!("guest")), LiteralExpr::Str("guest".into()));
        assert_eq!(lit(parse_quote!((1))), LiteralExpr::Int(1));
    }

    #[test]
    fn negative_integers_cover_the_full_range() {
        assert_eq!(
            lit(parse_quote!(-9223372036854775808)),
            LiteralExpr::Int(i64::MIN)
        );
        assert_eq!(
            lit(parse_quote!(-9_223_372_036_854_775_808i64)),
            LiteralExpr::Int(i64::MIN)
        );
        assert_eq!(lit(parse_quote!(-(5))), LiteralExpr::Int(-5));
        assert!(matches!(
            lit(parse_quote!(-9223372036854775809)),
            LiteralExpr::Unsupported(_)
        ));
        assert!(matches!(lit(parse_quote!(-3u8)), LiteralExpr::Unsupported(_)));
    }

    #[test]
    fn member_references() {
        assert_eq!(
            lit(parse_quote!(f64::NAN)),
            LiteralExpr::MemberRef {
                type_name: "f64".into(),
                member: "NAN".into(),
            }
        );
        assert_eq!(
            lit(parse_quote!(core::i64::MAX)),
            LiteralExpr::MemberRef {
                type_name: "i64".into(),
                member: "MAX".into(),
            }
        );
    }

    #[test]
    fn unsupported_forms() {
        assert!(matches!(lit(parse_quote!([1, 2])), LiteralExpr::Unsupported(_)));
        assert!(matches!(lit(parse_quote!(vec![])), LiteralExpr::Unsupported(_)));
        assert!(matches!(lit(parse_quote!(NAN)), LiteralExpr::Unsupported(_)));
        assert!(matches!(lit(parse_quote!(3u8)), LiteralExpr::Unsupported(_)));
        assert!(matches!(lit(parse_quote!(1.0f32)), LiteralExpr::Unsupported(_)));
        assert!(matches!(lit(parse_quote!(b'x')), LiteralExpr::Unsupported(_)));
    }

    #[test]
    fn normalizes_labeled_arguments() {
        let attr: Attribute =
            parse_quote!(#[store_access(default_value = 0, key = "count", store = self.store)]);

        let arguments = normalize(&attr).unwrap().expect("argument list");
        let labels: Vec<_> = arguments.iter().map(Argument::label).collect();
        assert_eq!(labels, [Some("default_value"), Some("key"), Some("store")]);
        assert_eq!(arguments[0].literal(), &LiteralExpr::Int(0));
        assert_eq!(arguments[1].source(), "\"count\"");
    }

    #[test]
    fn bare_attribute_has_no_argument_list() {
        let attr: Attribute = parse_quote!(#[store_access]);
        assert_eq!(normalize(&attr).unwrap(), None);
    }

    #[test]
    fn positional_argument_is_unlabeled() {
        let attr: Attribute = parse_quote!(#[store_access(false)]);
        let arguments = normalize(&attr).unwrap().expect("argument list");
        assert_eq!(arguments[0].label(), None);
    }

    #[test]
    fn malformed_list_is_a_syntax_error() {
        let attr: Attribute = parse_quote!(#[store_access(default_value = )]);
        let err = normalize(&attr).unwrap_err();
        assert_eq!(err.kind(), stowage_engine::DiagnosticKind::SyntaxParseError);
    }
}
