//! Textual rendering of accessor descriptions.
//!
//! Produces Rust-flavored statement text that mirrors what the attribute
//! macro emits as tokens. Useful for logging and for drivers that splice
//! text rather than token streams.

use crate::synthesize::{AccessorDescription, NEW_VALUE};
use core::fmt;

/// Rendered get and set bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAccessor {
    /// Body of the getter.
    pub get: String,
    /// Body of the setter.
    pub set: String,
}

impl fmt::Display for RenderedAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "get {{")?;
        for line in self.get.lines() {
            writeln!(f, "    {line}")?;
        }
        writeln!(f, "}}")?;
        writeln!(f, "set {{")?;
        for line in self.set.lines() {
            writeln!(f, "    {line}")?;
        }
        write!(f, "}}")
    }
}

pub(crate) fn render(accessor: &AccessorDescription, standard_store: &str) -> RenderedAccessor {
    let get = accessor.get();
    let store = get.store().as_source(standard_store);
    let key = get.key();
    let default = get.default_value();
    let method = get.read().method();

    let read = if get.read().falls_back_to_default() {
        format!("{store}.{method}({key}).unwrap_or_else(|| {default}.into())")
    } else {
        format!("{store}.{method}({key})")
    };

    let get_body = format!("if !{store}.contains({key}) {{\n    return {default};\n}}\n{read}");

    let set = accessor.set();
    let set_body = format!(
        "{}.set_value({}, {NEW_VALUE}.into());",
        set.store().as_source(standard_store),
        set.key()
    );

    RenderedAccessor {
        get: get_body,
        set: set_body,
    }
}

#[cfg(test)]
mod tests {
    use crate::literal::{DefaultValue, LiteralExpr, ResolvedType};
    use crate::resolve::StoreRef;
    use crate::synthesize::synthesize;

    #[test]
    fn bool_accessor_text() {
        let accessor = synthesize(
            ResolvedType::Bool,
            StoreRef::Standard,
            "\"enableNotification\"".into(),
            &DefaultValue::from_literal(LiteralExpr::Bool(false)),
        )
        .unwrap();

        let rendered = accessor.render("standard()");
        assert_eq!(
            rendered.get,
            "if !standard().contains(\"enableNotification\") {\n    return false;\n}\nstandard().bool(\"enableNotification\")"
        );
        assert_eq!(
            rendered.set,
            "standard().set_value(\"enableNotification\", new_value.into());"
        );
    }

    #[test]
    fn string_accessor_falls_back_twice() {
        let accessor = synthesize(
            ResolvedType::String,
            StoreRef::Expr("custom".into()),
            "\"user_id\"".into(),
            &DefaultValue::from_literal(LiteralExpr::Str("guest".into())),
        )
        .unwrap();

        let rendered = accessor.render("standard()");
        assert!(rendered.get.contains("return \"guest\";"));
        assert!(
            rendered
                .get
                .ends_with("custom.string(\"user_id\").unwrap_or_else(|| \"guest\".into())")
        );
    }

    #[test]
    fn display_wraps_bodies() {
        let accessor = synthesize(
            ResolvedType::Int,
            StoreRef::Standard,
            "\"count\"".into(),
            &DefaultValue::from_literal(LiteralExpr::Int(0)),
        )
        .unwrap();

        let text = accessor.render("store").to_string();
        let expected = "get {\n    if !store.contains(\"count\") {\n        return 0;\n    }\n    store.integer(\"count\")\n}\nset {\n    store.set_value(\"count\", new_value.into());\n}";
        assert_eq!(text, expected);
    }
}
