//! Accessors generated through the `stowage` umbrella crate.

use stowage::prelude::*;

#[store_accessors]
struct Preferences {
    store: MemoryStore,

    #[store_access(default_value = "en", key = "locale", store = self.store)]
    locale: String,

    #[store_access(default_value = 0, key = "umbrella.opens")]
    opens: i64,
}

#[test]
fn accessors_resolve_through_umbrella() {
    let preferences = Preferences {
        store: MemoryStore::new(),
    };
    assert_eq!(preferences.locale(), "en");

    preferences.set_locale("fr".to_string());
    assert_eq!(preferences.store.string("locale").as_deref(), Some("fr"));

    preferences.set_opens(2);
    assert_eq!(standard().integer("umbrella.opens"), 2);
}

#[test]
fn engine_is_reachable_through_umbrella() {
    let decl = PropertyDecl::without_arguments("broken");
    let err = Expander::default().expand(&decl).unwrap_err();
    assert_eq!(err.kind(), DiagnosticKind::SyntaxParseError);
}
