use stowage_store::{KeyValueStore, MemoryStore, store_accessors};

/// Generic structs keep their parameters on the generated impl.
#[store_accessors]
struct Settings<S: KeyValueStore> {
    store: S,

    #[store_access(default_value = -1, key = "retry_limit", store = self.store)]
    retry_limit: i64,
}

fn main() {
    let settings = Settings {
        store: MemoryStore::new(),
    };
    assert_eq!(settings.retry_limit(), -1);
    settings.set_retry_limit(3);
    assert_eq!(settings.store.integer("retry_limit"), 3);
}
