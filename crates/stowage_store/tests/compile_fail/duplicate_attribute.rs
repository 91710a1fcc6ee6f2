//! A field takes a single `#[store_access]`.

use stowage_store::store_accessors;

#[store_accessors]
struct Settings {
    #[store_access(default_value = 0)]
    #[store_access(default_value = 1)]
    count: i64,
}

fn main() {
    let _settings = Settings {};
}
