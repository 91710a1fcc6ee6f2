//! An array default has no supported type.

use stowage_store::store_accessors;

#[store_accessors]
struct Settings {
    #[store_access(default_value = [0])]
    tags: Vec<i64>,
}

fn main() {
    let _settings = Settings {};
}
