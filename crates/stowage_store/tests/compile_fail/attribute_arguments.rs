//! `#[store_accessors]` itself takes no arguments.

use stowage_store::store_accessors;

#[store_accessors(standard)]
struct Settings {
    #[store_access(default_value = 0)]
    count: i64,
}

fn main() {}
