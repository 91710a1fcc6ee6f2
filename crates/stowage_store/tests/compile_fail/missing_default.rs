//! Every accessor needs a default value.

use stowage_store::store_accessors;

#[store_accessors]
struct Settings {
    #[store_access(key = "retries")]
    retries: i64,
}

fn main() {
    let _settings = Settings {};
}
