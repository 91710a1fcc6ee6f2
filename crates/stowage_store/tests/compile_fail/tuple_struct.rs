//! Accessors are generated for named fields only.

use stowage_store::store_accessors;

#[store_accessors]
struct Settings(bool);

fn main() {}
