use std::sync::Arc;

use stowage_store::{MemoryStore, store_accessors};

/// The store expression may borrow from `self`, including through smart pointers.
#[store_accessors]
struct Profile {
    store: Arc<MemoryStore>,

    #[store_access(default_value = "", key = "profile.name", store = self.store)]
    name: String,

    #[store_access(default_value = f64::NAN, store = self.store)]
    score: f64,
}

fn main() {
    let profile = Profile {
        store: Arc::new(MemoryStore::new()),
    };
    assert_eq!(profile.name(), "");
    assert!(profile.score().is_nan());

    profile.set_name("ada".to_string());
    profile.set_score(0.5);
    assert_eq!(profile.name(), "ada");
    assert_eq!(profile.score(), 0.5);
}
