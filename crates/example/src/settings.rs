//! The application's persisted settings.

use std::sync::LazyLock;

use stowage_store::{MemoryStore, store_accessors};

/// Suite name of the store holding account data.
pub const ACCOUNT_SUITE: &str = "com.example.account";

static ACCOUNT: LazyLock<MemoryStore> = LazyLock::new(|| MemoryStore::named(ACCOUNT_SUITE));

/// Returns the store holding account data, separate from the standard store.
pub fn account_store() -> &'static MemoryStore {
    &ACCOUNT
}

/// User-facing settings.
///
/// Carries no data of its own: every accessor reads and writes a store.
#[store_accessors]
#[derive(Debug, Default, Clone, Copy)]
pub struct AppSettings {
    /// Whether reminders are delivered as notifications.
    #[store_access(default_value = false, key = "enable_notification")]
    pub enable_notification: bool,

    /// Identifier of the signed-in user; empty when signed out.
    #[store_access(default_value = "", store = account_store())]
    pub user_id: String,

    /// How many items the user has deleted.
    #[store_access(default_value = 0)]
    pub delete_count: i64,
}

impl AppSettings {
    /// Records one more deletion and returns the new total.
    pub fn record_delete(&self) -> i64 {
        let count = self.delete_count() + 1;
        self.set_delete_count(count);
        count
    }

    /// Whether a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        !self.user_id().is_empty()
    }
}
