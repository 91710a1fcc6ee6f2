//! Example settings CLI.
//!
//! Exercises [`AppSettings`] against its stores, then logs the accessor
//! bodies the engine synthesizes for the same declarations.
//!
//! # Usage
//!
//! ```bash
//! settings [user_id]
//! ```
//!
//! `STOWAGE_LOG` sets the tracing filter (e.g. `stowage_store=trace`) and
//! `STOWAGE_LOG_FORMAT` the output format (`pretty`, `compact` or `json`).

use example::{AppSettings, TracingConfig, TracingFormat, declarations};
use stowage_engine::{DEFAULT_STANDARD_STORE, Expander};

fn main() {
    let mut tracing = TracingConfig::new();
    if let Ok(filter) = std::env::var("STOWAGE_LOG") {
        tracing = tracing.with_env_filter(filter);
    }
    if let Some(format) = std::env::var("STOWAGE_LOG_FORMAT")
        .ok()
        .as_deref()
        .and_then(TracingFormat::from_name)
    {
        tracing = tracing.with_format(format);
    }
    tracing.init();

    let user_id = std::env::args().nth(1).unwrap_or_else(|| "guest".to_string());

    let settings = AppSettings::default();
    tracing::info!(
        enable_notification = settings.enable_notification(),
        user_id = %settings.user_id(),
        delete_count = settings.delete_count(),
        "defaults"
    );

    settings.set_enable_notification(true);
    settings.set_user_id(user_id);
    settings.record_delete();
    settings.record_delete();

    tracing::info!(
        enable_notification = settings.enable_notification(),
        user_id = %settings.user_id(),
        delete_count = settings.delete_count(),
        signed_in = settings.is_signed_in(),
        "updated"
    );

    let expansion = Expander::default().expand_all(&declarations());
    for property in &expansion.properties {
        if let Some(accessor) = &property.accessor {
            tracing::info!(
                property = %property.name,
                value_type = %accessor.value_type(),
                "\n{}",
                accessor.render(DEFAULT_STANDARD_STORE)
            );
        }
    }

    for reported in &expansion.diagnostics {
        match serde_json::to_string(reported) {
            Ok(record) => tracing::warn!(%record, "expansion failed"),
            Err(error) => tracing::error!(%error, site = %reported.site, "unserializable diagnostic"),
        }
    }
}
