//! Example settings type built with Stowage.
//!
//! [`AppSettings`] exposes three typed settings without holding any data:
//!
//! ```text
//! ┌─────────────────────┐  enable_notification  ┌──────────────────┐
//! │                     │──────────────────────▶│                  │
//! │     AppSettings     │  delete_count         │  standard store  │
//! │                     │──────────────────────▶│                  │
//! │                     │                       └──────────────────┘
//! │                     │  user_id              ┌──────────────────┐
//! │                     │──────────────────────▶│  account store   │
//! └─────────────────────┘                       └──────────────────┘
//! ```
//!
//! [`declarations`] describes the same properties to the engine directly,
//! which the binary uses to log what the macro generates.

mod logging;
mod settings;

pub use logging::{TracingConfig, TracingFormat};
pub use settings::{ACCOUNT_SUITE, AppSettings, account_store};

use stowage_engine::{Argument, LiteralExpr, PropertyDecl};

/// Engine declarations mirroring [`AppSettings`], plus `tags`, whose array
/// default has no supported type.
pub fn declarations() -> Vec<PropertyDecl> {
    vec![
        PropertyDecl::new(
            "enable_notification",
            vec![
                Argument::labeled("default_value", LiteralExpr::Bool(false)),
                Argument::labeled("key", LiteralExpr::Str("enable_notification".into())),
            ],
        ),
        PropertyDecl::new(
            "user_id",
            vec![
                Argument::labeled("default_value", LiteralExpr::Str(String::new())),
                Argument::labeled("store", LiteralExpr::Unsupported("account_store()".into())),
            ],
        ),
        PropertyDecl::new(
            "delete_count",
            vec![Argument::labeled("default_value", LiteralExpr::Int(0))],
        ),
        PropertyDecl::new(
            "tags",
            vec![Argument::labeled(
                "default_value",
                LiteralExpr::Unsupported("[]".into()),
            )],
        ),
    ]
}
