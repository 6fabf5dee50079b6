//! Message display and logging macros.
//!
//! Every macro takes a [`Message`](super::Message) (or anything `Display`) and
//! routes it one of two ways:
//!
//! - **Debug mode** (`TASKDESK_DEBUG` or `RUST_LOG` set): through `tracing`, so
//!   output lands in the subscriber installed by `main`.
//! - **Normal mode**: plain `println!`/`eprintln!`.
//!
//! ```text
//! msg_info!(..) ──▶ is_debug_mode()? ──yes──▶ tracing::info!
//!                                    └─no───▶ println!
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use taskdesk::libs::messages::Message;
//! use taskdesk::{msg_error, msg_success};
//!
//! msg_success!(Message::TaskDeleted(4));
//! msg_error!(Message::TasksLoadFailed("disk I/O error".to_string()));
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether messages go to `tracing` instead of the console.
///
/// Checked once per process and cached.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKDESK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a plain message. Pass `true` as a second argument to pad it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️  {}", $msg);
        }
    };
}

/// Debug-only output with a 🔍 prefix. Silent in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with a ❌ prefix.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}
