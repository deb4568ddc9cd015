//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (lpc43xx): Uses defmt
//! - Host tests: Uses println!
//! - Host non-test: No-op
//!
//! Only the firmware glue logs. The settings core never does, and nothing
//! logged here is reported back to callers.
//!
//! Arguments are passed to `defmt` unchanged, so keep them to primitives and
//! `&str` with plain `{}` placeholders.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "lpc43xx")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "lpc43xx"), test))]
        println!("[INFO] {}", format!($($arg)*));
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "lpc43xx")]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "lpc43xx"), test))]
        println!("[WARN] {}", format!($($arg)*));
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "lpc43xx")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "lpc43xx"), test))]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "lpc43xx")]
        ::defmt::trace!($($arg)*);

        #[cfg(all(not(feature = "lpc43xx"), test))]
        println!("[TRACE] {}", format!($($arg)*));
    }};
}
