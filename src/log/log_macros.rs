//! Leveled logging macros for an explicit `Dispatcher` and for the process-wide one.
//!
//! # Feature Flags
//! Specific log levels are controlled by cargo features:
//! `log-trace`, `log-time`, `log-debug`, `log-info`, `log-warn`, `log-error`, `log-panic`.
//!
//! If a feature is disabled, the corresponding macros expand to `()`, removing
//! all formatting and allocation overhead at compile time.
//!
//! Every macro records `file!()` and `line!()` of the call site. The message is
//! written verbatim, so include a trailing `\n` when you want one.

// ============================================================================
// 1. GENERIC INTERNAL MACROS (The "Workers")
// ============================================================================
// These remain available so the enabled macros below can use them.
// We generally don't call these directly if we want feature-gating.

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $logger.log($lvl, &__msg, file!(), line!());
    }};
}

#[macro_export]
macro_rules! global_log {
    ($lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $crate::log::dispatcher::global().log($lvl, &__msg, file!(), line!());
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- TRACE ----------------------
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! logger_trace { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::Severity::TRACE, $($arg)*) } }
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! log_trace { ($($arg:tt)*) => { $crate::global_log!($crate::log::log_level::Severity::TRACE, $($arg)*) } }

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! logger_trace {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- TIME ----------------------
#[cfg(feature = "log-time")]
#[macro_export]
macro_rules! logger_time { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::Severity::TIME, $($arg)*) } }
#[cfg(feature = "log-time")]
#[macro_export]
macro_rules! log_time { ($($arg:tt)*) => { $crate::global_log!($crate::log::log_level::Severity::TIME, $($arg)*) } }

#[cfg(not(feature = "log-time"))]
#[macro_export]
macro_rules! logger_time {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-time"))]
#[macro_export]
macro_rules! log_time {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::Severity::DEBUG, $($arg)*) } }
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! log_debug { ($($arg:tt)*) => { $crate::global_log!($crate::log::log_level::Severity::DEBUG, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! logger_debug {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_info { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::Severity::INFO, $($arg)*) } }
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! log_info { ($($arg:tt)*) => { $crate::global_log!($crate::log::log_level::Severity::INFO, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_info {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! logger_warn { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::Severity::WARN, $($arg)*) } }
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! log_warn { ($($arg:tt)*) => { $crate::global_log!($crate::log::log_level::Severity::WARN, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! logger_warn {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::Severity::ERROR, $($arg)*) } }
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! log_error { ($($arg:tt)*) => { $crate::global_log!($crate::log::log_level::Severity::ERROR, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! logger_error {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- PANIC ----------------------
// Named after the severity; these never unwind.
#[cfg(feature = "log-panic")]
#[macro_export]
macro_rules! logger_panic { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::Severity::PANIC, $($arg)*) } }
#[cfg(feature = "log-panic")]
#[macro_export]
macro_rules! log_panic { ($($arg:tt)*) => { $crate::global_log!($crate::log::log_level::Severity::PANIC, $($arg)*) } }

#[cfg(not(feature = "log-panic"))]
#[macro_export]
macro_rules! logger_panic {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-panic"))]
#[macro_export]
macro_rules! log_panic {
    ($($arg:tt)*) => {
        ()
    };
}
