//! Macros for generating log messages.
//!
//! Every macro accepts an optional leading verbosity threshold followed by a format string and its arguments. The
//! threshold form is recognized by the format string literal in second position, so a message whose first format
//! argument is itself a literal must spell out its threshold: `info!(0, "{}", 42)`.

/// Shared expansion of the level macros. Not meant to be invoked directly.
#[doc(hidden)]
#[macro_export]
macro_rules! log_event {
    ($level:expr, $critical:expr, $threshold:expr, $($arg:tt)+) => {
        {
            $crate::log::init_logger();
            $crate::log::tracing::event!(
                $level,
                critical = $critical,
                threshold = $threshold,
                message = format_args!($($arg)+)
            );
        }
    };
}

#[macro_export]
macro_rules! critical {
    ($threshold:expr, $fmt:literal $($arg:tt)*) => {
        $crate::log_event!($crate::log::tracing::Level::ERROR, true, $threshold, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log_event!($crate::log::tracing::Level::ERROR, true, 0u8, $fmt $($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($threshold:expr, $fmt:literal $($arg:tt)*) => {
        $crate::log_event!($crate::log::tracing::Level::ERROR, false, $threshold, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log_event!($crate::log::tracing::Level::ERROR, false, 0u8, $fmt $($arg)*)
    };
}

#[macro_export]
macro_rules! warning {
    ($threshold:expr, $fmt:literal $($arg:tt)*) => {
        $crate::log_event!($crate::log::tracing::Level::WARN, false, $threshold, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log_event!($crate::log::tracing::Level::WARN, false, 0u8, $fmt $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($threshold:expr, $fmt:literal $($arg:tt)*) => {
        $crate::log_event!($crate::log::tracing::Level::INFO, false, $threshold, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log_event!($crate::log::tracing::Level::INFO, false, 0u8, $fmt $($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($threshold:expr, $fmt:literal $($arg:tt)*) => {
        $crate::log_event!($crate::log::tracing::Level::DEBUG, false, $threshold, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log_event!($crate::log::tracing::Level::DEBUG, false, 0u8, $fmt $($arg)*)
    };
}

#[macro_export]
macro_rules! trace {
    ($threshold:expr, $fmt:literal $($arg:tt)*) => {
        $crate::log_event!($crate::log::tracing::Level::TRACE, false, $threshold, $fmt $($arg)*)
    };
    ($fmt:literal $($arg:tt)*) => {
        $crate::log_event!($crate::log::tracing::Level::TRACE, false, 0u8, $fmt $($arg)*)
    };
}


// The following makes the macros importable directly from the `log` module.
pub use crate::{critical, error, warning, info, debug, trace};
