//! Console logging macros shared by the whole tracker.
//!
//! Every line carries a coloured level tag and the current UTC wall clock time.
//! Provider traces (`prov!`) and fine grained refresh events (`event!`) are split out
//! so that the default output only shows what an operator needs.

/// Environment variable that enables `event!` output.
pub const EVENT_LOG_VAR: &str = "LOG_FLIGHT_EVENTS";

/// Whether `event!` lines are printed.
pub fn events_enabled() -> bool { std::env::var(EVENT_LOG_VAR).is_ok() }

#[macro_export]
macro_rules! log_line {
    ($tag:literal, $colour:literal, $($arg:tt)*) => {
        println!(
            concat!("\x1b[", $colour, "m", $tag, "[{}]\x1b[0m {}"),
            chrono::Utc::now().format("%H:%M:%S%.3f"),
            format!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::log_line!("[INFO] ", "32", $($arg)*) };
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => { $crate::log_line!("[LOG]  ", "33", $($arg)*) };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log_line!("[WARN] ", "35", $($arg)*) };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::log_line!("[ERROR]", "31", $($arg)*) };
}

#[macro_export]
macro_rules! prov {
    ($($arg:tt)*) => { $crate::log_line!("[PROV] ", "1;34", $($arg)*) };
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        panic!(
            "\x1b[1;31m[FATAL][{}]\x1b[0m {}",
            chrono::Utc::now().format("%H:%M:%S%.3f"),
            format!($($arg)*)
        )
    };
}

#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if $crate::logger::events_enabled() {
            $crate::log_line!("[EVENT]", "36", $($arg)*)
        }
    };
}
