// src/log.rs
use std::io::{self, Write};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

// Diagnostics go to stderr only. Stdout belongs to the generated schema.
static VERBOSE: AtomicBool = AtomicBool::new(false);
static START: OnceLock<Instant> = OnceLock::new();

pub fn set_verbose(on: bool) {
    VERBOSE.store(on, Ordering::Relaxed);
}

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let s = total_ms / 1_000;
    let ms = total_ms % 1_000;
    format!("{s}.{ms:03}")
}

/// Internal logging function. ERROR always prints; everything else
/// only when `-v` flipped the verbose flag.
pub fn write_log(level: &str, msg: &str) {
    if level != "ERROR" && !VERBOSE.load(Ordering::Relaxed) {
        return;
    }
    let elapsed = fmt_elapsed(start().elapsed().as_millis());
    let _ = writeln!(io::stderr(), "[{elapsed}][{level}] {msg}");
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}
