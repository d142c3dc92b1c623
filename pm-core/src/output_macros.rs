//! Themed output macros for the Portrait Master binaries.
//!
//! User-facing text goes through these macros so that every binary prints
//! progress, warnings and errors with the same markers. Diagnostic output
//! belongs to `tracing`, not here.

#[macro_export]
macro_rules! pm_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! pm_error {
    ($($arg:tt)*) => {
        eprintln!("✗ {}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! pm_success {
    ($($arg:tt)*) => {
        eprintln!("✓ {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! pm_info {
    ($($arg:tt)*) => {
        eprintln!("ℹ {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! pm_warning {
    ($($arg:tt)*) => {
        eprintln!("⚠ {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! pm_progress {
    ($($arg:tt)*) => {
        eprintln!("▶ {}", format!($($arg)*));
    };
}
