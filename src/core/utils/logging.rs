//! Console logging macros
//!
//! In the browser everything goes to the devtools console through `web_sys`.
//! Native builds (tests, tools) compile the calls out: wasm-bindgen imports
//! panic when invoked off-wasm, and the engine has no other log sink.
//!
//! Usage:
//! ```rust
//! use sandburst_engine::engine_log;
//!
//! let particles = 42;
//! engine_log!("world ready with {} particles", particles);
//! ```

/// Informational message (`console.log`)
#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Recoverable problem the host should know about (`console.warn`)
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Chatty diagnostics, debug builds only (`console.debug`)
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        #[cfg(all(target_arch = "wasm32", debug_assertions))]
        {
            $crate::__web_sys::console::debug_1(&format!($($arg)*).into());
        }
        #[cfg(not(all(target_arch = "wasm32", debug_assertions)))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}
