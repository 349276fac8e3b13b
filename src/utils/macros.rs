/// MACROS
/// Cross-platform logging.
/// Prints to the browser console on the web and to stdout natively, for
/// banner lines that should show up even with the log level turned down.
#[macro_export]
macro_rules! log {
    ($($t:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        ::web_sys::console::log_1(&format!($($t)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        ::std::println!($($t)*);
    }};
}
