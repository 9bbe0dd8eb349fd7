cfg_if! {
    // When the `console_error_panic_hook` feature is enabled, panics on wasm are forwarded to
    // `console.error` instead of surfacing as an opaque `unreachable` trap.
    if #[cfg(all(target_arch = "wasm32", feature = "console_error_panic_hook"))] {
        pub fn set_panic_hook() {
            console_error_panic_hook::set_once();
        }
    } else {
        pub fn set_panic_hook() {}
    }
}
