//! Console helpers: panic hook, `log!` macro and a scoped console timer.

#[cfg(target_arch = "wasm32")]
use web_sys::console;

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// Logs to the browser console, or stderr when running natively (tests)
macro_rules! log {
    ( $( $t:tt )* ) => {
        $crate::utils::log_str(&format!( $( $t )* ))
    }
}

pub(crate) fn log_str(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{}", msg);
}

// Times the enclosing scope with console.time/timeEnd.
// Inert unless built for wasm with the `frame-timing` feature.
pub struct Timer<'a> {
    #[allow(dead_code)]
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        #[cfg(all(target_arch = "wasm32", feature = "frame-timing"))]
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        #[cfg(all(target_arch = "wasm32", feature = "frame-timing"))]
        console::time_end_with_label(self.name);
    }
}
