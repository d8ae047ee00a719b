//! Engine logging macros
//!
//! On wasm32 every message also goes to the browser console (the editor
//! surfaces these to users). On all targets a `tracing` event is emitted so
//! native hosts and tests can attach a subscriber.
//!
//! Usage:
//! ```rust
//! use orbitbox_engine::engine_warn;
//!
//! let key = "spin";
//! engine_warn!("unknown property '{}'", key);
//! ```

#[macro_export]
macro_rules! engine_log {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__private::web_sys::console::log_1(&$crate::__private::wasm_bindgen::JsValue::from_str(&msg));
        }
        $crate::__private::tracing::info!("{}", msg);
    }};
}

#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__private::web_sys::console::warn_1(&$crate::__private::wasm_bindgen::JsValue::from_str(&msg));
        }
        $crate::__private::tracing::warn!("{}", msg);
    }};
}

#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        #[cfg(target_arch = "wasm32")]
        {
            $crate::__private::web_sys::console::error_1(&$crate::__private::wasm_bindgen::JsValue::from_str(&msg));
        }
        $crate::__private::tracing::error!("{}", msg);
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_accept_format_args() {
        let index = 3usize;
        engine_log!("added item {}", index);
        engine_warn!("rejected edit on {}", index);
        engine_error!("{} failed", "remove");
    }
}
