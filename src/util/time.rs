//! Wall-clock access.

/// Milliseconds since the Unix epoch; `0.0` outside the browser.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}
