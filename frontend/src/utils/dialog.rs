#[cfg(target_arch = "wasm32")]
use web_sys::Window;

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

/// Blocking browser alert. Falls back to the log when no window exists.
#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    let shown = window().and_then(|w| {
        w.alert_with_message(message)
            .map_err(|_| "alert unavailable".to_string())
    });
    if let Err(err) = shown {
        log::warn!("{}: {}", err, message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    log::warn!("alert: {}", message);
}
