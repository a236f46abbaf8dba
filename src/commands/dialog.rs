//! Browser Dialogs

/// Blocking alert; failures to show it are ignored
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
