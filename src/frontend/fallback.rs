use std::panic;
use web_sys::window;

pub const MOUNT_ID: &str = "app";

const FALLBACK_HTML: &str = r#"<div class="fatal-fallback" role="alert">
  <h1>Something went wrong</h1>
  <p>An unexpected error occurred. Please reload the page to continue.</p>
  <button type="button" class="btn-primary" onclick="window.location.reload()">Reload page</button>
</div>"#;

/// Replaces the whole page with a static fallback on any panic. The app is
/// not resumed; a reload starts it again.
pub fn install() {
    panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        render_fallback();
    }));
}

fn render_fallback() {
    let Some(mount) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
    else {
        return;
    };

    mount.set_inner_html(FALLBACK_HTML);
}
