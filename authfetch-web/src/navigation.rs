use authfetch_core::Navigator;

/// Navigates by assigning `window.location.href`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&self, path: &str) {
        if let Err(e) = gloo_utils::window().location().set_href(path) {
            tracing::error!("failed to navigate to {}: {:?}", path, e);
        }
    }
}
