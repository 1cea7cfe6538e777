use authfetch_core::Settings;

use gloo_net::http::Request;

/// Reads `settings.json` next to the page, or falls back to the defaults.
pub async fn load_settings() -> Settings {
    match Request::get("settings.json").send().await {
        Ok(res) if res.ok() => res.json().await.unwrap_or_else(|e| {
            tracing::warn!("could not parse [settings.json]: {}", e);
            Settings::default()
        }),
        _ => Settings::default(),
    }
}
