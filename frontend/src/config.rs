use shared::constants::{usable_sheet_url, API_BASE_URL, SHEET_ENDPOINT};
use web_sys::window;

/// Apps Script deployment URL, baked in at build time.
const PRIZE_SHEET_URL: Option<&str> = option_env!("PRIZE_SHEET_URL");

pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(location) = window.location().host() {
            // Served by the backend itself, so keep host and port of the page
            let protocol = window.location().protocol().unwrap_or_else(|_| "http:".to_string());
            return format!("{}//{}", protocol, location);
        }
    }

    // Default to 127.0.0.1 for development
    API_BASE_URL.to_string()
}

/// Endpoint used both to read the prize sheet and to post spin results.
pub fn get_sheet_url() -> String {
    sheet_url_from(PRIZE_SHEET_URL, &get_api_base_url())
}

fn sheet_url_from(configured: Option<&str>, api_base: &str) -> String {
    match usable_sheet_url(configured) {
        Some(url) => url.to_string(),
        None => format!("{}{}", api_base.trim_end_matches('/'), SHEET_ENDPOINT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_sheet_url_wins() {
        assert_eq!(
            sheet_url_from(Some("https://script.google.com/macros/s/abc/exec"), "http://localhost:3000"),
            "https://script.google.com/macros/s/abc/exec"
        );
    }

    #[test]
    fn test_placeholder_falls_back_to_backend() {
        assert_eq!(
            sheet_url_from(Some("https://script.google.com/macros/s/YOUR_DEPLOYMENT_ID/exec"), "http://localhost:3000/"),
            "http://localhost:3000/api/sheet"
        );
        assert_eq!(sheet_url_from(None, ""), "/api/sheet");
    }
}
