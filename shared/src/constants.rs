pub const API_BASE_URL: &str = "http://127.0.0.1:3000";
pub const SHEET_ENDPOINT: &str = "/api/sheet";
pub const HEALTH_CHECK_ENDPOINT: &str = "/api/health_check";

/// Marker left in the sheet URL until a real deployment id is filled in.
pub const SHEET_URL_PLACEHOLDER: &str = "YOUR_DEPLOYMENT_ID";

/// Logical size of the wheel canvas before device pixel scaling.
pub const WHEEL_CANVAS_SIZE: f64 = 500.0;

/// Returns the configured sheet URL unless it is blank or still the placeholder.
pub fn usable_sheet_url(url: Option<&str>) -> Option<&str> {
    url.map(str::trim)
        .filter(|url| !url.is_empty() && !url.contains(SHEET_URL_PLACEHOLDER))
}
