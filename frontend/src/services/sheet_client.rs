use std::fmt;
use chrono::{DateTime, SecondsFormat, Utc};
use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use log::{debug, warn};
use shared::shared_wheel_game::{PrizeList, PrizeSheetResponse, RecordRequest, Tier};
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, RequestMode};
use super::{PrizeSource, ResultSink};

#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    Network(String),
    Status(u16),
    Decode(String),
    MissingTier(Tier),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(e) => write!(f, "network error: {}", e),
            FetchError::Status(code) => write!(f, "sheet responded with status {}", code),
            FetchError::Decode(e) => write!(f, "unreadable sheet response: {}", e),
            FetchError::MissingTier(tier) => write!(f, "sheet has no prizes for tier {}", tier),
        }
    }
}

impl std::error::Error for FetchError {}

const JSON_CONTENT_TYPE: &str = "application/json";
const PLAIN_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// Talks to the prize sheet endpoint: `GET` for the lists, `POST` to record results.
pub struct SheetClient {
    url: String,
    record_mode: RequestMode,
}

impl SheetClient {
    pub fn new(url: String) -> Self {
        let origin = window().and_then(|w| w.location().origin().ok());
        let record_mode = record_mode_for(&url, origin.as_deref());
        Self { url, record_mode }
    }
}

/// Posts to the page's own backend use cors. Any other host (an Apps Script deployment)
/// does not answer preflights, so those posts go out no-cors and come back opaque.
pub fn record_mode_for(url: &str, page_origin: Option<&str>) -> RequestMode {
    let same_origin = url.starts_with('/')
        || page_origin.is_some_and(|origin| url == origin || url.starts_with(&format!("{}/", origin)));
    if same_origin {
        RequestMode::Cors
    } else {
        RequestMode::NoCors
    }
}

/// A no-cors post must stay a simple request, so it cannot declare a JSON body.
fn record_content_type(mode: RequestMode) -> &'static str {
    if mode == RequestMode::NoCors {
        PLAIN_CONTENT_TYPE
    } else {
        JSON_CONTENT_TYPE
    }
}

/// Opaque no-cors replies always report status 0, which only means the post left the page.
fn record_delivered(status: u16, mode: RequestMode) -> bool {
    (200..300).contains(&status) || (mode == RequestMode::NoCors && status == 0)
}

pub fn record_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn prizes_from_sheet(sheet: &PrizeSheetResponse, tier: Tier) -> Result<PrizeList, FetchError> {
    sheet.prizes_for(tier).ok_or(FetchError::MissingTier(tier))
}

async fn fetch_sheet(url: String, tier: Tier) -> Result<PrizeList, FetchError> {
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let sheet = response
        .json::<PrizeSheetResponse>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    prizes_from_sheet(&sheet, tier)
}

impl PrizeSource for SheetClient {
    fn fetch_prizes(&self, tier: Tier) -> LocalBoxFuture<'static, Result<PrizeList, FetchError>> {
        fetch_sheet(self.url.clone(), tier).boxed_local()
    }
}

impl ResultSink for SheetClient {
    fn record(&self, tier: Tier, prize: &str, timestamp: DateTime<Utc>) {
        let body = RecordRequest::new(tier, prize, record_timestamp(timestamp));
        let url = self.url.clone();
        let mode = self.record_mode;

        spawn_local(async move {
            let json = match serde_json::to_string(&body) {
                Ok(json) => json,
                Err(e) => {
                    warn!("Failed to encode spin result: {}", e);
                    return;
                }
            };
            let request = match Request::post(&url)
                .mode(mode)
                .header("Content-Type", record_content_type(mode))
                .body(json)
            {
                Ok(request) => request,
                Err(e) => {
                    warn!("Failed to build record request: {}", e);
                    return;
                }
            };
            match request.send().await {
                Ok(response) if record_delivered(response.status(), mode) => {
                    debug!("Recorded {} for tier {}", body.prize, body.tier)
                }
                Ok(response) => warn!("Recording spin result failed with status {}", response.status()),
                Err(e) => warn!("Recording spin result failed: {}", e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    #[test]
    fn test_record_timestamp_is_iso_millis_utc() {
        let at = Utc.with_ymd_and_hms(2026, 2, 1, 12, 30, 5).unwrap();
        assert_eq!(record_timestamp(at), "2026-02-01T12:30:05.000Z");
    }

    #[test]
    fn test_prizes_from_sheet() {
        let sheet = PrizeSheetResponse::success(HashMap::from([
            ("5000".to_string(), vec!["Tea set".to_string()]),
        ]));
        assert_eq!(prizes_from_sheet(&sheet, Tier::Tier5000).unwrap().labels(), ["Tea set"]);
        assert_eq!(
            prizes_from_sheet(&sheet, Tier::Tier3000),
            Err(FetchError::MissingTier(Tier::Tier3000))
        );
    }

    #[test]
    fn test_failed_sheet_status_is_missing() {
        let sheet: PrizeSheetResponse =
            serde_json::from_str(r#"{"status":"error","message":"quota"}"#).unwrap();
        assert!(matches!(prizes_from_sheet(&sheet, Tier::Tier3000), Err(FetchError::MissingTier(_))));
    }

    #[test]
    fn test_record_mode_for_sheet_url() {
        let origin = Some("http://127.0.0.1:3000");
        assert_eq!(record_mode_for("/api/sheet", origin), RequestMode::Cors);
        assert_eq!(record_mode_for("http://127.0.0.1:3000/api/sheet", origin), RequestMode::Cors);
        assert_eq!(
            record_mode_for("https://script.google.com/macros/s/abc123/exec", origin),
            RequestMode::NoCors
        );
        // A different port is a different origin
        assert_eq!(record_mode_for("http://127.0.0.1:30001/api/sheet", origin), RequestMode::NoCors);
        assert_eq!(record_mode_for("https://script.google.com/macros/s/abc123/exec", None), RequestMode::NoCors);
    }

    #[test]
    fn test_no_cors_record_is_simple_request() {
        assert_eq!(record_content_type(RequestMode::NoCors), "text/plain;charset=utf-8");
        assert_eq!(record_content_type(RequestMode::Cors), "application/json");
    }

    #[test]
    fn test_opaque_reply_counts_as_delivered() {
        assert!(record_delivered(0, RequestMode::NoCors));
        assert!(record_delivered(200, RequestMode::NoCors));
        assert!(!record_delivered(0, RequestMode::Cors));
        assert!(record_delivered(200, RequestMode::Cors));
        assert!(!record_delivered(400, RequestMode::Cors));
    }

    #[test]
    fn test_fetch_error_falls_back() {
        let resolved = shared::shared_wheel_game::resolve_prizes(
            Tier::Tier10000,
            Err::<PrizeList, _>(FetchError::Status(502)),
        );
        assert_eq!(resolved.len(), 50);
    }
}
