use axum::{
    routing::get,
    Router,
    Json,
    extract::State,
    debug_handler,
};
use shared::constants::SHEET_ENDPOINT;
use shared::shared_wheel_game::*;
use tracing::info;
use crate::AppState;
use crate::error::Error;

pub fn create_router() -> Router<AppState> {
    Router::new().route(SHEET_ENDPOINT, get(get_prize_sheet).post(record_result))
}

#[debug_handler]
async fn get_prize_sheet(State(state): State<AppState>) -> Json<PrizeSheetResponse> {
    Json(PrizeSheetResponse::success(state.sheet.tiers().clone()))
}

/// Accepts a finished spin. Only logged; spin history is not stored.
///
/// The body is read as text whatever its content type, since cross-origin clients post
/// no-cors `text/plain` the same way they would to an Apps Script sheet.
#[debug_handler]
async fn record_result(
    State(_state): State<AppState>,
    body: String,
) -> Result<Json<RecordResponse>, Error> {
    let request: RecordRequest = serde_json::from_str(&body).map_err(Error::InvalidRecord)?;
    if request.action != RECORD_ACTION {
        return Err(Error::UnknownAction(request.action));
    }
    let tier = request
        .tier
        .parse::<Tier>()
        .map_err(|e| Error::UnknownTier(e.0))?;

    info!(
        tier = tier.as_str(),
        prize = request.prize.as_str(),
        timestamp = request.timestamp.as_str(),
        "Recorded spin result"
    );

    Ok(Json(RecordResponse {
        status: SHEET_STATUS_SUCCESS.to_string(),
    }))
}
