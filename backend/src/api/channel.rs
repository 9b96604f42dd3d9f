use crate::models::{
    AggregateResponse, ChannelDetails, ChannelInfoRequest, ErrorResponse, ResolveResponse,
    UploadsRequest, UploadsResponse,
};
use crate::services::grouping::year_counts;
use crate::services::{aggregate_channel, attach_uploads, channel_info, resolve_channel_id};
use crate::AppState;
use log::{error, info};
use rocket::serde::json::Json;
use rocket::{get, post, State};

#[post("/get_channel_info", data = "<request>")]
pub async fn get_channel_info(
    request: Json<ChannelInfoRequest>,
    state: &State<AppState>,
) -> Result<Json<ChannelDetails>, ErrorResponse> {
    match channel_info(state.youtube.as_ref(), &request.url).await {
        Ok(details) => {
            info!(
                "Channel info for {}: {} ({})",
                request.url, details.channel_name, details.channel_id
            );
            Ok(Json(details))
        }
        Err(e) => {
            error!("Failed to get channel info for {}: {e}", request.url);
            Err(e.into())
        }
    }
}

#[post("/get_uploads", data = "<request>")]
pub async fn get_uploads(
    request: Json<UploadsRequest>,
    state: &State<AppState>,
) -> Result<Json<UploadsResponse>, ErrorResponse> {
    let details = request.into_inner().metadata;
    let channel_id = details.channel_id.clone();

    match attach_uploads(state.youtube.as_ref(), details).await {
        Ok(data) => Ok(Json(UploadsResponse { data })),
        Err(e) => {
            error!("Failed to get uploads for channel {channel_id}: {e}");
            Err(e.into())
        }
    }
}

#[post("/channel", data = "<request>")]
pub async fn aggregate(
    request: Json<ChannelInfoRequest>,
    state: &State<AppState>,
) -> Result<Json<AggregateResponse>, ErrorResponse> {
    match aggregate_channel(state.youtube.as_ref(), &request.url).await {
        Ok(data) => {
            let counts = year_counts(&data.uploads);
            Ok(Json(AggregateResponse { data, counts }))
        }
        Err(e) => {
            error!("Failed to aggregate channel {}: {e}", request.url);
            Err(e.into())
        }
    }
}

#[get("/resolve?<url>")]
pub async fn resolve(
    url: String,
    state: &State<AppState>,
) -> Result<Json<ResolveResponse>, ErrorResponse> {
    resolve_channel_id(state.youtube.as_ref(), &url)
        .await
        .map(|channel_id| Json(ResolveResponse { channel_id }))
        .map_err(|e| {
            error!("Failed to resolve {url}: {e}");
            e.into()
        })
}
