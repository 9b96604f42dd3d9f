use crate::error::{Result, TimelineError};
use crate::models::{ChannelDetails, ChannelWithUploads};
use crate::services::channel_resolver::resolve_channel_id;
use crate::services::grouping::group_by_year;
use crate::services::playlist_service::list_video_ids;
use crate::services::preprocess::enrich;
use crate::services::video_service::fetch_video_details;
use crate::services::youtube_api::VideoPlatform;
use log::info;

pub async fn get_channel_details(
    api: &dyn VideoPlatform,
    channel_id: &str,
) -> Result<ChannelDetails> {
    let channel = api
        .get_channel_by_id(channel_id)
        .await?
        .ok_or_else(|| TimelineError::ChannelNotFound(channel_id.to_string()))?;

    let uploads_playlist_id = channel.uploads_playlist_id.ok_or_else(|| {
        TimelineError::Upstream(format!("No uploads playlist found for {channel_id}"))
    })?;

    Ok(ChannelDetails {
        channel_id: channel_id.to_string(),
        channel_name: channel.title,
        profile_pic: channel.profile_pic,
        uploads_playlist_id,
    })
}

/// Resolves a reference and looks up the channel it points to.
pub async fn channel_info(api: &dyn VideoPlatform, reference: &str) -> Result<ChannelDetails> {
    let channel_id = resolve_channel_id(api, reference).await?;
    get_channel_details(api, &channel_id).await
}

/// Collects, enriches and groups the uploads of an already looked up channel.
pub async fn attach_uploads(
    api: &dyn VideoPlatform,
    details: ChannelDetails,
) -> Result<ChannelWithUploads> {
    let video_ids = list_video_ids(api, &details.uploads_playlist_id).await?;
    let raw_videos = fetch_video_details(api, &video_ids).await?;
    let videos = enrich(raw_videos)?;
    let uploads = group_by_year(videos)?;

    info!(
        "Grouped uploads of {} ({}) into {} years",
        details.channel_name,
        details.channel_id,
        uploads.len()
    );

    Ok(ChannelWithUploads { details, uploads })
}

pub async fn aggregate_channel(
    api: &dyn VideoPlatform,
    reference: &str,
) -> Result<ChannelWithUploads> {
    let details = channel_info(api, reference).await?;
    attach_uploads(api, details).await
}
