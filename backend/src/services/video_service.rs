use crate::error::Result;
use crate::models::RawVideoRecord;
use crate::services::youtube_api::{VideoItem, VideoPlatform, MAX_RESULTS};
use log::{debug, info};

impl From<VideoItem> for RawVideoRecord {
    fn from(item: VideoItem) -> Self {
        let snippet = item.snippet.unwrap_or_default();
        RawVideoRecord {
            video_id: item.id,
            title: snippet.title,
            thumbnails: snippet.thumbnails,
            published_at: snippet.published_at,
        }
    }
}

/// Looks up metadata for `video_ids` in batches of at most 50.
///
/// Records come back in the API's response order. Ids the API does not know are
/// silently absent from the result. The first failing batch aborts the whole fetch.
pub async fn fetch_video_details(
    api: &dyn VideoPlatform,
    video_ids: &[String],
) -> Result<Vec<RawVideoRecord>> {
    let mut all_video_info = Vec::with_capacity(video_ids.len());

    for (batch, chunk) in video_ids.chunks(MAX_RESULTS).enumerate() {
        let items = api.get_videos_by_ids(chunk).await?;
        debug!(
            "Batch {batch}: requested {} videos, received {}",
            chunk.len(),
            items.len()
        );
        all_video_info.extend(items.into_iter().map(RawVideoRecord::from));
    }

    info!(
        "Fetched details for {} of {} videos",
        all_video_info.len(),
        video_ids.len()
    );
    Ok(all_video_info)
}
