use crate::error::{Result, TimelineError};
use crate::services::youtube_api::{VideoPlatform, MAX_RESULTS};
use log::{debug, info};
use std::collections::HashSet;

// Returns every video id of the given playlist, in the order the API pages them.
pub async fn list_video_ids(api: &dyn VideoPlatform, playlist_id: &str) -> Result<Vec<String>> {
    let mut all_video_ids = Vec::new();
    let mut next_page_token: Option<String> = None;
    let mut seen_tokens = HashSet::new();
    let mut pages = 0;

    loop {
        let page = api
            .list_playlist_items(playlist_id, MAX_RESULTS, next_page_token.as_deref())
            .await?;
        pages += 1;
        debug!(
            "Playlist {playlist_id} page {pages}: {} videos",
            page.video_ids.len()
        );

        all_video_ids.extend(page.video_ids);

        match page.next_page_token {
            Some(token) => {
                if !seen_tokens.insert(token.clone()) {
                    return Err(TimelineError::Upstream(format!(
                        "Playlist {playlist_id} repeated page token {token}"
                    )));
                }
                next_page_token = Some(token);
            }
            None => break,
        }
    }

    info!(
        "Found {} videos in playlist {playlist_id} ({pages} pages)",
        all_video_ids.len()
    );
    Ok(all_video_ids)
}
