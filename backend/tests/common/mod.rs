#![allow(dead_code)]

use async_trait::async_trait;
use backend::error::{Result, TimelineError};
use backend::models::{Thumbnail, Thumbnails};
use backend::services::youtube_api::{ChannelResource, PlaylistPage, VideoItem, VideoSnippet};
use backend::services::VideoPlatform;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory stand-in for the YouTube Data API.
#[derive(Default)]
pub struct FakePlatform {
    pub channels_by_name: HashMap<String, String>,
    pub video_channels: HashMap<String, String>,
    pub channels: HashMap<String, ChannelResource>,
    pub playlists: HashMap<String, Vec<String>>,
    pub videos: HashMap<String, VideoItem>,
    pub fail_playlist_page: Option<usize>,
    /// Every playlist page answers with this continuation token.
    pub stuck_page_token: Option<String>,
    pub fail_video_batch: Option<usize>,
    pub calls: Mutex<Vec<String>>,
    pub batch_sizes: Mutex<Vec<usize>>,
}

impl FakePlatform {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batch_sizes.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn with_channel(mut self, channel_id: &str, title: &str, uploads: &str) -> Self {
        self.channels.insert(
            channel_id.to_string(),
            ChannelResource {
                title: title.to_string(),
                profile_pic: Some(format!("https://yt3.example/{channel_id}.jpg")),
                uploads_playlist_id: Some(uploads.to_string()),
            },
        );
        self
    }

    pub fn with_uploads(mut self, playlist_id: &str, videos: Vec<VideoItem>) -> Self {
        self.playlists.insert(
            playlist_id.to_string(),
            videos.iter().map(|v| v.id.clone()).collect(),
        );
        for video in videos {
            self.videos.insert(video.id.clone(), video);
        }
        self
    }
}

pub fn video(id: &str, published_at: &str, labels: &[&str]) -> VideoItem {
    let thumbnails: Thumbnails = labels
        .iter()
        .map(|label| {
            (
                label.to_string(),
                Thumbnail {
                    url: format!("https://i.ytimg.example/{id}/{label}.jpg"),
                    width: None,
                    height: None,
                },
            )
        })
        .collect();

    VideoItem {
        id: id.to_string(),
        snippet: Some(VideoSnippet {
            title: Some(format!("Video {id}")),
            thumbnails: if thumbnails.is_empty() {
                None
            } else {
                Some(thumbnails)
            },
            published_at: Some(published_at.to_string()),
        }),
    }
}

pub fn numbered_ids(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("vid{i:03}")).collect()
}

#[async_trait]
impl VideoPlatform for FakePlatform {
    async fn search_channels_by_name(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        self.record(format!("search:{query}"));
        Ok(self
            .channels_by_name
            .get(query)
            .cloned()
            .into_iter()
            .take(limit)
            .collect())
    }

    async fn get_video_channel_id(&self, video_id: &str) -> Result<Option<String>> {
        self.record(format!("video:{video_id}"));
        Ok(self.video_channels.get(video_id).cloned())
    }

    async fn get_channel_by_id(&self, channel_id: &str) -> Result<Option<ChannelResource>> {
        self.record(format!("channel:{channel_id}"));
        Ok(self.channels.get(channel_id).cloned())
    }

    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_size: usize,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage> {
        self.record(format!("playlist:{playlist_id}:{page_token:?}"));

        let page: usize = match page_token {
            Some(token) => token
                .strip_prefix("page-")
                .and_then(|n| n.parse().ok())
                .ok_or_else(|| TimelineError::Upstream(format!("bad page token {token}")))?,
            None => 0,
        };
        if self.fail_playlist_page == Some(page) {
            return Err(TimelineError::Upstream("500 Internal Server Error".to_string()));
        }

        let ids = self
            .playlists
            .get(playlist_id)
            .ok_or_else(|| TimelineError::Upstream("404 playlistNotFound".to_string()))?;
        let start = page * page_size;
        let end = (start + page_size).min(ids.len());

        Ok(PlaylistPage {
            video_ids: ids.get(start..end).unwrap_or_default().to_vec(),
            next_page_token: match &self.stuck_page_token {
                Some(token) => Some(token.clone()),
                None => (end < ids.len()).then(|| format!("page-{}", page + 1)),
            },
        })
    }

    async fn get_videos_by_ids(&self, video_ids: &[String]) -> Result<Vec<VideoItem>> {
        let batch = {
            let mut sizes = self.batch_sizes.lock().unwrap();
            sizes.push(video_ids.len());
            sizes.len() - 1
        };
        if self.fail_video_batch == Some(batch) {
            return Err(TimelineError::Upstream("403 quotaExceeded".to_string()));
        }

        Ok(video_ids
            .iter()
            .filter_map(|id| self.videos.get(id).cloned())
            .collect())
    }
}
