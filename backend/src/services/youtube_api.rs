use crate::error::{Result, TimelineError};
use crate::models::{Thumbnail, Thumbnails};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

/// Largest page / batch size the YouTube Data API accepts.
pub const MAX_RESULTS: usize = 50;

pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/youtube/v3/";

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelResource {
    pub title: String,
    pub profile_pic: Option<String>,
    pub uploads_playlist_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistPage {
    pub video_ids: Vec<String>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VideoItem {
    pub id: String,
    #[serde(default)]
    pub snippet: Option<VideoSnippet>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_thumbnails")]
    pub thumbnails: Option<Thumbnails>,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// The calls the upload pipeline makes against the video platform.
#[async_trait]
pub trait VideoPlatform: Send + Sync {
    async fn search_channels_by_name(&self, query: &str, limit: usize) -> Result<Vec<String>>;

    /// Channel that published `video_id`, `None` when the video does not exist.
    async fn get_video_channel_id(&self, video_id: &str) -> Result<Option<String>>;

    async fn get_channel_by_id(&self, channel_id: &str) -> Result<Option<ChannelResource>>;

    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_size: usize,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage>;

    async fn get_videos_by_ids(&self, video_ids: &[String]) -> Result<Vec<VideoItem>>;
}

#[derive(Debug, Deserialize)]
struct WireThumbnail {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
}

/// Keeps only the thumbnail variants that carry a url; `None` when none do.
fn lenient_thumbnails<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Thumbnails>, D::Error>
where
    D: Deserializer<'de>,
{
    let wire = Option::<BTreeMap<String, Option<WireThumbnail>>>::deserialize(deserializer)?;
    let thumbnails: Thumbnails = wire
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(label, thumb)| {
            let thumb = thumb?;
            let url = thumb.url?;
            Some((
                label,
                Thumbnail {
                    url,
                    width: thumb.width,
                    height: thumb.height,
                },
            ))
        })
        .collect();

    Ok((!thumbnails.is_empty()).then_some(thumbnails))
}

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
    #[serde(default, rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    snippet: Option<ChannelIdSnippet>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelIdSnippet {
    #[serde(default)]
    channel_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelItem {
    #[serde(default)]
    snippet: Option<ChannelSnippet>,
    #[serde(default)]
    content_details: Option<ChannelContentDetails>,
}

#[derive(Debug, Default, Deserialize)]
struct ChannelSnippet {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_thumbnails")]
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelContentDetails {
    #[serde(default)]
    related_playlists: Option<RelatedPlaylists>,
}

#[derive(Debug, Deserialize)]
struct RelatedPlaylists {
    #[serde(default)]
    uploads: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItem {
    #[serde(default)]
    content_details: Option<PlaylistItemContentDetails>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemContentDetails {
    #[serde(default)]
    video_id: Option<String>,
}

fn search_channel_ids(items: Vec<SearchItem>) -> Result<Vec<String>> {
    items
        .into_iter()
        .map(|item| {
            item.snippet.and_then(|s| s.channel_id).ok_or_else(|| {
                TimelineError::Upstream("search result without channelId".to_string())
            })
        })
        .collect()
}

fn playlist_page(response: ListResponse<PlaylistItem>) -> Result<PlaylistPage> {
    let video_ids = response
        .items
        .into_iter()
        .map(|item| {
            item.content_details.and_then(|d| d.video_id).ok_or_else(|| {
                TimelineError::Upstream("playlist item without videoId".to_string())
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PlaylistPage {
        video_ids,
        next_page_token: response.next_page_token,
    })
}

fn playlist_items_query<'a>(
    playlist_id: &'a str,
    page_size: &'a str,
    page_token: Option<&'a str>,
) -> Vec<(&'static str, &'a str)> {
    let mut params = vec![
        ("part", "contentDetails"),
        ("playlistId", playlist_id),
        ("maxResults", page_size),
    ];
    if let Some(token) = page_token {
        params.push(("pageToken", token));
    }
    params
}

impl From<ChannelItem> for ChannelResource {
    fn from(item: ChannelItem) -> Self {
        let snippet = item.snippet.unwrap_or_default();
        ChannelResource {
            title: snippet.title.unwrap_or_default(),
            profile_pic: snippet
                .thumbnails
                .and_then(|mut thumbs| thumbs.remove("default"))
                .map(|thumb| thumb.url),
            uploads_playlist_id: item
                .content_details
                .and_then(|details| details.related_playlists)
                .and_then(|playlists| playlists.uploads),
        }
    }
}

/// YouTube Data API v3 client authenticated with a single API key.
#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl YouTubeClient {
    pub fn new(api_key: String, base_url: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(YouTubeClient {
            client,
            api_key,
            base_url,
        })
    }

    fn request(&self, resource: &str, params: &[(&str, &str)]) -> Result<reqwest::Request> {
        // Documentation: https://developers.google.com/youtube/v3/docs
        let url = self
            .base_url
            .join(resource)
            .map_err(|e| TimelineError::Upstream(format!("Invalid API url: {e}")))?;
        debug!("GET {url} {params:?}");

        Ok(self
            .client
            .get(url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .build()?)
    }

    async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> Result<ListResponse<T>> {
        let request = self.request(resource, params)?;
        let response = self
            .client
            .execute(request)
            .await?
            .error_for_status()?
            .json::<ListResponse<T>>()
            .await?;

        Ok(response)
    }
}

#[async_trait]
impl VideoPlatform for YouTubeClient {
    async fn search_channels_by_name(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        let limit = limit.to_string();
        let response: ListResponse<SearchItem> = self
            .list(
                "search",
                &[
                    ("part", "snippet"),
                    ("q", query),
                    ("type", "channel"),
                    ("maxResults", limit.as_str()),
                ],
            )
            .await?;

        search_channel_ids(response.items)
    }

    async fn get_video_channel_id(&self, video_id: &str) -> Result<Option<String>> {
        let response: ListResponse<SearchItem> = self
            .list("videos", &[("part", "snippet"), ("id", video_id)])
            .await?;

        Ok(response
            .items
            .into_iter()
            .next()
            .and_then(|item| item.snippet)
            .and_then(|s| s.channel_id))
    }

    async fn get_channel_by_id(&self, channel_id: &str) -> Result<Option<ChannelResource>> {
        let response: ListResponse<ChannelItem> = self
            .list(
                "channels",
                &[("part", "snippet,contentDetails"), ("id", channel_id)],
            )
            .await?;

        Ok(response.items.into_iter().next().map(ChannelResource::from))
    }

    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_size: usize,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage> {
        let page_size = page_size.to_string();
        let params = playlist_items_query(playlist_id, &page_size, page_token);

        let response: ListResponse<PlaylistItem> = self.list("playlistItems", &params).await?;
        playlist_page(response)
    }

    async fn get_videos_by_ids(&self, video_ids: &[String]) -> Result<Vec<VideoItem>> {
        let ids = video_ids.join(",");
        let response: ListResponse<VideoItem> = self
            .list(
                "videos",
                &[("part", "snippet,contentDetails,statistics"), ("id", ids.as_str())],
            )
            .await?;

        Ok(response.items)
    }
}
