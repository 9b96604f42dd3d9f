use crate::error::{Result, TimelineError};
use crate::services::youtube_api::VideoPlatform;
use log::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelReference {
    /// `https://www.youtube.com/@handle`
    Vanity(String),
    /// `https://www.youtube.com/watch?v=VIDEO_ID&t=42s`
    VideoWatch(String),
    /// `https://www.youtube.com/channel/UC...`
    ExplicitChannel(String),
}

impl ChannelReference {
    /// Markers are checked in a fixed order: `/@`, then `/watch`, then `/channel/`.
    /// The first marker present decides, regardless of where it sits in the string.
    pub fn parse(reference: &str) -> Result<Self> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(TimelineError::InvalidReference(
                "empty channel reference".to_string(),
            ));
        }

        let parsed = if reference.contains("/@") {
            let name = reference.rsplit("/@").next().unwrap_or_default();
            ChannelReference::Vanity(name.to_string())
        } else if reference.contains("/watch") {
            let (_, query) = reference.rsplit_once("/watch?v=").ok_or_else(|| {
                TimelineError::InvalidReference(format!("no video id in {reference}"))
            })?;
            let video_id = query.split("&t").next().unwrap_or_default();
            ChannelReference::VideoWatch(video_id.to_string())
        } else if reference.contains("/channel/") {
            let channel_id = reference.rsplit("/channel/").next().unwrap_or_default();
            ChannelReference::ExplicitChannel(channel_id.to_string())
        } else {
            return Err(TimelineError::InvalidReference(reference.to_string()));
        };

        if parsed.value().is_empty() {
            return Err(TimelineError::InvalidReference(reference.to_string()));
        }
        Ok(parsed)
    }

    fn value(&self) -> &str {
        match self {
            ChannelReference::Vanity(v)
            | ChannelReference::VideoWatch(v)
            | ChannelReference::ExplicitChannel(v) => v,
        }
    }
}

/// Resolves any supported channel reference to its canonical channel id.
pub async fn resolve_channel_id(api: &dyn VideoPlatform, reference: &str) -> Result<String> {
    let channel_id = match ChannelReference::parse(reference)? {
        ChannelReference::Vanity(name) => api
            .search_channels_by_name(&name, 1)
            .await?
            .into_iter()
            .next()
            .ok_or(TimelineError::ChannelNotFound(name))?,
        ChannelReference::VideoWatch(video_id) => api
            .get_video_channel_id(&video_id)
            .await?
            .ok_or(TimelineError::VideoNotFound(video_id))?,
        // Not verified here, the channel lookup that follows fails for unknown ids.
        ChannelReference::ExplicitChannel(channel_id) => channel_id,
    };

    info!("Resolved {reference} -> {channel_id}");
    Ok(channel_id)
}
