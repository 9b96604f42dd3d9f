pub mod aggregator;
pub mod channel_resolver;
pub mod grouping;
pub mod playlist_service;
pub mod preprocess;
pub mod video_service;
pub mod youtube_api;

pub use aggregator::{aggregate_channel, attach_uploads, channel_info, get_channel_details};
pub use channel_resolver::{resolve_channel_id, ChannelReference};
pub use youtube_api::{VideoPlatform, YouTubeClient};
