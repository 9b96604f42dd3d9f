use crate::error::TimelineError;
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::serde::{Deserialize, Serialize};
use rocket::{response, Response};
use std::collections::BTreeMap;
use std::io::Cursor;

/// Channel-level metadata, looked up once per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelDetails {
    pub channel_id: String,
    pub channel_name: String,
    pub profile_pic: Option<String>,
    pub uploads_playlist_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelWithUploads {
    #[serde(flatten)]
    pub details: ChannelDetails,
    pub uploads: YearGroups,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

pub type Thumbnails = BTreeMap<String, Thumbnail>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawVideoRecord {
    pub video_id: String,
    pub title: Option<String>,
    pub thumbnails: Option<Thumbnails>,
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// 0 = Monday .. 6 = Sunday
    pub weekday: u32,
    pub week_number: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedVideoRecord {
    pub video_id: String,
    pub title: Option<String>,
    pub published_at: String,
    pub date: VideoDate,
    pub thumbnail: Option<Thumbnail>,
}

/// Uploads keyed by publish year. Keys always form a contiguous range.
pub type YearGroups = BTreeMap<i32, Vec<EnrichedVideoRecord>>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ChannelInfoRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadsRequest {
    pub metadata: ChannelDetails,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadsResponse {
    pub data: ChannelWithUploads,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AggregateResponse {
    pub data: ChannelWithUploads,
    pub counts: BTreeMap<i32, usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub channel_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip, default = "default_error_status")]
    pub status: Status,
}

fn default_error_status() -> Status {
    Status::BadRequest
}

impl From<TimelineError> for ErrorResponse {
    fn from(e: TimelineError) -> Self {
        ErrorResponse {
            error: e.code_str().to_string(),
            message: e.to_string(),
            status: e.status(),
        }
    }
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::to_string(&self).map_err(|_| Status::InternalServerError)?;
        Response::build()
            .status(self.status)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
