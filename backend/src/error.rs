use rocket::http::Status;

pub type Result<T> = std::result::Result<T, TimelineError>;

#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("Invalid channel reference: {0}")]
    InvalidReference(String),

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("Video not found: {0}")]
    VideoNotFound(String),

    #[error("YouTube API request failed: {0}")]
    Upstream(String),

    #[error("Malformed publish timestamp for video {video_id}: {value:?}")]
    MalformedTimestamp {
        video_id: String,
        value: Option<String>,
    },

    #[error("No videos to group")]
    EmptyInput,
}

impl From<reqwest::Error> for TimelineError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => TimelineError::Upstream(format!("{status}: {e}")),
            None => TimelineError::Upstream(e.to_string()),
        }
    }
}

impl TimelineError {
    pub fn code_str(&self) -> &'static str {
        match self {
            TimelineError::InvalidReference(_) => "invalid_reference",
            TimelineError::ChannelNotFound(_) => "channel_not_found",
            TimelineError::VideoNotFound(_) => "video_not_found",
            TimelineError::Upstream(_) => "upstream_error",
            TimelineError::MalformedTimestamp { .. } => "malformed_timestamp",
            TimelineError::EmptyInput => "empty_input",
        }
    }

    /// HTTP status the service layer answers with for this error.
    pub fn status(&self) -> Status {
        match self {
            TimelineError::InvalidReference(_) => Status::BadRequest,
            TimelineError::ChannelNotFound(_) | TimelineError::VideoNotFound(_) => {
                Status::NotFound
            }
            TimelineError::EmptyInput => Status::UnprocessableEntity,
            TimelineError::Upstream(_) | TimelineError::MalformedTimestamp { .. } => {
                Status::BadGateway
            }
        }
    }
}
