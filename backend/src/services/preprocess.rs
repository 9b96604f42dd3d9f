use crate::error::{Result, TimelineError};
use crate::models::{EnrichedVideoRecord, RawVideoRecord, Thumbnail, Thumbnails};
use crate::utils::{parse_published_at, video_date};

/// Best first.
const THUMBNAIL_PRIORITY: [&str; 5] = ["maxres", "standard", "high", "medium", "default"];

fn best_thumbnail(thumbnails: Option<Thumbnails>) -> Option<Thumbnail> {
    let mut thumbnails = thumbnails?;
    THUMBNAIL_PRIORITY
        .iter()
        .find_map(|label| thumbnails.remove(*label))
}

pub fn enrich_record(record: RawVideoRecord) -> Result<EnrichedVideoRecord> {
    let published = record
        .published_at
        .as_deref()
        .and_then(parse_published_at)
        .ok_or_else(|| TimelineError::MalformedTimestamp {
            video_id: record.video_id.clone(),
            value: record.published_at.clone(),
        })?;

    Ok(EnrichedVideoRecord {
        date: video_date(&published),
        thumbnail: best_thumbnail(record.thumbnails),
        published_at: record.published_at.unwrap_or_default(),
        video_id: record.video_id,
        title: record.title,
    })
}

/// Adds calendar fields and collapses thumbnails, keeping input order.
pub fn enrich(records: Vec<RawVideoRecord>) -> Result<Vec<EnrichedVideoRecord>> {
    records.into_iter().map(enrich_record).collect()
}
