use crate::error::{Result, TimelineError};
use crate::models::{EnrichedVideoRecord, YearGroups};
use std::collections::BTreeMap;

/// Buckets records by publish year.
///
/// Every year between the oldest and newest upload gets an entry, empty or not,
/// and each bucket is ordered by (month, day). Records published on the same
/// day keep their input order.
pub fn group_by_year(records: Vec<EnrichedVideoRecord>) -> Result<YearGroups> {
    let mut groups: YearGroups = BTreeMap::new();
    for record in records {
        groups.entry(record.date.year).or_default().push(record);
    }

    let (min_year, max_year) = match (groups.keys().next(), groups.keys().next_back()) {
        (Some(min), Some(max)) => (*min, *max),
        _ => return Err(TimelineError::EmptyInput),
    };

    for year in min_year..=max_year {
        groups.entry(year).or_default();
    }

    for videos in groups.values_mut() {
        // sort_by_key is stable
        videos.sort_by_key(|video| (video.date.month, video.date.day));
    }

    Ok(groups)
}

pub fn year_counts(groups: &YearGroups) -> BTreeMap<i32, usize> {
    groups
        .iter()
        .map(|(year, videos)| (*year, videos.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VideoDate;

    fn record(video_id: &str, year: i32, month: u32, day: u32) -> EnrichedVideoRecord {
        EnrichedVideoRecord {
            video_id: video_id.to_string(),
            title: None,
            published_at: format!("{year:04}-{month:02}-{day:02}T00:00:00Z"),
            date: VideoDate {
                year,
                month,
                day,
                weekday: 0,
                week_number: 1,
            },
            thumbnail: None,
        }
    }

    fn ids(videos: &[EnrichedVideoRecord]) -> Vec<&str> {
        videos.iter().map(|v| v.video_id.as_str()).collect()
    }

    #[test]
    fn test_fills_year_gaps() {
        let groups = group_by_year(vec![
            record("new", 2023, 7, 1),
            record("old", 2020, 2, 1),
        ])
        .unwrap();

        assert_eq!(
            groups.keys().copied().collect::<Vec<_>>(),
            vec![2020, 2021, 2022, 2023]
        );
        assert!(groups[&2021].is_empty());
        assert!(groups[&2022].is_empty());
        assert_eq!(ids(&groups[&2020]), ["old"]);
        assert_eq!(ids(&groups[&2023]), ["new"]);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(
            group_by_year(Vec::new()),
            Err(TimelineError::EmptyInput)
        ));
    }

    #[test]
    fn test_single_year() {
        let groups = group_by_year(vec![record("a", 2018, 1, 1)]).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups[&2018]), ["a"]);
    }

    #[test]
    fn test_sorted_by_month_then_day() {
        let groups = group_by_year(vec![
            record("dec", 2022, 12, 1),
            record("mar-20", 2022, 3, 20),
            record("mar-02", 2022, 3, 2),
            record("jan", 2022, 1, 31),
        ])
        .unwrap();
        assert_eq!(ids(&groups[&2022]), ["jan", "mar-02", "mar-20", "dec"]);
    }

    #[test]
    fn test_same_day_keeps_input_order() {
        let groups = group_by_year(vec![
            record("second-upload", 2021, 5, 1),
            record("earlier-month", 2021, 4, 9),
            record("first-upload", 2021, 5, 1),
        ])
        .unwrap();
        assert_eq!(
            ids(&groups[&2021]),
            ["earlier-month", "second-upload", "first-upload"]
        );
    }

    #[test]
    fn test_year_counts() {
        let groups = group_by_year(vec![
            record("a", 2019, 1, 1),
            record("b", 2019, 2, 1),
            record("c", 2021, 1, 1),
        ])
        .unwrap();
        let counts = year_counts(&groups);
        assert_eq!(counts.get(&2019), Some(&2));
        assert_eq!(counts.get(&2020), Some(&0));
        assert_eq!(counts.get(&2021), Some(&1));
    }
}
