//! Layout helpers for the contribution heat grid.
//!
//! Everything here is a pure function of the contribution sequence so the
//! browser view and the share card render from the same data.

use chrono::Datelike;

use crate::models::ContributionDay;

/// Intensity tiers in legend order, least to most active.
pub const LEVELS: [u8; 5] = [0, 1, 2, 3, 4];

/// One week of the grid, Sunday first. `None` pads the first and last week.
pub type WeekColumn<'a> = [Option<&'a ContributionDay>; 7];

/// CSS class for a provider intensity level. Anything above 4 is clamped.
pub fn level_class(level: u8) -> &'static str {
    match level {
        0 => "level-0",
        1 => "level-1",
        2 => "level-2",
        3 => "level-3",
        _ => "level-4",
    }
}

/// Lays the sequence out in week columns.
///
/// The first column is padded by the weekday of the first entry (no padding
/// when that date does not parse). Entries are placed in sequence order, so
/// the grid assumes the provider sends one entry per day without gaps.
pub fn week_columns(contributions: &[ContributionDay]) -> Vec<WeekColumn<'_>> {
    let Some(first) = contributions.first() else {
        return Vec::new();
    };

    let lead = first
        .parsed_date()
        .map(|date| date.weekday().num_days_from_sunday() as usize)
        .unwrap_or(0);

    let mut columns = Vec::with_capacity((lead + contributions.len()).div_ceil(7));
    let mut column: WeekColumn<'_> = [None; 7];
    let mut row = lead;

    for day in contributions {
        column[row] = Some(day);
        row += 1;
        if row == 7 {
            columns.push(column);
            column = [None; 7];
            row = 0;
        }
    }

    if row > 0 {
        columns.push(column);
    }

    columns
}

/// Column index and short month name for every column whose first dated
/// cell falls in a different month than the previous labelled column.
pub fn month_labels(columns: &[WeekColumn<'_>]) -> Vec<(usize, String)> {
    let mut labels = Vec::new();
    let mut last_month = None;

    for (index, column) in columns.iter().enumerate() {
        let Some(date) = column.iter().flatten().find_map(|day| day.parsed_date()) else {
            continue;
        };

        if last_month != Some(date.month()) {
            labels.push((index, date.format("%b").to_string()));
            last_month = Some(date.month());
        }
    }

    labels
}

/// Tooltip text for a grid cell.
pub fn cell_title(day: &ContributionDay) -> String {
    format!("{}: {} contributions", day.date, day.count)
}

/// Human readable date for the stats panel.
pub fn format_day(day: &ContributionDay) -> String {
    if day.date.is_empty() {
        return "-".to_string();
    }

    match day.parsed_date() {
        Some(date) => date.format("%b %d, %Y").to_string(),
        None => day.date.clone(),
    }
}

/// Stats panel text for the most active day, `-` when there was no activity.
pub fn most_active_label(day: &ContributionDay) -> String {
    if day.count == 0 {
        return "-".to_string();
    }

    format!("{} ({} contributions)", format_day(day), day.count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_2025(days: usize) -> Vec<ContributionDay> {
        let start = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        start
            .iter_days()
            .take(days)
            .map(|date| ContributionDay::new(date.format("%Y-%m-%d").to_string(), 1, 1))
            .collect()
    }

    #[test]
    fn test_level_class() {
        assert_eq!(level_class(0), "level-0");
        assert_eq!(level_class(3), "level-3");
        assert_eq!(level_class(4), "level-4");
        assert_eq!(level_class(9), "level-4");
    }

    #[test]
    fn test_week_columns_pads_by_weekday() {
        // 2025-01-01 is a Wednesday
        let contributions = year_2025(365);
        let columns = week_columns(&contributions);

        assert!(columns[0][..3].iter().all(Option::is_none));
        assert_eq!(columns[0][3].map(|d| d.date.as_str()), Some("2025-01-01"));
        assert_eq!(columns.len(), 53);

        let placed = columns.iter().flatten().flatten().count();
        assert_eq!(placed, 365);

        // 2025-12-31 is also a Wednesday, the rest of that week is padding
        let last = columns.last().unwrap();
        assert_eq!(last[3].map(|d| d.date.as_str()), Some("2025-12-31"));
        assert!(last[4..].iter().all(Option::is_none));
    }

    #[test]
    fn test_week_columns_without_parseable_date() {
        let contributions = vec![
            ContributionDay::new("not-a-date", 1, 1),
            ContributionDay::new("still-not", 0, 0),
        ];
        let columns = week_columns(&contributions);

        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0][0].map(|d| d.count), Some(1));
        assert!(columns[0][2].is_none());
    }

    #[test]
    fn test_week_columns_empty() {
        assert!(week_columns(&[]).is_empty());
    }

    #[test]
    fn test_month_labels() {
        let contributions = year_2025(365);
        let columns = week_columns(&contributions);
        let labels = month_labels(&columns);

        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], (0, "Jan".to_string()));
        assert_eq!(labels[1].1, "Feb");
        assert_eq!(labels[11].1, "Dec");
        assert!(labels.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_format_day() {
        assert_eq!(format_day(&ContributionDay::new("2025-07-04", 3, 2)), "Jul 04, 2025");
        assert_eq!(format_day(&ContributionDay::default()), "-");
        assert_eq!(format_day(&ContributionDay::new("sometime", 3, 2)), "sometime");
    }

    #[test]
    fn test_most_active_label() {
        let day = ContributionDay::new("2025-03-01", 14, 4);
        assert_eq!(most_active_label(&day), "Mar 01, 2025 (14 contributions)");
        assert_eq!(most_active_label(&ContributionDay::default()), "-");
    }

    #[test]
    fn test_cell_title() {
        let day = ContributionDay::new("2025-02-14", 6, 3);
        assert_eq!(cell_title(&day), "2025-02-14: 6 contributions");
    }
}
