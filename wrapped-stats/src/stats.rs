use crate::models::{ContributionDay, DerivedStats};

/// Returns the day with the highest `count`.
///
/// The first maximal entry wins on ties. When nothing has a positive count
/// (including an empty slice) the placeholder `{date: "", count: 0}` is
/// returned.
pub fn most_active_day(contributions: &[ContributionDay]) -> ContributionDay {
    contributions
        .iter()
        .fold(ContributionDay::default(), |best, day| {
            if day.count > best.count {
                day.clone()
            } else {
                best
            }
        })
}

/// Length of the longest run of adjacent entries with a nonzero count.
///
/// Adjacency is by position in the slice, not by calendar date, so a gap in
/// the provider's sequence would join two runs.
pub fn longest_streak(contributions: &[ContributionDay]) -> usize {
    let mut current_streak = 0;
    let mut max_streak = 0;

    for day in contributions {
        if day.count == 0 {
            current_streak = 0;
        } else {
            current_streak += 1;
            max_streak = max_streak.max(current_streak);
        }
    }

    max_streak
}

pub fn derive_stats(contributions: &[ContributionDay]) -> DerivedStats {
    DerivedStats {
        most_active_day: most_active_day(contributions),
        longest_streak: longest_streak(contributions),
    }
}
