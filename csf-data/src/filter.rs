//! Start-year range selection over seasons.
//!
//! A reversed range (`start_year > end_year`) is swapped before filtering,
//! so `filter(s, 2024, 2020)` selects the same seasons as `filter(s, 2020, 2024)`.

use csf_core::season::Season;
use serde::Serialize;

/// An inclusive range of season start years, always `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    /// Build a range, swapping the ends if they are reversed.
    pub fn new(start_year: i32, end_year: i32) -> Self {
        if start_year > end_year {
            log::debug!(
                "[CSF] filter: reversed range {}..={}, swapping",
                start_year,
                end_year
            );
            YearRange {
                start: end_year,
                end: start_year,
            }
        } else {
            YearRange {
                start: start_year,
                end: end_year,
            }
        }
    }

    /// The range spanning the first and last season, if any.
    pub fn spanning(seasons: &[Season]) -> Option<Self> {
        let min = seasons.iter().map(|s| s.start_year).min()?;
        let max = seasons.iter().map(|s| s.start_year).max()?;
        Some(YearRange::new(min, max))
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }
}

/// Seasons whose start year lies in `[start_year, end_year]`, in input order.
///
/// The returned references point at the input seasons; nothing is copied.
///
/// ```rust
/// use csf_core::season::Season;
/// use csf_data::filter::filter_seasons_by_range;
///
/// let seasons: Vec<Season> = (2018..=2023).map(|y| Season::accumulate(y, Vec::new())).collect();
/// let picked = filter_seasons_by_range(&seasons, 2020, 2021);
/// assert_eq!(picked.iter().map(|s| s.start_year).collect::<Vec<_>>(), vec![2020, 2021]);
/// ```
pub fn filter_seasons_by_range(seasons: &[Season], start_year: i32, end_year: i32) -> Vec<&Season> {
    let range = YearRange::new(start_year, end_year);
    seasons
        .iter()
        .filter(|season| range.contains(season.start_year))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seasons(years: impl IntoIterator<Item = i32>) -> Vec<Season> {
        years
            .into_iter()
            .map(|y| Season::accumulate(y, Vec::new()))
            .collect()
    }

    #[test]
    fn inclusive_on_both_ends() {
        let all = seasons(1990..=2024);
        let picked = filter_seasons_by_range(&all, 2020, 2024);
        let years: Vec<i32> = picked.iter().map(|s| s.start_year).collect();
        assert_eq!(years, vec![2020, 2021, 2022, 2023, 2024]);
    }

    #[test]
    fn returns_references_into_input() {
        let all = seasons(2000..=2002);
        let picked = filter_seasons_by_range(&all, 2001, 2001);
        assert_eq!(picked.len(), 1);
        assert!(std::ptr::eq(picked[0], &all[1]));
    }

    #[test]
    fn reversed_range_is_swapped() {
        let all = seasons(2000..=2010);
        assert_eq!(
            filter_seasons_by_range(&all, 2008, 2003),
            filter_seasons_by_range(&all, 2003, 2008)
        );
        assert_eq!(YearRange::new(5, 1), YearRange { start: 1, end: 5 });
    }

    #[test]
    fn empty_input_and_no_match() {
        assert!(filter_seasons_by_range(&[], 2000, 2020).is_empty());
        let all = seasons(2000..=2005);
        assert!(filter_seasons_by_range(&all, 1950, 1960).is_empty());
    }

    #[test]
    fn spanning_range() {
        assert_eq!(YearRange::spanning(&[]), None);
        let all = seasons([2012, 1999, 2005]);
        assert_eq!(
            YearRange::spanning(&all),
            Some(YearRange {
                start: 1999,
                end: 2012
            })
        );
    }

    proptest! {
        #[test]
        fn membership_matches_predicate(
            years in prop::collection::btree_set(1900i32..2100, 0..40),
            a in 1900i32..2100,
            b in 1900i32..2100,
        ) {
            let all = seasons(years.iter().copied());
            let picked = filter_seasons_by_range(&all, a, b);
            let (lo, hi) = (a.min(b), a.max(b));
            for season in &all {
                let included = picked.iter().any(|p| p.start_year == season.start_year);
                prop_assert_eq!(included, lo <= season.start_year && season.start_year <= hi);
            }
        }
    }
}
