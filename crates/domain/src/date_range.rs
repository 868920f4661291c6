use crate::date::parse_date;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stay from `start` (check-in) until `end` (check-out).
///
/// The range is half-open: the night of `end` is not part of it, so a
/// stay ending on the 10th and another starting on the 10th do not collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange", into = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidDateRange {
    #[error("Check-out date {end} has to be after check-in date {start}")]
    EndNotAfterStart { start: NaiveDate, end: NaiveDate },
    #[error("Invalid date: {0}")]
    MalformedDate(String),
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidDateRange> {
        if start >= end {
            return Err(InvalidDateRange::EndNotAfterStart { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, InvalidDateRange> {
        let start =
            parse_date(start).map_err(|_| InvalidDateRange::MalformedDate(start.to_string()))?;
        let end = parse_date(end).map_err(|_| InvalidDateRange::MalformedDate(end.to_string()))?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Whether the night starting at `date` is inside this range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn intersection(&self, other: &DateRange) -> Option<DateRange> {
        if !self.overlaps(other) {
            return None;
        }
        Some(DateRange {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// The date of every night in the range, in order
    pub fn nights_iter(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.nights()).map(move |offset| start + Duration::days(offset))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = InvalidDateRange;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.start, raw.end)
    }
}

impl From<DateRange> for RawDateRange {
    fn from(range: DateRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::parse(start, end).unwrap()
    }

    #[test]
    fn rejects_empty_and_reversed_ranges() {
        assert!(DateRange::parse("2024-7-1", "2024-7-1").is_err());
        assert!(DateRange::parse("2024-7-2", "2024-7-1").is_err());
        assert_eq!(
            DateRange::parse("2024-7-1", "2024-7-40"),
            Err(InvalidDateRange::MalformedDate("2024-7-40".into()))
        );
    }

    #[test]
    fn counts_nights() {
        assert_eq!(range("2024-7-1", "2024-7-2").nights(), 1);
        assert_eq!(range("2024-2-28", "2024-3-1").nights(), 2);
        assert_eq!(range("2024-12-30", "2025-1-6").nights(), 7);
    }

    #[test]
    fn back_to_back_ranges_do_not_overlap() {
        let a = range("2024-7-1", "2024-7-5");
        let b = range("2024-7-5", "2024-7-8");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.intersection(&b).is_none());
    }

    #[test]
    fn overlapping_ranges() {
        let a = range("2024-7-1", "2024-7-5");
        let inside = range("2024-7-2", "2024-7-3");
        let tail = range("2024-7-4", "2024-7-9");
        let around = range("2024-6-1", "2024-8-1");

        for other in &[inside, tail, around] {
            assert!(a.overlaps(other));
            assert!(other.overlaps(&a));
        }
        assert_eq!(a.intersection(&tail), Some(range("2024-7-4", "2024-7-5")));
        assert_eq!(a.intersection(&around), Some(a));
    }

    #[test]
    fn contains_only_nights_of_the_stay() {
        let a = range("2024-7-1", "2024-7-3");
        assert!(a.contains(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
        assert!(a.contains(NaiveDate::from_ymd_opt(2024, 7, 2).unwrap()));
        assert!(!a.contains(NaiveDate::from_ymd_opt(2024, 7, 3).unwrap()));
        assert_eq!(
            a.nights_iter().collect::<Vec<_>>(),
            vec![
                NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 7, 2).unwrap()
            ]
        );
    }
}
