use crate::{date::days_between, DateRange};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// No single booking can be longer than this
pub const MAX_BOOKING_NIGHTS: i64 = 365;

/// Owner-defined restrictions on which stays can be booked on a `Listing`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRules {
    /// Shortest allowed stay
    pub min_nights: i64,
    /// Longest allowed stay, capped by `MAX_BOOKING_NIGHTS`
    pub max_nights: Option<i64>,
    /// Check-in has to be at least this many days after the booking is made.
    /// 0 allows same-day check-in.
    pub advance_notice_days: i64,
    /// Check-in can be at most this many days after the booking is made
    pub max_advance_days: Option<i64>,
    /// Allowed check-in weekdays, `None` allows every day.
    /// Charter boats commonly only turn around on Saturdays.
    pub check_in_days: Option<Vec<Weekday>>,
    /// Bookings are confirmed right away instead of waiting for the owner
    pub instant_book: bool,
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            min_nights: 1,
            max_nights: None,
            advance_notice_days: 0,
            max_advance_days: None,
            check_in_days: None,
            instant_book: false,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidBookingRules {
    #[error("Minimum nights has to be at least 1")]
    MinNights,
    #[error("Maximum nights has to be between minimum nights and {}", MAX_BOOKING_NIGHTS)]
    MaxNights,
    #[error("Advance notice can not be negative")]
    AdvanceNotice,
    #[error("Maximum advance days has to be greater than the advance notice")]
    MaxAdvance,
    #[error("At least one check-in day has to be allowed")]
    CheckInDays,
}

#[derive(Debug, Error, PartialEq)]
pub enum RuleViolation {
    #[error("Check-in date {0} is in the past")]
    CheckInInPast(NaiveDate),
    #[error("Check-in has to be at least {0} days ahead")]
    TooShortNotice(i64),
    #[error("Check-in can be at most {0} days ahead")]
    TooFarAhead(i64),
    #[error("The stay has to be at least {0} nights")]
    TooFewNights(i64),
    #[error("The stay can be at most {0} nights")]
    TooManyNights(i64),
    #[error("Check-in is not allowed on {0}")]
    CheckInDayNotAllowed(Weekday),
}

impl BookingRules {
    pub fn validate(&self) -> Result<(), InvalidBookingRules> {
        if self.min_nights < 1 || self.min_nights > MAX_BOOKING_NIGHTS {
            return Err(InvalidBookingRules::MinNights);
        }
        if let Some(max_nights) = self.max_nights {
            if max_nights < self.min_nights || max_nights > MAX_BOOKING_NIGHTS {
                return Err(InvalidBookingRules::MaxNights);
            }
        }
        if self.advance_notice_days < 0 {
            return Err(InvalidBookingRules::AdvanceNotice);
        }
        if let Some(max_advance_days) = self.max_advance_days {
            if max_advance_days <= self.advance_notice_days {
                return Err(InvalidBookingRules::MaxAdvance);
            }
        }
        if let Some(days) = &self.check_in_days {
            if days.is_empty() {
                return Err(InvalidBookingRules::CheckInDays);
            }
        }
        Ok(())
    }

    fn max_nights(&self) -> i64 {
        self.max_nights
            .unwrap_or(MAX_BOOKING_NIGHTS)
            .min(MAX_BOOKING_NIGHTS)
    }

    /// Checks that a stay can be booked at `today`, which should be the current
    /// date in the timezone of the `Listing`.
    pub fn check(&self, range: &DateRange, today: NaiveDate) -> Result<(), RuleViolation> {
        let days_ahead = days_between(today, range.start());
        if days_ahead < 0 {
            return Err(RuleViolation::CheckInInPast(range.start()));
        }
        if days_ahead < self.advance_notice_days {
            return Err(RuleViolation::TooShortNotice(self.advance_notice_days));
        }
        if let Some(max_advance_days) = self.max_advance_days {
            if days_ahead > max_advance_days {
                return Err(RuleViolation::TooFarAhead(max_advance_days));
            }
        }

        let nights = range.nights();
        if nights < self.min_nights {
            return Err(RuleViolation::TooFewNights(self.min_nights));
        }
        let max_nights = self.max_nights();
        if nights > max_nights {
            return Err(RuleViolation::TooManyNights(max_nights));
        }

        if let Some(days) = &self.check_in_days {
            let weekday = range.start().weekday();
            if !days.contains(&weekday) {
                return Err(RuleViolation::CheckInDayNotAllowed(weekday));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range(start: NaiveDate, nights: i64) -> DateRange {
        DateRange::new(start, start + chrono::Duration::days(nights)).unwrap()
    }

    #[test]
    fn default_rules_are_valid() {
        assert!(BookingRules::default().validate().is_ok());
    }

    #[test]
    fn rejects_invalid_rules() {
        let cases = vec![
            (
                BookingRules {
                    min_nights: 0,
                    ..Default::default()
                },
                InvalidBookingRules::MinNights,
            ),
            (
                BookingRules {
                    min_nights: 3,
                    max_nights: Some(2),
                    ..Default::default()
                },
                InvalidBookingRules::MaxNights,
            ),
            (
                BookingRules {
                    max_nights: Some(400),
                    ..Default::default()
                },
                InvalidBookingRules::MaxNights,
            ),
            (
                BookingRules {
                    advance_notice_days: -1,
                    ..Default::default()
                },
                InvalidBookingRules::AdvanceNotice,
            ),
            (
                BookingRules {
                    advance_notice_days: 10,
                    max_advance_days: Some(10),
                    ..Default::default()
                },
                InvalidBookingRules::MaxAdvance,
            ),
            (
                BookingRules {
                    check_in_days: Some(vec![]),
                    ..Default::default()
                },
                InvalidBookingRules::CheckInDays,
            ),
        ];

        for (rules, expected) in cases {
            assert_eq!(rules.validate(), Err(expected));
        }
    }

    #[test]
    fn checks_notice_and_horizon() {
        let today = date(2024, 6, 1);
        let rules = BookingRules {
            advance_notice_days: 2,
            max_advance_days: Some(30),
            ..Default::default()
        };

        assert_eq!(
            rules.check(&range(date(2024, 5, 31), 2), today),
            Err(RuleViolation::CheckInInPast(date(2024, 5, 31)))
        );
        assert_eq!(
            rules.check(&range(date(2024, 6, 2), 2), today),
            Err(RuleViolation::TooShortNotice(2))
        );
        assert!(rules.check(&range(date(2024, 6, 3), 2), today).is_ok());
        assert!(rules.check(&range(date(2024, 7, 1), 2), today).is_ok());
        assert_eq!(
            rules.check(&range(date(2024, 7, 2), 2), today),
            Err(RuleViolation::TooFarAhead(30))
        );
    }

    #[test]
    fn same_day_check_in_is_allowed_without_notice() {
        let today = date(2024, 6, 1);
        assert!(BookingRules::default()
            .check(&range(today, 1), today)
            .is_ok());
    }

    #[test]
    fn checks_length_of_stay() {
        let today = date(2024, 6, 1);
        let rules = BookingRules {
            min_nights: 3,
            max_nights: Some(7),
            ..Default::default()
        };
        assert_eq!(
            rules.check(&range(date(2024, 6, 10), 2), today),
            Err(RuleViolation::TooFewNights(3))
        );
        assert!(rules.check(&range(date(2024, 6, 10), 3), today).is_ok());
        assert!(rules.check(&range(date(2024, 6, 10), 7), today).is_ok());
        assert_eq!(
            rules.check(&range(date(2024, 6, 10), 8), today),
            Err(RuleViolation::TooManyNights(7))
        );

        let unbounded = BookingRules::default();
        assert_eq!(
            unbounded.check(&range(date(2024, 6, 10), 366), today),
            Err(RuleViolation::TooManyNights(MAX_BOOKING_NIGHTS))
        );
    }

    #[test]
    fn checks_check_in_weekday() {
        let today = date(2024, 6, 1);
        let rules = BookingRules {
            check_in_days: Some(vec![Weekday::Sat]),
            ..Default::default()
        };
        // 2024-06-08 is a Saturday
        assert!(rules.check(&range(date(2024, 6, 8), 7), today).is_ok());
        assert_eq!(
            rules.check(&range(date(2024, 6, 9), 7), today),
            Err(RuleViolation::CheckInDayNotAllowed(Weekday::Sun))
        );
    }
}
