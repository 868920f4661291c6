use crate::{
    shared::entity::{Entity, ID},
    Booking, DateRange, Listing,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Owner-defined period during which a `Listing` can not be booked,
/// e.g. haul-out for maintenance or private use of the boat.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityBlock {
    pub id: ID,
    pub account_id: ID,
    pub listing_id: ID,
    pub range: DateRange,
    pub note: Option<String>,
    pub created: i64,
}

impl AvailabilityBlock {
    pub fn new(listing: &Listing, range: DateRange, note: Option<String>, created: i64) -> Self {
        Self {
            id: Default::default(),
            account_id: listing.account_id.clone(),
            listing_id: listing.id.clone(),
            range,
            note,
            created,
        }
    }
}

impl Entity for AvailabilityBlock {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// What is occupying a requested date range
#[derive(Debug, Clone, PartialEq)]
pub enum Conflict {
    Booking(ID),
    Block(ID),
}

/// Finds the first holding `Booking` or `AvailabilityBlock` that overlaps `range`.
/// Bookings that no longer hold their nights (cancelled, declined ...) are ignored.
pub fn find_conflict(
    range: &DateRange,
    bookings: &[Booking],
    blocks: &[AvailabilityBlock],
) -> Option<Conflict> {
    if let Some(booking) = bookings
        .iter()
        .find(|b| b.is_holding() && b.range.overlaps(range))
    {
        return Some(Conflict::Booking(booking.id.clone()));
    }
    blocks
        .iter()
        .find(|b| b.range.overlaps(range))
        .map(|b| Conflict::Block(b.id.clone()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DayStatus {
    Available,
    Booked {
        #[serde(rename = "bookingId")]
        booking_id: ID,
    },
    Blocked {
        #[serde(rename = "blockId")]
        block_id: ID,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub status: DayStatus,
}

/// Night by night availability of a `Listing` over a `DateRange`
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityCalendar {
    pub range: DateRange,
    pub days: Vec<CalendarDay>,
}

impl AvailabilityCalendar {
    /// A night covered both by a booking and a block is reported as booked
    pub fn build(range: DateRange, bookings: &[Booking], blocks: &[AvailabilityBlock]) -> Self {
        let holding = bookings
            .iter()
            .filter(|b| b.is_holding() && b.range.overlaps(&range))
            .collect::<Vec<_>>();
        let blocks = blocks
            .iter()
            .filter(|b| b.range.overlaps(&range))
            .collect::<Vec<_>>();

        let days = range
            .nights_iter()
            .map(|date| {
                let status = if let Some(booking) = holding.iter().find(|b| b.range.contains(date))
                {
                    DayStatus::Booked {
                        booking_id: booking.id.clone(),
                    }
                } else if let Some(block) = blocks.iter().find(|b| b.range.contains(date)) {
                    DayStatus::Blocked {
                        block_id: block.id.clone(),
                    }
                } else {
                    DayStatus::Available
                };
                CalendarDay { date, status }
            })
            .collect();

        Self { range, days }
    }

    pub fn is_available(&self) -> bool {
        self.days
            .iter()
            .all(|day| day.status == DayStatus::Available)
    }

    /// Maximal runs of consecutive available nights
    pub fn free_ranges(&self) -> Vec<DateRange> {
        let mut ranges = Vec::new();
        let mut run_start: Option<NaiveDate> = None;

        for day in &self.days {
            match (&day.status, run_start) {
                (DayStatus::Available, None) => run_start = Some(day.date),
                (DayStatus::Available, Some(_)) => (),
                (_, Some(start)) => {
                    if let Ok(range) = DateRange::new(start, day.date) {
                        ranges.push(range);
                    }
                    run_start = None;
                }
                (_, None) => (),
            }
        }
        if let Some(start) = run_start {
            if let Ok(range) = DateRange::new(start, self.range.end()) {
                ranges.push(range);
            }
        }

        ranges
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{pricing, BookingParty, CancelledBy, ListingKind};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn range(start: u32, end: u32) -> DateRange {
        DateRange::new(date(start), date(end)).unwrap()
    }

    fn listing() -> Listing {
        Listing::new(
            ID::default(),
            ID::default(),
            "Berth 7".into(),
            ListingKind::Mooring {
                max_boat_length_cm: 1500,
            },
            3_000,
            "EUR".into(),
            0,
        )
        .unwrap()
    }

    fn booking(listing: &Listing, range: DateRange) -> Booking {
        let quote = pricing::quote(listing, &[], &range, date(1));
        Booking::new(
            listing,
            ID::default(),
            range,
            BookingParty {
                guests: 1,
                boat_length_cm: Some(900),
            },
            &quote,
            0,
            1000,
        )
    }

    #[test]
    fn finds_conflicting_booking_and_block() {
        let l = listing();
        let b = booking(&l, range(10, 14));
        let block = AvailabilityBlock::new(&l, range(20, 25), None, 0);
        let bookings = vec![b.clone()];
        let blocks = vec![block.clone()];

        assert_eq!(
            find_conflict(&range(12, 16), &bookings, &blocks),
            Some(Conflict::Booking(b.id.clone()))
        );
        assert_eq!(
            find_conflict(&range(24, 26), &bookings, &blocks),
            Some(Conflict::Block(block.id.clone()))
        );
        // Back to back
        assert_eq!(find_conflict(&range(14, 20), &bookings, &blocks), None);
        assert_eq!(find_conflict(&range(5, 10), &bookings, &blocks), None);
    }

    #[test]
    fn cancelled_bookings_release_their_nights() {
        let l = listing();
        let mut b = booking(&l, range(10, 14));
        b.cancel(
            CancelledBy::Customer,
            l.cancellation_policy,
            date(1),
            10,
        )
        .unwrap();
        assert_eq!(find_conflict(&range(10, 14), &[b], &[]), None);
    }

    #[test]
    fn builds_calendar() {
        let l = listing();
        let b = booking(&l, range(3, 5));
        let block = AvailabilityBlock::new(&l, range(4, 7), Some("haul-out".into()), 0);
        let calendar = AvailabilityCalendar::build(range(1, 9), &[b.clone()], &[block.clone()]);

        assert_eq!(calendar.days.len(), 8);
        let statuses = calendar
            .days
            .iter()
            .map(|d| d.status.clone())
            .collect::<Vec<_>>();
        let booked = DayStatus::Booked {
            booking_id: b.id.clone(),
        };
        let blocked = DayStatus::Blocked {
            block_id: block.id.clone(),
        };
        assert_eq!(
            statuses,
            vec![
                DayStatus::Available,
                DayStatus::Available,
                booked.clone(),
                booked,
                blocked.clone(),
                blocked,
                DayStatus::Available,
                DayStatus::Available,
            ]
        );
        assert!(!calendar.is_available());
        assert_eq!(calendar.free_ranges(), vec![range(1, 3), range(7, 9)]);
    }

    #[test]
    fn free_ranges_of_empty_calendar() {
        let calendar = AvailabilityCalendar::build(range(1, 31), &[], &[]);
        assert!(calendar.is_available());
        assert_eq!(calendar.free_ranges(), vec![range(1, 31)]);

        let l = listing();
        let b = booking(&l, range(1, 31));
        let calendar = AvailabilityCalendar::build(range(1, 31), &[b], &[]);
        assert!(calendar.free_ranges().is_empty());
    }
}
