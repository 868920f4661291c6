use crate::{
    date::days_between,
    shared::entity::{Entity, ID},
    BookingParty, DateRange, Listing, PriceQuote,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingStatus {
    /// Waiting for the owner to confirm or decline
    Pending,
    Confirmed,
    Declined,
    Cancelled,
    /// The owner did not respond in time
    Expired,
    /// The stay is over
    Completed,
}

impl BookingStatus {
    /// Whether a `Booking` in this status keeps its nights reserved
    pub fn is_holding(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Declined)
                | (Pending, Cancelled)
                | (Pending, Expired)
                | (Confirmed, Cancelled)
                | (Confirmed, Completed)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Declined => "declined",
            Self::Cancelled => "cancelled",
            Self::Expired => "expired",
            Self::Completed => "completed",
        }
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "declined" => Ok(Self::Declined),
            "cancelled" => Ok(Self::Cancelled),
            "expired" => Ok(Self::Expired),
            "completed" => Ok(Self::Completed),
            _ => Err(anyhow::Error::msg(format!("Unknown booking status: {}", s))),
        }
    }
}

/// How much of the price a customer gets back when cancelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CancellationPolicy {
    /// Full refund until 1 day before check-in
    Flexible,
    /// Full refund until 5 days before check-in, 50% after that
    Moderate,
    /// 50% refund until 7 days before check-in, nothing after that
    Strict,
}

impl Default for CancellationPolicy {
    fn default() -> Self {
        Self::Moderate
    }
}

impl CancellationPolicy {
    pub fn refund_amount(&self, total: i64, check_in: NaiveDate, today: NaiveDate) -> i64 {
        let days_before = days_between(today, check_in);
        match self {
            Self::Flexible if days_before >= 1 => total,
            Self::Flexible => 0,
            Self::Moderate if days_before >= 5 => total,
            Self::Moderate => total / 2,
            Self::Strict if days_before >= 7 => total / 2,
            Self::Strict => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CancelledBy {
    Customer,
    Owner,
    Account,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cancellation {
    pub by: CancelledBy,
    pub refund_amount: i64,
    pub at: i64,
}

#[derive(Debug, Error, PartialEq)]
#[error("A booking can not go from {from} to {to}")]
pub struct InvalidTransition {
    pub from: BookingStatus,
    pub to: BookingStatus,
}

/// A customer's reservation of a `Listing` for a `DateRange`
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: ID,
    pub account_id: ID,
    pub listing_id: ID,
    pub owner_id: ID,
    pub customer_id: ID,
    pub range: DateRange,
    pub party: BookingParty,
    pub status: BookingStatus,
    /// Price agreed on when the booking was made, in minor currency units
    pub total_price: i64,
    pub currency: String,
    /// A `Pending` booking expires at this timestamp if the owner does not respond
    pub expires_at: Option<i64>,
    pub cancellation: Option<Cancellation>,
    pub created: i64,
    pub updated: i64,
}

impl Booking {
    pub fn new(
        listing: &Listing,
        customer_id: ID,
        range: DateRange,
        party: BookingParty,
        quote: &PriceQuote,
        now: i64,
        pending_ttl: i64,
    ) -> Self {
        let (status, expires_at) = if listing.rules.instant_book {
            (BookingStatus::Confirmed, None)
        } else {
            (BookingStatus::Pending, Some(now + pending_ttl))
        };
        Self {
            id: Default::default(),
            account_id: listing.account_id.clone(),
            listing_id: listing.id.clone(),
            owner_id: listing.owner_id.clone(),
            customer_id,
            range,
            party,
            status,
            total_price: quote.total,
            currency: quote.currency.clone(),
            expires_at,
            cancellation: None,
            created: now,
            updated: now,
        }
    }

    pub fn is_holding(&self) -> bool {
        self.status.is_holding()
    }

    /// Holding nights that are not over yet as of `today`
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.is_holding() && self.range.end() > today
    }

    /// Whether the user is either the customer or the owner
    pub fn is_party(&self, user_id: &ID) -> bool {
        self.customer_id == *user_id || self.owner_id == *user_id
    }

    pub fn is_expired(&self, now: i64) -> bool {
        self.status == BookingStatus::Pending && matches!(self.expires_at, Some(ts) if ts <= now)
    }

    fn transition(&mut self, next: BookingStatus, now: i64) -> Result<(), InvalidTransition> {
        if !self.status.can_transition_to(next) {
            return Err(InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.updated = now;
        if next != BookingStatus::Pending {
            self.expires_at = None;
        }
        Ok(())
    }

    pub fn confirm(&mut self, now: i64) -> Result<(), InvalidTransition> {
        if self.is_expired(now) {
            return Err(InvalidTransition {
                from: BookingStatus::Expired,
                to: BookingStatus::Confirmed,
            });
        }
        self.transition(BookingStatus::Confirmed, now)
    }

    pub fn decline(&mut self, now: i64) -> Result<(), InvalidTransition> {
        self.transition(BookingStatus::Declined, now)
    }

    pub fn expire(&mut self, now: i64) -> Result<(), InvalidTransition> {
        self.transition(BookingStatus::Expired, now)
    }

    pub fn complete(&mut self, now: i64) -> Result<(), InvalidTransition> {
        self.transition(BookingStatus::Completed, now)
    }

    /// Cancels the booking and records the refund. Customers are refunded
    /// according to the `CancellationPolicy`, except for requests the owner never
    /// confirmed. Cancellations by the owner or the account are refunded in full.
    pub fn cancel(
        &mut self,
        by: CancelledBy,
        policy: CancellationPolicy,
        today: NaiveDate,
        now: i64,
    ) -> Result<&Cancellation, InvalidTransition> {
        let was_pending = self.status == BookingStatus::Pending;
        self.transition(BookingStatus::Cancelled, now)?;

        let refund_amount = match by {
            CancelledBy::Customer if !was_pending => {
                policy.refund_amount(self.total_price, self.range.start(), today)
            }
            _ => self.total_price,
        };
        Ok(self.cancellation.insert(Cancellation {
            by,
            refund_amount,
            at: now,
        }))
    }
}

impl Entity for Booking {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{pricing, ListingKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn listing(instant_book: bool) -> Listing {
        let mut listing = Listing::new(
            ID::default(),
            ID::default(),
            "Hanse 388".into(),
            ListingKind::Boat { max_guests: 6 },
            10_000,
            "EUR".into(),
            0,
        )
        .unwrap();
        listing.rules.instant_book = instant_book;
        listing
    }

    fn booking(instant_book: bool) -> Booking {
        let listing = listing(instant_book);
        let range = DateRange::new(date(2024, 7, 10), date(2024, 7, 14)).unwrap();
        let quote = pricing::quote(&listing, &[], &range, date(2024, 6, 1));
        Booking::new(
            &listing,
            ID::default(),
            range,
            BookingParty {
                guests: 2,
                boat_length_cm: None,
            },
            &quote,
            1000,
            500,
        )
    }

    #[test]
    fn instant_book_confirms_right_away() {
        let b = booking(true);
        assert_eq!(b.status, BookingStatus::Confirmed);
        assert_eq!(b.expires_at, None);
        assert_eq!(b.total_price, 40_000);

        let b = booking(false);
        assert_eq!(b.status, BookingStatus::Pending);
        assert_eq!(b.expires_at, Some(1500));
        assert!(b.is_holding());
    }

    #[test]
    fn follows_status_machine() {
        let mut b = booking(false);
        assert!(b.complete(1100).is_err());
        assert!(b.confirm(1100).is_ok());
        assert_eq!(b.expires_at, None);
        assert_eq!(
            b.decline(1200),
            Err(InvalidTransition {
                from: BookingStatus::Confirmed,
                to: BookingStatus::Declined
            })
        );
        assert!(b.complete(1300).is_ok());
        assert!(!b.is_holding());
        assert!(b
            .cancel(
                CancelledBy::Owner,
                CancellationPolicy::Flexible,
                date(2024, 7, 20),
                1400
            )
            .is_err());
    }

    #[test]
    fn upcoming_until_check_out() {
        let mut b = booking(false);
        assert!(b.is_upcoming(date(2024, 6, 1)));
        assert!(b.is_upcoming(date(2024, 7, 13)));
        assert!(!b.is_upcoming(date(2024, 7, 14)));
        b.decline(1100).unwrap();
        assert!(!b.is_upcoming(date(2024, 6, 1)));
    }

    #[test]
    fn expired_request_can_not_be_confirmed() {
        let mut b = booking(false);
        assert!(b.is_expired(1500));
        assert!(b.confirm(1500).is_err());
        assert!(b.expire(1500).is_ok());
        assert_eq!(b.status, BookingStatus::Expired);
        assert!(!b.is_holding());
    }

    #[test]
    fn refunds_follow_cancellation_policy() {
        let check_in = date(2024, 7, 10);
        let total = 1000;
        let cases = vec![
            (CancellationPolicy::Flexible, date(2024, 7, 9), 1000),
            (CancellationPolicy::Flexible, date(2024, 7, 10), 0),
            (CancellationPolicy::Moderate, date(2024, 7, 5), 1000),
            (CancellationPolicy::Moderate, date(2024, 7, 6), 500),
            (CancellationPolicy::Strict, date(2024, 7, 3), 500),
            (CancellationPolicy::Strict, date(2024, 7, 4), 0),
        ];
        for (policy, today, expected) in cases {
            assert_eq!(
                policy.refund_amount(total, check_in, today),
                expected,
                "{:?} at {}",
                policy,
                today
            );
        }
    }

    #[test]
    fn customer_cancellation_uses_policy_once_confirmed() {
        let mut b = booking(true);
        let cancellation = b
            .cancel(
                CancelledBy::Customer,
                CancellationPolicy::Strict,
                date(2024, 7, 8),
                2000,
            )
            .unwrap()
            .clone();
        assert_eq!(cancellation.refund_amount, 0);
        assert_eq!(b.status, BookingStatus::Cancelled);
        assert_eq!(b.cancellation, Some(cancellation));
    }

    #[test]
    fn pending_and_owner_cancellations_refund_everything() {
        let mut b = booking(false);
        let refund = b
            .cancel(
                CancelledBy::Customer,
                CancellationPolicy::Strict,
                date(2024, 7, 9),
                1100,
            )
            .unwrap()
            .refund_amount;
        assert_eq!(refund, b.total_price);

        let mut b = booking(true);
        let refund = b
            .cancel(
                CancelledBy::Owner,
                CancellationPolicy::Strict,
                date(2024, 7, 9),
                1100,
            )
            .unwrap()
            .refund_amount;
        assert_eq!(refund, b.total_price);
    }

    #[test]
    fn parses_statuses() {
        for status in &[
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Declined,
            BookingStatus::Cancelled,
            BookingStatus::Expired,
            BookingStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<BookingStatus>().unwrap(), *status);
        }
        assert!("unknown".parse::<BookingStatus>().is_err());
    }
}
