use super::IBookingRepo;
use crate::repos::shared::inmemory_repo::*;
use seaboo_domain::{
    find_conflict, AvailabilityBlock, Booking, BookingStatus, Conflict, DateRange, NaiveDate, ID,
};
use std::cmp::Reverse;

pub struct InMemoryBookingRepo {
    bookings: std::sync::Mutex<Vec<Booking>>,
}

impl InMemoryBookingRepo {
    pub fn new() -> Self {
        Self {
            bookings: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IBookingRepo for InMemoryBookingRepo {
    async fn insert_if_available(
        &self,
        booking: &Booking,
        blocks: &[AvailabilityBlock],
    ) -> anyhow::Result<Option<Conflict>> {
        Ok(insert_unless(booking, &self.bookings, |bookings| {
            let same_listing = bookings
                .iter()
                .filter(|b| b.listing_id == booking.listing_id)
                .cloned()
                .collect::<Vec<_>>();
            find_conflict(&booking.range, &same_listing, blocks)
        }))
    }

    async fn update_status(
        &self,
        booking: &Booking,
        from: BookingStatus,
    ) -> anyhow::Result<bool> {
        Ok(save_if(booking, &self.bookings, |stored| stored.status == from))
    }

    async fn find(&self, booking_id: &ID) -> Option<Booking> {
        find(booking_id, &self.bookings)
    }

    async fn find_by_listing(&self, listing_id: &ID, range: Option<&DateRange>) -> Vec<Booking> {
        let mut bookings = find_by(&self.bookings, |b| {
            b.listing_id == *listing_id && range.map(|r| r.overlaps(&b.range)).unwrap_or(true)
        });
        bookings.sort_by_key(|b| b.range.start());
        bookings
    }

    async fn find_by_customer(&self, customer_id: &ID) -> Vec<Booking> {
        let mut bookings = find_by(&self.bookings, |b| b.customer_id == *customer_id);
        bookings.sort_by_key(|b| Reverse(b.range.start()));
        bookings
    }

    async fn find_expired_pending(&self, now: i64) -> Vec<Booking> {
        find_by(&self.bookings, |b| b.is_expired(now))
    }

    async fn find_confirmed_ending_before(&self, date: NaiveDate) -> Vec<Booking> {
        find_by(&self.bookings, |b| {
            b.status == BookingStatus::Confirmed && b.range.end() < date
        })
    }
}
