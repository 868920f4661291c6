mod inmemory;
mod postgres;

pub use inmemory::InMemoryBookingRepo;
pub use postgres::PostgresBookingRepo;
use seaboo_domain::{AvailabilityBlock, Booking, BookingStatus, Conflict, DateRange, NaiveDate, ID};

#[async_trait::async_trait]
pub trait IBookingRepo: Send + Sync {
    /// Stores the `Booking` unless its dates overlap a holding `Booking` of the
    /// same `Listing` or one of the given blocks. Checking and inserting is
    /// atomic per `Listing`, so two requests for the same nights can never both
    /// succeed.
    async fn insert_if_available(
        &self,
        booking: &Booking,
        blocks: &[AvailabilityBlock],
    ) -> anyhow::Result<Option<Conflict>>;
    /// Stores the status change of `booking` only if the stored `Booking` is
    /// still in status `from`. Returns `false` when it was changed in the
    /// meantime, and nothing is written then.
    async fn update_status(&self, booking: &Booking, from: BookingStatus) -> anyhow::Result<bool>;
    async fn find(&self, booking_id: &ID) -> Option<Booking>;
    /// Bookings of a `Listing` in any status, optionally only those overlapping
    /// `range`, ordered by check-in
    async fn find_by_listing(&self, listing_id: &ID, range: Option<&DateRange>) -> Vec<Booking>;
    /// Bookings made by the given customer, latest check-in first
    async fn find_by_customer(&self, customer_id: &ID) -> Vec<Booking>;
    /// Pending bookings whose owner did not respond before `now`
    async fn find_expired_pending(&self, now: i64) -> Vec<Booking>;
    /// Confirmed bookings with a check-out date before `date`
    async fn find_confirmed_ending_before(&self, date: NaiveDate) -> Vec<Booking>;
}
