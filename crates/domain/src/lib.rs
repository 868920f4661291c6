mod account;
mod availability;
mod booking;
mod booking_rules;
pub mod date;
mod date_range;
mod listing;
pub mod pricing;
mod review;
mod shared;
mod user;

pub use account::{Account, AccountSettings, AccountWebhookSettings, PEMKey};
pub use availability::{
    find_conflict, AvailabilityBlock, AvailabilityCalendar, CalendarDay, Conflict, DayStatus,
};
pub use booking::{
    Booking, BookingStatus, Cancellation, CancellationPolicy, CancelledBy, InvalidTransition,
};
pub use booking_rules::{BookingRules, InvalidBookingRules, RuleViolation, MAX_BOOKING_NIGHTS};
pub use chrono::{NaiveDate, Weekday};
pub use chrono_tz::Tz;
pub use date_range::{DateRange, InvalidDateRange};
pub use listing::{BookingParty, InvalidListing, Listing, ListingKind, PartyMismatch};
pub use pricing::{
    Discount, DiscountKind, DiscountStacking, NightlyPrice, PriceQuote, PriceSource,
    PricingError, SeasonalRate, MAX_PRICE,
};
pub use review::{InvalidReview, RatingSummary, Review};
pub use shared::entity::{Entity, ID};
pub use shared::metadata::{is_valid_metadata, Meta, Metadata};
pub use user::User;
