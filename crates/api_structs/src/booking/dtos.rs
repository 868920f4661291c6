use seaboo_domain::{Booking, BookingParty, BookingStatus, Cancellation, NaiveDate, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDTO {
    pub id: ID,
    pub account_id: ID,
    pub listing_id: ID,
    pub owner_id: ID,
    pub customer_id: ID,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub nights: i64,
    pub party: BookingParty,
    pub status: BookingStatus,
    pub total_price: i64,
    pub currency: String,
    pub expires_at: Option<i64>,
    pub cancellation: Option<Cancellation>,
    pub created: i64,
    pub updated: i64,
}

impl BookingDTO {
    pub fn new(booking: Booking) -> Self {
        Self {
            id: booking.id,
            account_id: booking.account_id,
            listing_id: booking.listing_id,
            owner_id: booking.owner_id,
            customer_id: booking.customer_id,
            start_date: booking.range.start(),
            end_date: booking.range.end(),
            nights: booking.range.nights(),
            party: booking.party,
            status: booking.status,
            total_price: booking.total_price,
            currency: booking.currency,
            expires_at: booking.expires_at,
            cancellation: booking.cancellation,
            created: booking.created,
            updated: booking.updated,
        }
    }
}

/// Body of the webhook sent to the `Account` whenever a `Booking` changes status
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWebhookDTO {
    /// e.g. `booking.created` or `booking.cancelled`
    pub event: String,
    pub booking: BookingDTO,
}

impl BookingWebhookDTO {
    pub fn new(event: &str, booking: Booking) -> Self {
        Self {
            event: event.to_string(),
            booking: BookingDTO::new(booking),
        }
    }
}
