use crate::shared::usecase::{Subscriber, UseCase};
use seaboo_api_structs::dtos::BookingWebhookDTO;
use seaboo_domain::Booking;
use seaboo_infra::SeabooContext;
use tracing::warn;

pub const BOOKING_CREATED: &str = "booking.created";

/// `booking.confirmed`, `booking.cancelled` ... after the current status
fn status_event(booking: &Booking) -> String {
    format!("booking.{}", booking.status)
}

/// Posts the booking to the webhook of its `Account`, if one is configured.
/// Failed deliveries are logged and not retried.
pub async fn send_booking_webhook(event: &str, booking: &Booking, ctx: &SeabooContext) {
    let account = match ctx.repos.accounts.find(&booking.account_id).await {
        Some(account) => account,
        None => return,
    };
    let webhook = match &account.settings.webhook {
        Some(webhook) => webhook,
        None => return,
    };

    let payload = match serde_json::to_value(BookingWebhookDTO::new(event, booking.clone())) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Unable to serialize booking webhook: {:?}", e);
            return;
        }
    };
    if let Err(e) = ctx.webhooks.send(webhook, payload).await {
        warn!(
            "Unable to deliver {} for booking: {} to the account webhook: {:?}",
            event, booking.id, e
        );
    }
}

/// Notifies the account that a new booking was made
pub struct BookingCreatedWebhook;

#[async_trait::async_trait(?Send)]
impl<U: UseCase<Response = Booking>> Subscriber<U> for BookingCreatedWebhook {
    async fn notify(&self, booking: &U::Response, ctx: &SeabooContext) {
        send_booking_webhook(BOOKING_CREATED, booking, ctx).await;
    }
}

/// Notifies the account about the new status of a booking
pub struct BookingStatusWebhook;

#[async_trait::async_trait(?Send)]
impl<U: UseCase<Response = Booking>> Subscriber<U> for BookingStatusWebhook {
    async fn notify(&self, booking: &U::Response, ctx: &SeabooContext) {
        send_booking_webhook(&status_event(booking), booking, ctx).await;
    }
}

/// Same as `BookingStatusWebhook` for use cases changing many bookings at once
pub struct BookingsStatusWebhook;

#[async_trait::async_trait(?Send)]
impl<U: UseCase<Response = Vec<Booking>>> Subscriber<U> for BookingsStatusWebhook {
    async fn notify(&self, bookings: &U::Response, ctx: &SeabooContext) {
        for booking in bookings {
            send_booking_webhook(&status_event(booking), booking, ctx).await;
        }
    }
}
