use super::subscribers::BookingsStatusWebhook;
use crate::shared::usecase::{Subscriber, UseCase};
use seaboo_domain::{date::date_in_timezone, Booking, BookingStatus, Tz};
use seaboo_infra::SeabooContext;
use tracing::{error, info};

/// Completes confirmed stays whose check-out date has passed (UTC).
/// Completed stays can be reviewed by the customer.
#[derive(Debug)]
pub struct CompleteBookingsUseCase;

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for CompleteBookingsUseCase {
    type Response = Vec<Booking>;

    type Error = UseCaseError;

    const NAME: &'static str = "CompleteBookings";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let today = date_in_timezone(now, &Tz::UTC);
        let mut completed = Vec::new();

        for mut booking in ctx.repos.bookings.find_confirmed_ending_before(today).await {
            if booking.complete(now).is_err() {
                continue;
            }
            match ctx
                .repos
                .bookings
                .update_status(&booking, BookingStatus::Confirmed)
                .await
            {
                Ok(true) => completed.push(booking),
                Ok(false) => info!("Booking: {} changed before it could complete", booking.id),
                Err(e) => error!("Unable to complete booking: {}. Error: {:?}", booking.id, e),
            }
        }
        if !completed.is_empty() {
            info!("Completed {} bookings", completed.len());
        }

        Ok(completed)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(BookingsStatusWebhook)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::usecase::execute;
    use seaboo_domain::{
        pricing, Account, BookingParty, BookingStatus, DateRange, Listing, ListingKind, ID,
    };
    use seaboo_infra::{FixedSys, RecordingWebhookSender};
    use std::sync::Arc;

    // 2024-07-08T10:00:00Z
    const NOW: i64 = 1_720_432_800_000;

    #[actix_web::test]
    async fn completes_stays_that_are_over() {
        let mut ctx = SeabooContext::create_inmemory();
        ctx.sys = Arc::new(FixedSys::new(NOW));
        let recorder = Arc::new(RecordingWebhookSender::new());
        ctx.webhooks = recorder.clone();
        let mut account = Account::default();
        account
            .settings
            .set_webhook_url(Some("https://marina.example.com/hooks".into()));
        ctx.repos.accounts.insert(&account).await.unwrap();
        let listing = Listing::new(
            account.id.clone(),
            ID::default(),
            "Bavaria C42".into(),
            ListingKind::Boat { max_guests: 8 },
            30_000,
            "EUR".into(),
            0,
        )
        .unwrap();

        let mut bookings = Vec::new();
        for (start, end) in [("2024-6-29", "2024-7-6"), ("2024-7-6", "2024-7-13")] {
            let range = DateRange::parse(start, end).unwrap();
            let quote = pricing::quote(&listing, &[], &range, range.start());
            let mut booking = Booking::new(
                &listing,
                ID::default(),
                range,
                BookingParty {
                    guests: 2,
                    boat_length_cm: None,
                },
                &quote,
                0,
                1000,
            );
            booking.confirm(0).unwrap();
            assert_eq!(
                ctx.repos
                    .bookings
                    .insert_if_available(&booking, &[])
                    .await
                    .unwrap(),
                None
            );
            bookings.push(booking);
        }

        let completed = execute(CompleteBookingsUseCase, &ctx).await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, bookings[0].id);
        assert_eq!(
            ctx.repos.bookings.find(&bookings[1].id).await.unwrap().status,
            BookingStatus::Confirmed
        );

        let sent = recorder.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].payload["event"], "booking.completed");
    }
}
