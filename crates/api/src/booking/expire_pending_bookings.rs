use super::subscribers::BookingsStatusWebhook;
use crate::shared::usecase::{Subscriber, UseCase};
use seaboo_domain::{Booking, BookingStatus};
use seaboo_infra::SeabooContext;
use tracing::{error, info};

/// Expires booking requests the owner did not answer in time, which
/// releases their nights
#[derive(Debug)]
pub struct ExpirePendingBookingsUseCase;

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for ExpirePendingBookingsUseCase {
    type Response = Vec<Booking>;

    type Error = UseCaseError;

    const NAME: &'static str = "ExpirePendingBookings";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let mut expired = Vec::new();

        for mut booking in ctx.repos.bookings.find_expired_pending(now).await {
            if booking.expire(now).is_err() {
                continue;
            }
            match ctx
                .repos
                .bookings
                .update_status(&booking, BookingStatus::Pending)
                .await
            {
                Ok(true) => expired.push(booking),
                Ok(false) => info!("Booking: {} changed before it could expire", booking.id),
                Err(e) => error!("Unable to expire booking: {}. Error: {:?}", booking.id, e),
            }
        }
        if !expired.is_empty() {
            info!("Expired {} pending bookings", expired.len());
        }

        Ok(expired)
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
        pricing, BookingParty, BookingStatus, DateRange, Listing, ListingKind, ID,
    };
    use seaboo_infra::FixedSys;
    use std::sync::Arc;

    #[actix_web::test]
    async fn expires_only_overdue_requests() {
        let mut ctx = SeabooContext::create_inmemory();
        let sys = Arc::new(FixedSys::new(1_000_000));
        ctx.sys = sys.clone();
        let listing = Listing::new(
            ID::default(),
            ID::default(),
            "Elan Impression 45".into(),
            ListingKind::Boat { max_guests: 10 },
            35_000,
            "EUR".into(),
            0,
        )
        .unwrap();
        let mut bookings = Vec::new();
        for (created, (start, end)) in [
            (0, ("2030-7-1", "2030-7-8")),
            (500_000, ("2030-7-8", "2030-7-15")),
        ] {
            let range = DateRange::parse(start, end).unwrap();
            let quote = pricing::quote(&listing, &[], &range, range.start());
            let booking = Booking::new(
                &listing,
                ID::default(),
                range,
                BookingParty {
                    guests: 4,
                    boat_length_cm: None,
                },
                &quote,
                created,
                600_000,
            );
            ctx.repos
                .bookings
                .insert_if_available(&booking, &[])
                .await
                .unwrap();
            bookings.push(booking);
        }

        let expired = execute(ExpirePendingBookingsUseCase, &ctx).await.unwrap();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, bookings[0].id);
        assert_eq!(
            ctx.repos.bookings.find(&bookings[0].id).await.unwrap().status,
            BookingStatus::Expired
        );
        assert_eq!(
            ctx.repos.bookings.find(&bookings[1].id).await.unwrap().status,
            BookingStatus::Pending
        );

        sys.advance(100_000);
        let expired = execute(ExpirePendingBookingsUseCase, &ctx).await.unwrap();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, bookings[1].id);
    }
}
