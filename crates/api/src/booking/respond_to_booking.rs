use super::subscribers::BookingStatusWebhook;
use crate::shared::{
    auth::{account_can_modify_booking, protect_account_route, protect_route, Permission},
    usecase::{
        execute, execute_with_policy, PermissionBoundary, Subscriber, UseCase,
        UseCaseErrorContainer,
    },
};
use crate::error::SeabooError;
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::{confirm_booking, decline_booking};
use seaboo_domain::{Booking, InvalidTransition, ID};
use seaboo_infra::SeabooContext;

/// The owner's answer to a pending booking request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Answer {
    Confirm,
    Decline,
}

async fn respond_admin(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    booking_id: &ID,
    answer: Answer,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let booking = account_can_modify_booking(&account, booking_id, &ctx).await?;

    execute(RespondToBookingUseCase { booking, answer }, &ctx)
        .await
        .map(|booking| HttpResponse::Ok().json(confirm_booking::APIResponse::new(booking)))
        .map_err(SeabooError::from)
}

async fn respond(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    booking_id: &ID,
    answer: Answer,
) -> Result<HttpResponse, SeabooError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;
    let booking = match ctx.repos.bookings.find(booking_id).await {
        Some(booking) if booking.account_id == user.account_id && booking.owner_id == user.id => {
            booking
        }
        _ => {
            return Err(SeabooError::NotFound(format!(
                "The booking with id: {}, was not found.",
                booking_id
            )))
        }
    };

    execute_with_policy(RespondToBookingUseCase { booking, answer }, &policy, &ctx)
        .await
        .map(|booking| HttpResponse::Ok().json(decline_booking::APIResponse::new(booking)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => SeabooError::Unauthorized(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

pub async fn confirm_booking_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<confirm_booking::PathParams>,
) -> Result<HttpResponse, SeabooError> {
    respond_admin(http_req, ctx, &path.booking_id, Answer::Confirm).await
}

pub async fn confirm_booking_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<confirm_booking::PathParams>,
) -> Result<HttpResponse, SeabooError> {
    respond(http_req, ctx, &path.booking_id, Answer::Confirm).await
}

pub async fn decline_booking_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<decline_booking::PathParams>,
) -> Result<HttpResponse, SeabooError> {
    respond_admin(http_req, ctx, &path.booking_id, Answer::Decline).await
}

pub async fn decline_booking_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<decline_booking::PathParams>,
) -> Result<HttpResponse, SeabooError> {
    respond(http_req, ctx, &path.booking_id, Answer::Decline).await
}

#[derive(Debug)]
struct RespondToBookingUseCase {
    pub booking: Booking,
    pub answer: Answer,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    InvalidTransition(InvalidTransition),
    ChangedMeanwhile(ID),
    StorageError,
}

impl From<UseCaseError> for SeabooError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidTransition(e) => Self::Conflict(e.to_string()),
            UseCaseError::ChangedMeanwhile(id) => Self::Conflict(format!(
                "The booking with id: {}, was changed by someone else. Fetch it and try again.",
                id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RespondToBookingUseCase {
    type Response = Booking;

    type Error = UseCaseError;

    const NAME: &'static str = "RespondToBooking";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let mut booking = self.booking.clone();
        match self.answer {
            Answer::Confirm => booking.confirm(now),
            Answer::Decline => booking.decline(now),
        }
        .map_err(UseCaseError::InvalidTransition)?;

        match ctx
            .repos
            .bookings
            .update_status(&booking, self.booking.status)
            .await
        {
            Ok(true) => Ok(booking),
            Ok(false) => Err(UseCaseError::ChangedMeanwhile(booking.id)),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(BookingStatusWebhook)]
    }
}

impl PermissionBoundary for RespondToBookingUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::RespondToBooking]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seaboo_domain::{
        pricing, BookingParty, BookingStatus, CancellationPolicy, CancelledBy, DateRange, Listing,
        ListingKind, NaiveDate,
    };
    use seaboo_infra::FixedSys;
    use std::sync::Arc;

    // 2024-06-01T08:00:00Z
    const NOW: i64 = 1_717_228_800_000;

    async fn setup() -> (SeabooContext, Arc<FixedSys>, Booking) {
        let mut ctx = SeabooContext::create_inmemory();
        let sys = Arc::new(FixedSys::new(NOW));
        ctx.sys = sys.clone();
        let listing = Listing::new(
            ID::default(),
            ID::default(),
            "Pontoon A, berth 3".into(),
            ListingKind::Mooring {
                max_boat_length_cm: 1500,
            },
            4_000,
            "EUR".into(),
            NOW,
        )
        .unwrap();
        let range = DateRange::parse("2024-7-1", "2024-7-8").unwrap();
        let quote = pricing::quote(&listing, &[], &range, range.start());
        let booking = Booking::new(
            &listing,
            ID::default(),
            range,
            BookingParty {
                guests: 2,
                boat_length_cm: Some(1200),
            },
            &quote,
            NOW,
            ctx.config.pending_booking_ttl,
        );
        ctx.repos
            .bookings
            .insert_if_available(&booking, &[])
            .await
            .unwrap();
        (ctx, sys, booking)
    }

    #[actix_web::test]
    async fn confirms_pending_booking_once() {
        let (ctx, _, booking) = setup().await;

        let mut usecase = RespondToBookingUseCase {
            booking,
            answer: Answer::Confirm,
        };
        let confirmed = usecase.execute(&ctx).await.unwrap();
        assert_eq!(confirmed.status, BookingStatus::Confirmed);
        assert_eq!(confirmed.expires_at, None);
        assert_eq!(
            ctx.repos.bookings.find(&confirmed.id).await,
            Some(confirmed.clone())
        );

        let mut usecase = RespondToBookingUseCase {
            booking: confirmed,
            answer: Answer::Decline,
        };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidTransition(InvalidTransition {
                from: BookingStatus::Confirmed,
                to: BookingStatus::Declined,
            }))
        );
    }

    #[actix_web::test]
    async fn rejects_confirming_expired_request() {
        let (ctx, sys, booking) = setup().await;
        sys.advance(ctx.config.pending_booking_ttl);

        let mut usecase = RespondToBookingUseCase {
            booking: booking.clone(),
            answer: Answer::Confirm,
        };
        assert!(usecase.execute(&ctx).await.is_err());

        let mut usecase = RespondToBookingUseCase {
            booking,
            answer: Answer::Decline,
        };
        assert_eq!(
            usecase.execute(&ctx).await.unwrap().status,
            BookingStatus::Declined
        );
    }

    #[actix_web::test]
    async fn confirming_a_cancelled_request_does_not_double_book() {
        let (ctx, _, booking) = setup().await;

        let mut cancelled = booking.clone();
        cancelled
            .cancel(
                CancelledBy::Customer,
                CancellationPolicy::default(),
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                NOW,
            )
            .unwrap();
        assert!(ctx
            .repos
            .bookings
            .update_status(&cancelled, BookingStatus::Pending)
            .await
            .unwrap());

        let mut other = booking.clone();
        other.id = ID::default();
        other.customer_id = ID::default();
        assert_eq!(
            ctx.repos
                .bookings
                .insert_if_available(&other, &[])
                .await
                .unwrap(),
            None
        );

        // The owner answers the request as it was before the cancellation
        let mut usecase = RespondToBookingUseCase {
            booking: booking.clone(),
            answer: Answer::Confirm,
        };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::ChangedMeanwhile(booking.id.clone()))
        );

        let stored = ctx.repos.bookings.find(&booking.id).await.unwrap();
        assert_eq!(stored.status, BookingStatus::Cancelled);
        assert!(stored.cancellation.is_some());
        let holding = ctx
            .repos
            .bookings
            .find_by_listing(&booking.listing_id, Some(&booking.range))
            .await
            .into_iter()
            .filter(|b| b.is_holding())
            .collect::<Vec<_>>();
        assert_eq!(holding, vec![other]);
    }
}
