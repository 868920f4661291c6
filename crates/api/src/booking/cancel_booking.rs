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
use seaboo_api_structs::cancel_booking::*;
use seaboo_domain::{date::date_in_timezone, Booking, CancelledBy, InvalidTransition, Tz, ID};
use seaboo_infra::SeabooContext;

pub async fn cancel_booking_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let booking = account_can_modify_booking(&account, &path.booking_id, &ctx).await?;

    let usecase = CancelBookingUseCase {
        booking,
        cancelled_by: CancelledBy::Account,
    };

    execute(usecase, &ctx)
        .await
        .map(|booking| HttpResponse::Ok().json(APIResponse::new(booking)))
        .map_err(SeabooError::from)
}

/// The customer and the owner can both cancel
pub async fn cancel_booking_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;
    let booking = match ctx.repos.bookings.find(&path.booking_id).await {
        Some(booking) if booking.account_id == user.account_id && booking.is_party(&user.id) => {
            booking
        }
        _ => {
            return Err(SeabooError::NotFound(format!(
                "The booking with id: {}, was not found.",
                path.booking_id
            )))
        }
    };
    let cancelled_by = if booking.customer_id == user.id {
        CancelledBy::Customer
    } else {
        CancelledBy::Owner
    };

    let usecase = CancelBookingUseCase {
        booking,
        cancelled_by,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|booking| HttpResponse::Ok().json(APIResponse::new(booking)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => SeabooError::Unauthorized(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
struct CancelBookingUseCase {
    pub booking: Booking,
    pub cancelled_by: CancelledBy,
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
impl UseCase for CancelBookingUseCase {
    type Response = Booking;

    type Error = UseCaseError;

    const NAME: &'static str = "CancelBooking";

    /// The refund follows the cancellation policy the listing has at the time of cancelling
    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let (policy, timezone) = match ctx.repos.listings.find(&self.booking.listing_id).await {
            Some(listing) => (listing.cancellation_policy, listing.timezone),
            None => (Default::default(), Tz::UTC),
        };
        let today = date_in_timezone(now, &timezone);

        let mut booking = self.booking.clone();
        booking
            .cancel(self.cancelled_by, policy, today, now)
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

impl PermissionBoundary for CancelBookingUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CancelBooking]
    }
}
