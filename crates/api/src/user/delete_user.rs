use crate::shared::usecase::{execute, UseCase};
use crate::{error::SeabooError, shared::auth::protect_account_route};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::delete_user::*;
use seaboo_domain::{date::date_in_timezone, Account, Tz, User, ID};
use seaboo_infra::SeabooContext;

pub async fn delete_user_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<SeabooContext>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;

    let usecase = DeleteUserUseCase {
        account,
        user_id: path_params.user_id.clone(),
    };
    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Ok().json(APIResponse::new(user)))
        .map_err(|e| match e {
            UseCaseError::StorageError => SeabooError::InternalError,
            UseCaseError::UpcomingBookings(count) => SeabooError::Conflict(format!(
                "The user has {} upcoming bookings as customer or owner. Cancel them before deleting the user",
                count
            )),
            UseCaseError::UserNotFound => SeabooError::NotFound(format!(
                "A user with id: {}, was not found.",
                path_params.user_id
            )),
        })
}

#[derive(Debug)]
struct DeleteUserUseCase {
    account: Account,
    user_id: ID,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    StorageError,
    UserNotFound,
    UpcomingBookings(usize),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteUserUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteUser";

    /// Also removes the listings owned by the user together with their
    /// availability blocks and seasonal rates. Refused while the user has
    /// upcoming stays, either as customer or on one of the listings.
    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        let user = match ctx.repos.users.find(&self.user_id).await {
            Some(u) if u.account_id == self.account.id => u,
            _ => return Err(UseCaseError::UserNotFound),
        };
        let now = ctx.sys.get_timestamp_millis();

        let listings = ctx.repos.listings.find_by_owner(&user.id).await;
        let mut upcoming = 0;
        for listing in &listings {
            let today = date_in_timezone(now, &listing.timezone);
            upcoming += ctx
                .repos
                .bookings
                .find_by_listing(&listing.id, None)
                .await
                .iter()
                .filter(|b| b.is_upcoming(today))
                .count();
        }
        let today = date_in_timezone(now, &Tz::UTC);
        upcoming += ctx
            .repos
            .bookings
            .find_by_customer(&user.id)
            .await
            .iter()
            .filter(|b| b.is_upcoming(today))
            .count();
        if upcoming > 0 {
            return Err(UseCaseError::UpcomingBookings(upcoming));
        }

        for listing in &listings {
            if ctx.repos.blocks.delete_by_listing(&listing.id).await.is_err()
                || ctx.repos.rates.delete_by_listing(&listing.id).await.is_err()
                || ctx.repos.listings.delete(&listing.id).await.is_none()
            {
                return Err(UseCaseError::StorageError);
            }
        }

        ctx.repos
            .users
            .delete(&user.id)
            .await
            .ok_or(UseCaseError::StorageError)
    }
}
