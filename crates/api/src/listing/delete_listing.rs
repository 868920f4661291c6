use crate::shared::{
    auth::{
        account_can_modify_listing, protect_account_route, protect_route,
        user_can_modify_listing, Permission,
    },
    usecase::{execute, execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
};
use crate::error::SeabooError;
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::delete_listing::{APIResponse, PathParams};
use seaboo_domain::{date::date_in_timezone, Listing};
use seaboo_infra::SeabooContext;

pub async fn delete_listing_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let listing = account_can_modify_listing(&account, &path.listing_id, &ctx).await?;

    execute(DeleteListingUseCase { listing }, &ctx)
        .await
        .map(|listing| HttpResponse::Ok().json(APIResponse::new(listing)))
        .map_err(SeabooError::from)
}

pub async fn delete_listing_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;
    let listing = user_can_modify_listing(&user, &path.listing_id, &ctx).await?;

    execute_with_policy(DeleteListingUseCase { listing }, &policy, &ctx)
        .await
        .map(|listing| HttpResponse::Ok().json(APIResponse::new(listing)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => SeabooError::Unauthorized(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
struct DeleteListingUseCase {
    pub listing: Listing,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    /// Guests are still expecting to stay on the listing
    UpcomingBookings(usize),
    StorageError,
}

impl From<UseCaseError> for SeabooError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UpcomingBookings(count) => Self::Conflict(format!(
                "The listing has {} upcoming bookings. Cancel them before deleting the listing",
                count
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteListingUseCase {
    type Response = Listing;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteListing";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        let today = date_in_timezone(ctx.sys.get_timestamp_millis(), &self.listing.timezone);
        let upcoming = ctx
            .repos
            .bookings
            .find_by_listing(&self.listing.id, None)
            .await
            .into_iter()
            .filter(|b| b.is_upcoming(today))
            .count();
        if upcoming > 0 {
            return Err(UseCaseError::UpcomingBookings(upcoming));
        }

        let listing = match ctx.repos.listings.delete(&self.listing.id).await {
            Some(listing) => listing,
            None => return Err(UseCaseError::StorageError),
        };
        if ctx.repos.blocks.delete_by_listing(&listing.id).await.is_err()
            || ctx.repos.rates.delete_by_listing(&listing.id).await.is_err()
        {
            return Err(UseCaseError::StorageError);
        }

        Ok(listing)
    }
}

impl PermissionBoundary for DeleteListingUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::DeleteListing]
    }
}
