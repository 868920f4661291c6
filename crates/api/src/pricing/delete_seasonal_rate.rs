use crate::shared::{
    auth::{
        account_can_modify_listing, protect_account_route, protect_route,
        user_can_modify_listing, Permission,
    },
    usecase::{execute, execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
};
use crate::error::SeabooError;
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::delete_seasonal_rate::*;
use seaboo_domain::{Listing, SeasonalRate, ID};
use seaboo_infra::SeabooContext;

pub async fn delete_seasonal_rate_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let listing = account_can_modify_listing(&account, &path.listing_id, &ctx).await?;

    let usecase = DeleteSeasonalRateUseCase {
        listing,
        rate_id: path.rate_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|rate| HttpResponse::Ok().json(APIResponse::new(rate)))
        .map_err(SeabooError::from)
}

pub async fn delete_seasonal_rate_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;
    let listing = user_can_modify_listing(&user, &path.listing_id, &ctx).await?;

    let usecase = DeleteSeasonalRateUseCase {
        listing,
        rate_id: path.rate_id.clone(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|rate| HttpResponse::Ok().json(APIResponse::new(rate)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => SeabooError::Unauthorized(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
struct DeleteSeasonalRateUseCase {
    pub listing: Listing,
    pub rate_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for SeabooError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(rate_id) => Self::NotFound(format!(
                "The seasonal rate with id: {}, was not found.",
                rate_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteSeasonalRateUseCase {
    type Response = SeasonalRate;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteSeasonalRate";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.rates.find(&self.rate_id).await {
            Some(rate) if rate.listing_id == self.listing.id => (),
            _ => return Err(UseCaseError::NotFound(self.rate_id.clone())),
        }
        ctx.repos
            .rates
            .delete(&self.rate_id)
            .await
            .ok_or(UseCaseError::StorageError)
    }
}

impl PermissionBoundary for DeleteSeasonalRateUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ManagePricing]
    }
}
