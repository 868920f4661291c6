use crate::shared::{
    auth::{
        account_can_modify_listing, protect_account_route, protect_route,
        user_can_modify_listing, Permission,
    },
    usecase::{execute, execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
};
use crate::error::SeabooError;
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::delete_availability_block::*;
use seaboo_domain::{AvailabilityBlock, Listing, ID};
use seaboo_infra::SeabooContext;

pub async fn delete_availability_block_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let listing = account_can_modify_listing(&account, &path.listing_id, &ctx).await?;

    let usecase = DeleteAvailabilityBlockUseCase {
        listing,
        block_id: path.block_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|block| HttpResponse::Ok().json(APIResponse::new(block)))
        .map_err(SeabooError::from)
}

pub async fn delete_availability_block_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;
    let listing = user_can_modify_listing(&user, &path.listing_id, &ctx).await?;

    let usecase = DeleteAvailabilityBlockUseCase {
        listing,
        block_id: path.block_id.clone(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|block| HttpResponse::Ok().json(APIResponse::new(block)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => SeabooError::Unauthorized(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
struct DeleteAvailabilityBlockUseCase {
    pub listing: Listing,
    pub block_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for SeabooError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(block_id) => Self::NotFound(format!(
                "The availability block with id: {}, was not found.",
                block_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteAvailabilityBlockUseCase {
    type Response = AvailabilityBlock;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteAvailabilityBlock";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.blocks.find(&self.block_id).await {
            Some(block) if block.listing_id == self.listing.id => (),
            _ => return Err(UseCaseError::NotFound(self.block_id.clone())),
        }
        ctx.repos
            .blocks
            .delete(&self.block_id)
            .await
            .ok_or(UseCaseError::StorageError)
    }
}

impl PermissionBoundary for DeleteAvailabilityBlockUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ManageAvailability]
    }
}
