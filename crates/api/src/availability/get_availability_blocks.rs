use crate::{
    error::SeabooError,
    shared::auth::{
        account_can_modify_listing, protect_account_route, protect_route, user_can_modify_listing,
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::get_availability_blocks::*;
use seaboo_infra::SeabooContext;

pub async fn get_availability_blocks_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let listing = account_can_modify_listing(&account, &path.listing_id, &ctx).await?;

    let blocks = ctx.repos.blocks.find_by_listing(&listing.id, None).await;
    Ok(HttpResponse::Ok().json(APIResponse::new(blocks)))
}

pub async fn get_availability_blocks_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let (user, _) = protect_route(&http_req, &ctx).await?;
    let listing = user_can_modify_listing(&user, &path.listing_id, &ctx).await?;

    let blocks = ctx.repos.blocks.find_by_listing(&listing.id, None).await;
    Ok(HttpResponse::Ok().json(APIResponse::new(blocks)))
}
