use crate::{
    error::SeabooError,
    shared::auth::{account_can_modify_user, protect_account_route, protect_route},
};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::{get_my_listings, get_user_listings};
use seaboo_infra::SeabooContext;

pub async fn get_user_listings_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<get_user_listings::PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let user = account_can_modify_user(&account, &path.user_id, &ctx).await?;

    let listings = ctx.repos.listings.find_by_owner(&user.id).await;
    Ok(HttpResponse::Ok().json(get_user_listings::APIResponse::new(listings)))
}

pub async fn get_my_listings_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
) -> Result<HttpResponse, SeabooError> {
    let (user, _) = protect_route(&http_req, &ctx).await?;

    let listings = ctx.repos.listings.find_by_owner(&user.id).await;
    Ok(HttpResponse::Ok().json(get_my_listings::APIResponse::new(listings)))
}
