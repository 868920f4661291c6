use crate::{error::SeabooError, shared::auth::protect_public_account_route};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::get_listing_reviews::{APIResponse, PathParams};
use seaboo_infra::SeabooContext;

pub async fn get_listing_reviews_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_public_account_route(&http_req, &ctx).await?;

    match ctx.repos.listings.find(&path.listing_id).await {
        Some(listing) if listing.account_id == account.id => {
            let reviews = ctx.repos.reviews.find_by_listing(&listing.id).await;
            Ok(HttpResponse::Ok().json(APIResponse::new(reviews)))
        }
        _ => Err(SeabooError::NotFound(format!(
            "The listing with id: {}, was not found.",
            path.listing_id
        ))),
    }
}
