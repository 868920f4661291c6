use crate::{error::SeabooError, shared::auth::protect_public_account_route};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::get_seasonal_rates::*;
use seaboo_infra::SeabooContext;

pub async fn get_seasonal_rates_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_public_account_route(&http_req, &ctx).await?;
    match ctx.repos.listings.find(&path.listing_id).await {
        Some(listing) if listing.account_id == account.id => (),
        _ => {
            return Err(SeabooError::NotFound(format!(
                "The listing with id: {}, was not found.",
                path.listing_id
            )))
        }
    }

    let rates = ctx.repos.rates.find_by_listing(&path.listing_id).await;
    Ok(HttpResponse::Ok().json(APIResponse::new(rates)))
}
