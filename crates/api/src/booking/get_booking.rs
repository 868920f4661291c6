use crate::{
    error::SeabooError,
    shared::auth::{account_can_modify_booking, protect_account_route, protect_route},
};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::get_booking::*;
use seaboo_infra::SeabooContext;

pub async fn get_booking_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let booking = account_can_modify_booking(&account, &path.booking_id, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(booking)))
}

/// Both the customer and the owner can see the booking
pub async fn get_booking_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let (user, _) = protect_route(&http_req, &ctx).await?;

    match ctx.repos.bookings.find(&path.booking_id).await {
        Some(booking) if booking.account_id == user.account_id && booking.is_party(&user.id) => {
            Ok(HttpResponse::Ok().json(APIResponse::new(booking)))
        }
        _ => Err(SeabooError::NotFound(format!(
            "The booking with id: {}, was not found.",
            path.booking_id
        ))),
    }
}
