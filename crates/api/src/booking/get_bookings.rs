use crate::{
    error::SeabooError,
    shared::{
        auth::{
            account_can_modify_listing, account_can_modify_user, protect_account_route,
            protect_route, user_can_modify_listing,
        },
        parse_date_range,
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::{get_listing_bookings, get_my_bookings, get_user_bookings};
use seaboo_domain::DateRange;
use seaboo_infra::SeabooContext;

fn parse_optional_range(
    query: &get_listing_bookings::QueryParams,
) -> Result<Option<DateRange>, SeabooError> {
    match (&query.start_date, &query.end_date) {
        (Some(start), Some(end)) => parse_date_range(start, end).map(Some),
        (None, None) => Ok(None),
        _ => Err(SeabooError::BadClientData(
            "Either both startDate and endDate or none of them have to be given".into(),
        )),
    }
}

pub async fn get_listing_bookings_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<get_listing_bookings::PathParams>,
    query: web::Query<get_listing_bookings::QueryParams>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let listing = account_can_modify_listing(&account, &path.listing_id, &ctx).await?;
    let range = parse_optional_range(&query)?;

    let bookings = ctx
        .repos
        .bookings
        .find_by_listing(&listing.id, range.as_ref())
        .await;
    Ok(HttpResponse::Ok().json(get_listing_bookings::APIResponse::new(bookings)))
}

pub async fn get_listing_bookings_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<get_listing_bookings::PathParams>,
    query: web::Query<get_listing_bookings::QueryParams>,
) -> Result<HttpResponse, SeabooError> {
    let (user, _) = protect_route(&http_req, &ctx).await?;
    let listing = user_can_modify_listing(&user, &path.listing_id, &ctx).await?;
    let range = parse_optional_range(&query)?;

    let bookings = ctx
        .repos
        .bookings
        .find_by_listing(&listing.id, range.as_ref())
        .await;
    Ok(HttpResponse::Ok().json(get_listing_bookings::APIResponse::new(bookings)))
}

pub async fn get_user_bookings_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<get_user_bookings::PathParams>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let user = account_can_modify_user(&account, &path.user_id, &ctx).await?;

    let bookings = ctx.repos.bookings.find_by_customer(&user.id).await;
    Ok(HttpResponse::Ok().json(get_user_bookings::APIResponse::new(bookings)))
}

/// Bookings the current user made as a customer
pub async fn get_my_bookings_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
) -> Result<HttpResponse, SeabooError> {
    let (user, _) = protect_route(&http_req, &ctx).await?;

    let bookings = ctx.repos.bookings.find_by_customer(&user.id).await;
    Ok(HttpResponse::Ok().json(get_my_bookings::APIResponse::new(bookings)))
}
