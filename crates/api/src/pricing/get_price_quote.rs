use crate::{
    error::SeabooError,
    shared::{
        auth::protect_public_account_route,
        parse_date_range,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::get_price_quote::*;
use seaboo_domain::{
    date::date_in_timezone, pricing, DateRange, PriceQuote, ID, MAX_BOOKING_NIGHTS,
};
use seaboo_infra::SeabooContext;

pub async fn get_price_quote_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
    query: web::Query<QueryParams>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_public_account_route(&http_req, &ctx).await?;
    let range = parse_date_range(&query.start_date, &query.end_date)?;

    let usecase = GetPriceQuoteUseCase {
        account_id: account.id,
        listing_id: path.listing_id.clone(),
        range,
    };

    execute(usecase, &ctx)
        .await
        .map(|quote| HttpResponse::Ok().json(APIResponse::new(path.listing_id.clone(), quote)))
        .map_err(SeabooError::from)
}

/// Quotes a stay as if it was booked right now
#[derive(Debug)]
struct GetPriceQuoteUseCase {
    pub account_id: ID,
    pub listing_id: ID,
    pub range: DateRange,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NotFound(ID),
    TooManyNights,
}

impl From<UseCaseError> for SeabooError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(listing_id) => Self::NotFound(format!(
                "The listing with id: {}, was not found.",
                listing_id
            )),
            UseCaseError::TooManyNights => Self::BadClientData(format!(
                "A stay can be at most {} nights",
                MAX_BOOKING_NIGHTS
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPriceQuoteUseCase {
    type Response = PriceQuote;

    type Error = UseCaseError;

    const NAME: &'static str = "GetPriceQuote";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        if self.range.nights() > MAX_BOOKING_NIGHTS {
            return Err(UseCaseError::TooManyNights);
        }
        let listing = match ctx.repos.listings.find(&self.listing_id).await {
            Some(listing) if listing.account_id == self.account_id => listing,
            _ => return Err(UseCaseError::NotFound(self.listing_id.clone())),
        };
        let rates = ctx.repos.rates.find_by_listing(&listing.id).await;
        let today = date_in_timezone(ctx.sys.get_timestamp_millis(), &listing.timezone);

        Ok(pricing::quote(&listing, &rates, &self.range, today))
    }
}
