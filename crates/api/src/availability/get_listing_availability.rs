use crate::{
    error::SeabooError,
    shared::{
        auth::protect_public_account_route,
        parse_date_range,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::get_listing_availability::*;
use seaboo_domain::{AvailabilityCalendar, DateRange, ID};
use seaboo_infra::SeabooContext;

pub async fn get_listing_availability_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
    query: web::Query<QueryParams>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_public_account_route(&http_req, &ctx).await?;
    let range = parse_date_range(&query.start_date, &query.end_date)?;

    let usecase = GetListingAvailabilityUseCase {
        account_id: account.id,
        listing_id: path.listing_id.clone(),
        range,
    };

    execute(usecase, &ctx)
        .await
        .map(|calendar| {
            HttpResponse::Ok().json(APIResponse::new(path.listing_id.clone(), calendar))
        })
        .map_err(SeabooError::from)
}

#[derive(Debug)]
struct GetListingAvailabilityUseCase {
    pub account_id: ID,
    pub listing_id: ID,
    pub range: DateRange,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NotFound(ID),
    InvalidTimespan(i64),
}

impl From<UseCaseError> for SeabooError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(listing_id) => Self::NotFound(format!(
                "The listing with id: {}, was not found.",
                listing_id
            )),
            UseCaseError::InvalidTimespan(limit) => Self::BadClientData(format!(
                "The provided start and end dates can span at most {} nights",
                limit
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetListingAvailabilityUseCase {
    type Response = AvailabilityCalendar;

    type Error = UseCaseError;

    const NAME: &'static str = "GetListingAvailability";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        let limit = ctx.config.availability_query_limit_nights;
        if self.range.nights() > limit {
            return Err(UseCaseError::InvalidTimespan(limit));
        }
        match ctx.repos.listings.find(&self.listing_id).await {
            Some(listing) if listing.account_id == self.account_id => (),
            _ => return Err(UseCaseError::NotFound(self.listing_id.clone())),
        };

        let bookings = ctx
            .repos
            .bookings
            .find_by_listing(&self.listing_id, Some(&self.range))
            .await;
        let blocks = ctx
            .repos
            .blocks
            .find_by_listing(&self.listing_id, Some(&self.range))
            .await;

        Ok(AvailabilityCalendar::build(
            self.range.clone(),
            &bookings,
            &blocks,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seaboo_domain::{AvailabilityBlock, DayStatus, Listing, ListingKind};

    async fn setup(ctx: &SeabooContext) -> Listing {
        let listing = Listing::new(
            ID::default(),
            ID::default(),
            "Marina Kastela, berth 31".into(),
            ListingKind::Mooring {
                max_boat_length_cm: 1100,
            },
            2_500,
            "EUR".into(),
            0,
        )
        .unwrap();
        ctx.repos.listings.insert(&listing).await.unwrap();
        listing
    }

    #[actix_web::test]
    async fn builds_calendar_of_listing() {
        let ctx = SeabooContext::create_inmemory();
        let listing = setup(&ctx).await;
        let block = AvailabilityBlock::new(
            &listing,
            DateRange::parse("2024-5-3", "2024-5-5").unwrap(),
            None,
            0,
        );
        ctx.repos.blocks.insert(&block).await.unwrap();

        let mut usecase = GetListingAvailabilityUseCase {
            account_id: listing.account_id.clone(),
            listing_id: listing.id.clone(),
            range: DateRange::parse("2024-5-1", "2024-5-8").unwrap(),
        };
        let calendar = usecase.execute(&ctx).await.unwrap();
        assert_eq!(calendar.days.len(), 7);
        assert_eq!(
            calendar.days[2].status,
            DayStatus::Blocked {
                block_id: block.id.clone()
            }
        );
        assert_eq!(
            calendar.free_ranges(),
            vec![
                DateRange::parse("2024-5-1", "2024-5-3").unwrap(),
                DateRange::parse("2024-5-5", "2024-5-8").unwrap(),
            ]
        );
    }

    #[actix_web::test]
    async fn rejects_too_long_timespan_and_other_accounts() {
        let ctx = SeabooContext::create_inmemory();
        let listing = setup(&ctx).await;

        let mut usecase = GetListingAvailabilityUseCase {
            account_id: listing.account_id.clone(),
            listing_id: listing.id.clone(),
            range: DateRange::parse("2024-1-1", "2025-1-3").unwrap(),
        };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidTimespan(366))
        );

        let mut usecase = GetListingAvailabilityUseCase {
            account_id: ID::default(),
            listing_id: listing.id.clone(),
            range: DateRange::parse("2024-1-1", "2024-2-1").unwrap(),
        };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound(listing.id.clone()))
        );
    }
}
