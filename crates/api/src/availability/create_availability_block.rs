use crate::shared::{
    auth::{
        account_can_modify_listing, protect_account_route, protect_route,
        user_can_modify_listing, Permission,
    },
    parse_date_range,
    usecase::{execute, execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
};
use crate::error::SeabooError;
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::create_availability_block::*;
use seaboo_domain::{AvailabilityBlock, DateRange, Listing, ID};
use seaboo_infra::SeabooContext;

const MAX_NOTE_LEN: usize = 500;

pub async fn create_availability_block_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let listing = account_can_modify_listing(&account, &path.listing_id, &ctx).await?;
    let range = parse_date_range(&body.start_date, &body.end_date)?;

    let usecase = CreateAvailabilityBlockUseCase {
        listing,
        range,
        note: body.0.note,
    };

    execute(usecase, &ctx)
        .await
        .map(|block| HttpResponse::Created().json(APIResponse::new(block)))
        .map_err(SeabooError::from)
}

pub async fn create_availability_block_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, SeabooError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;
    let listing = user_can_modify_listing(&user, &path.listing_id, &ctx).await?;
    let range = parse_date_range(&body.start_date, &body.end_date)?;

    let usecase = CreateAvailabilityBlockUseCase {
        listing,
        range,
        note: body.0.note,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|block| HttpResponse::Created().json(APIResponse::new(block)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => SeabooError::Unauthorized(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
struct CreateAvailabilityBlockUseCase {
    pub listing: Listing,
    pub range: DateRange,
    pub note: Option<String>,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NoteTooLong,
    BookedDuringBlock(ID),
    StorageError,
}

impl From<UseCaseError> for SeabooError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NoteTooLong => Self::BadClientData(format!(
                "The note can be at most {} characters",
                MAX_NOTE_LEN
            )),
            UseCaseError::BookedDuringBlock(booking_id) => Self::Conflict(format!(
                "The booking with id: {}, is holding nights within the given dates",
                booking_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateAvailabilityBlockUseCase {
    type Response = AvailabilityBlock;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateAvailabilityBlock";

    /// Blocks may overlap other blocks, but never a booking that is holding its nights
    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        let note = self
            .note
            .as_ref()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        if matches!(&note, Some(n) if n.chars().count() > MAX_NOTE_LEN) {
            return Err(UseCaseError::NoteTooLong);
        }

        let bookings = ctx
            .repos
            .bookings
            .find_by_listing(&self.listing.id, Some(&self.range))
            .await;
        if let Some(booking) = bookings
            .iter()
            .find(|b| b.is_holding() && b.range.overlaps(&self.range))
        {
            return Err(UseCaseError::BookedDuringBlock(booking.id.clone()));
        }

        let block = AvailabilityBlock::new(
            &self.listing,
            self.range.clone(),
            note,
            ctx.sys.get_timestamp_millis(),
        );
        match ctx.repos.blocks.insert(&block).await {
            Ok(_) => Ok(block),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

impl PermissionBoundary for CreateAvailabilityBlockUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ManageAvailability]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seaboo_domain::{pricing, Booking, BookingParty, ListingKind, NaiveDate};

    async fn setup(ctx: &SeabooContext) -> (Listing, Booking) {
        let listing = Listing::new(
            ID::default(),
            ID::default(),
            "Beneteau Oceanis 46".into(),
            ListingKind::Boat { max_guests: 10 },
            60_000,
            "EUR".into(),
            0,
        )
        .unwrap();
        ctx.repos.listings.insert(&listing).await.unwrap();

        let range = DateRange::parse("2024-8-10", "2024-8-17").unwrap();
        let quote = pricing::quote(
            &listing,
            &[],
            &range,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );
        let booking = Booking::new(
            &listing,
            ID::default(),
            range,
            BookingParty {
                guests: 4,
                boat_length_cm: None,
            },
            &quote,
            0,
            1000,
        );
        ctx.repos
            .bookings
            .insert_if_available(&booking, &[])
            .await
            .unwrap();
        (listing, booking)
    }

    #[actix_web::test]
    async fn rejects_block_over_holding_booking() {
        let ctx = SeabooContext::create_inmemory();
        let (listing, booking) = setup(&ctx).await;

        let mut usecase = CreateAvailabilityBlockUseCase {
            listing,
            range: DateRange::parse("2024-8-16", "2024-8-20").unwrap(),
            note: None,
        };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::BookedDuringBlock(booking.id))
        );
    }

    #[actix_web::test]
    async fn allows_overlapping_blocks_next_to_bookings() {
        let ctx = SeabooContext::create_inmemory();
        let (listing, _) = setup(&ctx).await;

        for (start, end) in [("2024-8-17", "2024-8-24"), ("2024-8-20", "2024-8-30")] {
            let mut usecase = CreateAvailabilityBlockUseCase {
                listing: listing.clone(),
                range: DateRange::parse(start, end).unwrap(),
                note: Some(" engine service ".into()),
            };
            let block = usecase.execute(&ctx).await.unwrap();
            assert_eq!(block.note.as_deref(), Some("engine service"));
        }
        assert_eq!(
            ctx.repos.blocks.find_by_listing(&listing.id, None).await.len(),
            2
        );
    }
}
