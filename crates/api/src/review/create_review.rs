use crate::error::SeabooError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::create_review::*;
use seaboo_domain::{InvalidReview, Review, ID};
use seaboo_infra::SeabooContext;
use tracing::info;

pub async fn create_review_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, SeabooError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateReviewUseCase {
        account_id: user.account_id,
        author_id: user.id,
        booking_id: path.booking_id.clone(),
        rating: body.rating,
        comment: body.comment,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|review| HttpResponse::Created().json(APIResponse::new(review)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => SeabooError::Unauthorized(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
struct CreateReviewUseCase {
    pub account_id: ID,
    pub author_id: ID,
    pub booking_id: ID,
    pub rating: u8,
    pub comment: Option<String>,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    BookingNotFound(ID),
    AlreadyReviewed,
    InvalidReview(InvalidReview),
    StorageError,
}

impl From<UseCaseError> for SeabooError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::BookingNotFound(id) => Self::NotFound(format!(
                "The booking with id: {}, was not found.",
                id
            )),
            UseCaseError::AlreadyReviewed => {
                Self::Conflict("The booking has already been reviewed".into())
            }
            UseCaseError::InvalidReview(e) => Self::BadClientData(e.to_string()),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReviewUseCase {
    type Response = Review;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReview";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        let booking = match ctx.repos.bookings.find(&self.booking_id).await {
            Some(booking) if booking.account_id == self.account_id => booking,
            _ => return Err(UseCaseError::BookingNotFound(self.booking_id.clone())),
        };

        let review = Review::new(
            &booking,
            self.author_id.clone(),
            self.rating,
            self.comment.clone(),
            ctx.sys.get_timestamp_millis(),
        )
        .map_err(UseCaseError::InvalidReview)?;

        match ctx.repos.reviews.insert(&review).await {
            Ok(false) => Err(UseCaseError::AlreadyReviewed),
            Ok(true) => {
                info!(
                    "Listing: {} was reviewed with {} stars",
                    review.listing_id, review.rating
                );
                Ok(review)
            }
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

impl PermissionBoundary for CreateReviewUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateReview]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seaboo_domain::{pricing, Booking, BookingParty, DateRange, Listing, ListingKind};

    struct TestContext {
        ctx: SeabooContext,
        booking: Booking,
    }

    async fn setup(complete: bool) -> TestContext {
        let ctx = SeabooContext::create_inmemory();
        let listing = Listing::new(
            ID::default(),
            ID::default(),
            "Dufour 390".into(),
            ListingKind::Boat { max_guests: 8 },
            25_000,
            "EUR".into(),
            0,
        )
        .unwrap();
        ctx.repos.listings.insert(&listing).await.unwrap();
        let range = DateRange::parse("2024-5-4", "2024-5-11").unwrap();
        let quote = pricing::quote(&listing, &[], &range, range.start());
        let mut booking = Booking::new(
            &listing,
            ID::default(),
            range,
            BookingParty {
                guests: 5,
                boat_length_cm: None,
            },
            &quote,
            0,
            1000,
        );
        booking.confirm(1).unwrap();
        if complete {
            booking.complete(2).unwrap();
        }
        ctx.repos
            .bookings
            .insert_if_available(&booking, &[])
            .await
            .unwrap();

        TestContext { ctx, booking }
    }

    fn usecase(booking: &Booking, author_id: ID, rating: u8) -> CreateReviewUseCase {
        CreateReviewUseCase {
            account_id: booking.account_id.clone(),
            author_id,
            booking_id: booking.id.clone(),
            rating,
            comment: Some("Clean boat and a friendly skipper".into()),
        }
    }

    #[actix_web::test]
    async fn customer_reviews_completed_stay_once() {
        let TestContext { ctx, booking } = setup(true).await;
        let customer = booking.customer_id.clone();

        let review = usecase(&booking, customer.clone(), 5)
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(review.listing_id, booking.listing_id);
        assert_eq!(
            ctx.repos.reviews.find_by_booking(&booking.id).await,
            Some(review)
        );

        assert_eq!(
            usecase(&booking, customer, 4).execute(&ctx).await,
            Err(UseCaseError::AlreadyReviewed)
        );
    }

    #[actix_web::test]
    async fn rejects_invalid_reviews() {
        let TestContext { ctx, booking } = setup(false).await;
        assert_eq!(
            usecase(&booking, booking.customer_id.clone(), 5)
                .execute(&ctx)
                .await,
            Err(UseCaseError::InvalidReview(InvalidReview::NotCompleted))
        );

        let TestContext { ctx, booking } = setup(true).await;
        assert_eq!(
            usecase(&booking, booking.owner_id.clone(), 5)
                .execute(&ctx)
                .await,
            Err(UseCaseError::InvalidReview(InvalidReview::NotCustomer))
        );
        assert_eq!(
            usecase(&booking, booking.customer_id.clone(), 0)
                .execute(&ctx)
                .await,
            Err(UseCaseError::InvalidReview(InvalidReview::Rating))
        );

        let mut other_account = usecase(&booking, booking.customer_id.clone(), 5);
        other_account.account_id = ID::default();
        assert_eq!(
            other_account.execute(&ctx).await,
            Err(UseCaseError::BookingNotFound(booking.id.clone()))
        );
    }
}
