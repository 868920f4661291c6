use super::subscribers::BookingCreatedWebhook;
use crate::shared::{
    auth::{account_can_modify_user, protect_account_route, protect_route, Permission},
    parse_date_range,
    usecase::{
        execute, execute_with_policy, PermissionBoundary, Subscriber, UseCase,
        UseCaseErrorContainer,
    },
};
use crate::error::SeabooError;
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::create_booking::*;
use seaboo_domain::{
    date::date_in_timezone, pricing, Booking, BookingParty, Conflict, DateRange, PartyMismatch,
    RuleViolation, ID,
};
use seaboo_infra::SeabooContext;
use tracing::info;

pub async fn create_booking_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<AdminPathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let customer = account_can_modify_user(&account, &path.user_id, &ctx).await?;
    let range = parse_date_range(&body.start_date, &body.end_date)?;

    let usecase = CreateBookingUseCase {
        account_id: account.id,
        customer_id: customer.id,
        listing_id: path.listing_id.clone(),
        range,
        party: BookingParty {
            guests: body.guests,
            boat_length_cm: body.boat_length_cm,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|booking| HttpResponse::Created().json(APIResponse::new(booking)))
        .map_err(SeabooError::from)
}

pub async fn create_booking_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, SeabooError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;
    let range = parse_date_range(&body.start_date, &body.end_date)?;

    let usecase = CreateBookingUseCase {
        account_id: user.account_id,
        customer_id: user.id,
        listing_id: path.listing_id.clone(),
        range,
        party: BookingParty {
            guests: body.guests,
            boat_length_cm: body.boat_length_cm,
        },
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|booking| HttpResponse::Created().json(APIResponse::new(booking)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => SeabooError::Unauthorized(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
pub struct CreateBookingUseCase {
    pub account_id: ID,
    pub customer_id: ID,
    pub listing_id: ID,
    pub range: DateRange,
    pub party: BookingParty,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ListingNotFound(ID),
    ListingInactive,
    OwnListing,
    PartyMismatch(PartyMismatch),
    RuleViolation(RuleViolation),
    Unavailable(Conflict),
    StorageError,
}

impl From<UseCaseError> for SeabooError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ListingNotFound(listing_id) => Self::NotFound(format!(
                "The listing with id: {}, was not found.",
                listing_id
            )),
            UseCaseError::ListingInactive => {
                Self::Conflict("The listing is not accepting bookings at the moment".into())
            }
            UseCaseError::OwnListing => {
                Self::BadClientData("Owners can not book their own listings".into())
            }
            UseCaseError::PartyMismatch(e) => Self::BadClientData(e.to_string()),
            UseCaseError::RuleViolation(e) => Self::BadClientData(e.to_string()),
            UseCaseError::Unavailable(_) => Self::Conflict(
                "The listing is not available for the requested dates".into(),
            ),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateBookingUseCase {
    type Response = Booking;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateBooking";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        let listing = match ctx.repos.listings.find(&self.listing_id).await {
            Some(listing) if listing.account_id == self.account_id => listing,
            _ => return Err(UseCaseError::ListingNotFound(self.listing_id.clone())),
        };
        if !listing.active {
            return Err(UseCaseError::ListingInactive);
        }
        if listing.is_owned_by(&self.customer_id) {
            return Err(UseCaseError::OwnListing);
        }
        listing
            .accommodates(&self.party)
            .map_err(UseCaseError::PartyMismatch)?;

        let now = ctx.sys.get_timestamp_millis();
        let today = date_in_timezone(now, &listing.timezone);
        listing
            .rules
            .check(&self.range, today)
            .map_err(UseCaseError::RuleViolation)?;

        let rates = ctx.repos.rates.find_by_listing(&listing.id).await;
        let quote = pricing::quote(&listing, &rates, &self.range, today);
        let booking = Booking::new(
            &listing,
            self.customer_id.clone(),
            self.range.clone(),
            self.party.clone(),
            &quote,
            now,
            ctx.config.pending_booking_ttl,
        );

        let blocks = ctx
            .repos
            .blocks
            .find_by_listing(&listing.id, Some(&self.range))
            .await;
        match ctx.repos.bookings.insert_if_available(&booking, &blocks).await {
            Ok(None) => {
                info!(
                    "Booking: {} of listing: {} is {}",
                    booking.id, listing.id, booking.status
                );
                Ok(booking)
            }
            Ok(Some(conflict)) => Err(UseCaseError::Unavailable(conflict)),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(BookingCreatedWebhook)]
    }
}

impl PermissionBoundary for CreateBookingUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateBooking]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seaboo_domain::{
        Account, AvailabilityBlock, BookingRules, BookingStatus, Listing, ListingKind, User,
    };
    use seaboo_infra::{FixedSys, RecordingWebhookSender};
    use std::sync::Arc;

    // 2024-06-01T08:00:00Z, a Saturday
    const NOW: i64 = 1_717_228_800_000;

    struct TestContext {
        ctx: SeabooContext,
        listing: Listing,
        customer: User,
    }

    async fn setup() -> TestContext {
        let mut ctx = SeabooContext::create_inmemory();
        ctx.sys = Arc::new(FixedSys::new(NOW));
        let account = Account::default();
        ctx.repos.accounts.insert(&account).await.unwrap();
        let owner = User::new(account.id.clone());
        let customer = User::new(account.id.clone());
        ctx.repos.users.insert(&owner).await.unwrap();
        ctx.repos.users.insert(&customer).await.unwrap();

        let mut listing = Listing::new(
            account.id.clone(),
            owner.id.clone(),
            "Catamaran Bali 4.1".into(),
            ListingKind::Boat { max_guests: 8 },
            45_000,
            "EUR".into(),
            NOW,
        )
        .unwrap();
        listing.cleaning_fee = 10_000;
        ctx.repos.listings.insert(&listing).await.unwrap();

        TestContext {
            ctx,
            listing,
            customer,
        }
    }

    fn usecase(t: &TestContext, start: &str, end: &str, guests: u32) -> CreateBookingUseCase {
        CreateBookingUseCase {
            account_id: t.listing.account_id.clone(),
            customer_id: t.customer.id.clone(),
            listing_id: t.listing.id.clone(),
            range: DateRange::parse(start, end).unwrap(),
            party: BookingParty {
                guests,
                boat_length_cm: None,
            },
        }
    }

    #[actix_web::test]
    async fn creates_pending_booking_with_quoted_price() {
        let t = setup().await;

        let booking = usecase(&t, "2024-7-1", "2024-7-4", 4)
            .execute(&t.ctx)
            .await
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.total_price, 3 * 45_000 + 10_000);
        assert_eq!(
            booking.expires_at,
            Some(NOW + t.ctx.config.pending_booking_ttl)
        );
        assert_eq!(t.ctx.repos.bookings.find(&booking.id).await, Some(booking));
    }

    #[actix_web::test]
    async fn instant_book_confirms_right_away() {
        let mut t = setup().await;
        t.listing.rules = BookingRules {
            instant_book: true,
            ..Default::default()
        };
        t.ctx.repos.listings.save(&t.listing).await.unwrap();

        let booking = usecase(&t, "2024-7-1", "2024-7-4", 4)
            .execute(&t.ctx)
            .await
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.expires_at, None);
    }

    #[actix_web::test]
    async fn rejects_overlapping_requests_but_allows_back_to_back() {
        let t = setup().await;

        let first = usecase(&t, "2024-7-1", "2024-7-8", 2)
            .execute(&t.ctx)
            .await
            .unwrap();
        assert_eq!(
            usecase(&t, "2024-7-7", "2024-7-10", 2).execute(&t.ctx).await,
            Err(UseCaseError::Unavailable(Conflict::Booking(first.id)))
        );
        assert!(usecase(&t, "2024-7-8", "2024-7-10", 2)
            .execute(&t.ctx)
            .await
            .is_ok());
        assert!(usecase(&t, "2024-6-28", "2024-7-1", 2)
            .execute(&t.ctx)
            .await
            .is_ok());
    }

    #[actix_web::test]
    async fn rejects_blocked_dates() {
        let t = setup().await;
        let block = AvailabilityBlock::new(
            &t.listing,
            DateRange::parse("2024-7-20", "2024-7-22").unwrap(),
            None,
            NOW,
        );
        t.ctx.repos.blocks.insert(&block).await.unwrap();

        assert_eq!(
            usecase(&t, "2024-7-18", "2024-7-21", 2)
                .execute(&t.ctx)
                .await,
            Err(UseCaseError::Unavailable(Conflict::Block(block.id)))
        );
    }

    #[actix_web::test]
    async fn validates_party_rules_and_owner() {
        let mut t = setup().await;

        assert_eq!(
            usecase(&t, "2024-7-1", "2024-7-4", 9).execute(&t.ctx).await,
            Err(UseCaseError::PartyMismatch(PartyMismatch::TooManyGuests(8)))
        );
        assert_eq!(
            usecase(&t, "2024-5-30", "2024-6-4", 2)
                .execute(&t.ctx)
                .await,
            Err(UseCaseError::RuleViolation(RuleViolation::CheckInInPast(
                DateRange::parse("2024-5-30", "2024-6-4").unwrap().start()
            )))
        );

        let mut own = usecase(&t, "2024-7-1", "2024-7-4", 2);
        own.customer_id = t.listing.owner_id.clone();
        assert_eq!(own.execute(&t.ctx).await, Err(UseCaseError::OwnListing));

        t.listing.active = false;
        t.ctx.repos.listings.save(&t.listing).await.unwrap();
        assert_eq!(
            usecase(&t, "2024-7-1", "2024-7-4", 2).execute(&t.ctx).await,
            Err(UseCaseError::ListingInactive)
        );
    }

    #[actix_web::test]
    async fn notifies_account_webhook() {
        let mut t = setup().await;
        let recorder = Arc::new(RecordingWebhookSender::new());
        t.ctx.webhooks = recorder.clone();
        let mut account = t
            .ctx
            .repos
            .accounts
            .find(&t.listing.account_id)
            .await
            .unwrap();
        assert!(account
            .settings
            .set_webhook_url(Some("https://marina.example.com/hooks".into())));
        t.ctx.repos.accounts.save(&account).await.unwrap();

        let booking = execute(usecase(&t, "2024-7-1", "2024-7-4", 2), &t.ctx)
            .await
            .unwrap();

        let sent = recorder.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "https://marina.example.com/hooks");
        assert_eq!(sent[0].payload["event"], "booking.created");
        assert_eq!(
            sent[0].payload["booking"]["id"],
            serde_json::json!(booking.id.to_string())
        );
    }
}
