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
use seaboo_api_structs::create_seasonal_rate::*;
use seaboo_domain::{DateRange, Listing, SeasonalRate};
use seaboo_infra::SeabooContext;

pub async fn create_seasonal_rate_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let listing = account_can_modify_listing(&account, &path.listing_id, &ctx).await?;
    let range = parse_date_range(&body.start_date, &body.end_date)?;

    let usecase = CreateSeasonalRateUseCase {
        listing,
        name: body.0.name,
        range,
        nightly_price: body.0.nightly_price,
    };

    execute(usecase, &ctx)
        .await
        .map(|rate| HttpResponse::Created().json(APIResponse::new(rate)))
        .map_err(SeabooError::from)
}

pub async fn create_seasonal_rate_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, SeabooError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;
    let listing = user_can_modify_listing(&user, &path.listing_id, &ctx).await?;
    let range = parse_date_range(&body.start_date, &body.end_date)?;

    let usecase = CreateSeasonalRateUseCase {
        listing,
        name: body.0.name,
        range,
        nightly_price: body.0.nightly_price,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|rate| HttpResponse::Created().json(APIResponse::new(rate)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => SeabooError::Unauthorized(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
struct CreateSeasonalRateUseCase {
    pub listing: Listing,
    pub name: String,
    pub range: DateRange,
    pub nightly_price: i64,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    EmptyName,
    InvalidRate(String),
    StorageError,
}

impl From<UseCaseError> for SeabooError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyName => {
                Self::BadClientData("The seasonal rate needs a name".into())
            }
            UseCaseError::InvalidRate(msg) => Self::BadClientData(msg),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateSeasonalRateUseCase {
    type Response = SeasonalRate;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateSeasonalRate";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        let rate = SeasonalRate::new(
            &self.listing,
            name.to_string(),
            self.range.clone(),
            self.nightly_price,
            ctx.sys.get_timestamp_millis(),
        )
        .map_err(|e| UseCaseError::InvalidRate(e.to_string()))?;

        match ctx.repos.rates.insert(&rate).await {
            Ok(_) => Ok(rate),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

impl PermissionBoundary for CreateSeasonalRateUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ManagePricing]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seaboo_domain::{ListingKind, ID};

    #[actix_web::test]
    async fn creates_rate_with_positive_price() {
        let ctx = SeabooContext::create_inmemory();
        let listing = Listing::new(
            ID::default(),
            ID::default(),
            "Lagoon 40".into(),
            ListingKind::Boat { max_guests: 10 },
            70_000,
            "EUR".into(),
            0,
        )
        .unwrap();
        let range = DateRange::parse("2024-7-1", "2024-9-1").unwrap();

        let mut usecase = CreateSeasonalRateUseCase {
            listing: listing.clone(),
            name: "High season".into(),
            range: range.clone(),
            nightly_price: 0,
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidRate(_))
        ));

        let mut usecase = CreateSeasonalRateUseCase {
            listing: listing.clone(),
            name: "  ".into(),
            range: range.clone(),
            nightly_price: 90_000,
        };
        assert_eq!(usecase.execute(&ctx).await, Err(UseCaseError::EmptyName));

        let mut usecase = CreateSeasonalRateUseCase {
            listing: listing.clone(),
            name: "High season".into(),
            range,
            nightly_price: 90_000,
        };
        let rate = usecase.execute(&ctx).await.unwrap();
        assert_eq!(ctx.repos.rates.find_by_listing(&listing.id).await, vec![rate]);
    }
}
