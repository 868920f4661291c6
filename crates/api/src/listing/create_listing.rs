use super::update_listing::ListingChanges;
use crate::shared::{
    auth::{account_can_modify_user, protect_account_route, protect_route, Permission},
    usecase::{execute, execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
};
use crate::error::SeabooError;
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::create_listing::{APIResponse, PathParams, RequestBody};
use seaboo_domain::{Listing, ListingKind, ID};
use seaboo_infra::SeabooContext;

pub async fn create_listing_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let user = account_can_modify_user(&account, &path.user_id, &ctx).await?;

    let usecase = CreateListingUseCase::new(account.id, user.id, body.0);

    execute(usecase, &ctx)
        .await
        .map(|listing| HttpResponse::Created().json(APIResponse::new(listing)))
        .map_err(SeabooError::from)
}

pub async fn create_listing_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, SeabooError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;

    let usecase = CreateListingUseCase::new(user.account_id, user.id, body.0);

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|listing| HttpResponse::Created().json(APIResponse::new(listing)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => SeabooError::Unauthorized(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

#[derive(Debug)]
struct CreateListingUseCase {
    pub account_id: ID,
    pub owner_id: ID,
    pub name: String,
    pub kind: ListingKind,
    pub base_price: i64,
    pub currency: String,
    /// Everything that has a default on a new `Listing`
    pub settings: ListingChanges,
}

impl CreateListingUseCase {
    fn new(account_id: ID, owner_id: ID, body: RequestBody) -> Self {
        Self {
            account_id,
            owner_id,
            name: body.name,
            kind: body.kind,
            base_price: body.base_price,
            currency: body.currency,
            settings: ListingChanges {
                timezone: body.timezone,
                weekend_price: body.weekend_price.map(Some),
                cleaning_fee: body.cleaning_fee,
                rules: body.rules,
                discounts: body.discounts,
                stacking: body.stacking,
                cancellation_policy: body.cancellation_policy,
                metadata: body.metadata,
                ..Default::default()
            },
        }
    }
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    InvalidListing(String),
    StorageError,
}

impl From<UseCaseError> for SeabooError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidListing(msg) => Self::BadClientData(msg),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateListingUseCase {
    type Response = Listing;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateListing";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        let mut listing = Listing::new(
            self.account_id.clone(),
            self.owner_id.clone(),
            self.name.clone(),
            self.kind.clone(),
            self.base_price,
            self.currency.clone(),
            ctx.sys.get_timestamp_millis(),
        )
        .map_err(|e| UseCaseError::InvalidListing(e.to_string()))?;
        std::mem::take(&mut self.settings)
            .apply(&mut listing)
            .map_err(UseCaseError::InvalidListing)?;

        match ctx.repos.listings.insert(&listing).await {
            Ok(_) => Ok(listing),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

impl PermissionBoundary for CreateListingUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateListing]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::auth::Policy;
    use seaboo_domain::{Account, User};

    fn body() -> RequestBody {
        serde_json::from_value(serde_json::json!({
            "name": "Berth C-14",
            "kind": { "type": "mooring", "maxBoatLengthCm": 1400 },
            "basePrice": 3500,
            "currency": "EUR",
            "timezone": "Europe/Zagreb",
            "cleaningFee": 0,
            "stacking": { "type": "additive", "maxPercentage": 30 }
        }))
        .unwrap()
    }

    #[actix_web::test]
    async fn creates_listing_for_owner() {
        let ctx = SeabooContext::create_inmemory();
        let account = Account::default();
        let user = User::new(account.id.clone());

        let usecase = CreateListingUseCase::new(account.id.clone(), user.id.clone(), body());
        let policy = Policy {
            allow: Some(vec![Permission::CreateListing]),
            reject: None,
        };
        let listing = execute_with_policy(usecase, &policy, &ctx).await.unwrap();
        assert_eq!(listing.owner_id, user.id);
        assert_eq!(listing.timezone, chrono_tz::Europe::Zagreb);
        assert_eq!(ctx.repos.listings.find_by_owner(&user.id).await, vec![listing]);
    }

    #[actix_web::test]
    async fn requires_permission_and_valid_settings() {
        let ctx = SeabooContext::create_inmemory();
        let account = Account::default();
        let user = User::new(account.id.clone());

        let usecase = CreateListingUseCase::new(account.id.clone(), user.id.clone(), body());
        let res = execute_with_policy(usecase, &Policy::default(), &ctx).await;
        assert!(matches!(res, Err(UseCaseErrorContainer::Unauthorized(_))));

        let mut invalid = body();
        invalid.currency = "euro".into();
        let mut usecase = CreateListingUseCase::new(account.id, user.id.clone(), invalid);
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidListing(_))
        ));
        assert!(ctx.repos.listings.find_by_owner(&user.id).await.is_empty());
    }
}
