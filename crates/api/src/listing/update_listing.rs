use crate::shared::{
    auth::{
        account_can_modify_listing, protect_account_route, protect_route,
        user_can_modify_listing, Permission,
    },
    usecase::{execute, execute_with_policy, PermissionBoundary, UseCase, UseCaseErrorContainer},
};
use crate::error::SeabooError;
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::update_listing::{APIResponse, PathParams, RequestBody};
use seaboo_domain::{
    is_valid_metadata, BookingRules, CancellationPolicy, Discount, DiscountStacking, Listing,
    ListingKind, Metadata,
};
use seaboo_infra::SeabooContext;

pub async fn update_listing_admin_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let listing = account_can_modify_listing(&account, &path.listing_id, &ctx).await?;

    let usecase = UpdateListingUseCase {
        listing,
        changes: body.0.into(),
    };

    execute(usecase, &ctx)
        .await
        .map(|listing| HttpResponse::Ok().json(APIResponse::new(listing)))
        .map_err(SeabooError::from)
}

pub async fn update_listing_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, SeabooError> {
    let (user, policy) = protect_route(&http_req, &ctx).await?;
    let listing = user_can_modify_listing(&user, &path.listing_id, &ctx).await?;

    let usecase = UpdateListingUseCase {
        listing,
        changes: body.0.into(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|listing| HttpResponse::Ok().json(APIResponse::new(listing)))
        .map_err(|e| match e {
            UseCaseErrorContainer::Unauthorized(e) => SeabooError::Unauthorized(e),
            UseCaseErrorContainer::UseCase(e) => e.into(),
        })
}

/// Changes to a `Listing`. Fields left as `None` are kept as they are.
#[derive(Debug, Default)]
pub struct ListingChanges {
    pub name: Option<String>,
    pub kind: Option<ListingKind>,
    pub timezone: Option<String>,
    pub currency: Option<String>,
    pub base_price: Option<i64>,
    pub weekend_price: Option<Option<i64>>,
    pub cleaning_fee: Option<i64>,
    pub rules: Option<BookingRules>,
    pub discounts: Option<Vec<Discount>>,
    pub stacking: Option<DiscountStacking>,
    pub cancellation_policy: Option<CancellationPolicy>,
    pub active: Option<bool>,
    pub metadata: Option<Metadata>,
}

impl From<RequestBody> for ListingChanges {
    fn from(body: RequestBody) -> Self {
        Self {
            name: body.name,
            kind: body.kind,
            timezone: body.timezone,
            currency: body.currency,
            base_price: body.base_price,
            weekend_price: body.weekend_price,
            cleaning_fee: body.cleaning_fee,
            rules: body.rules,
            discounts: body.discounts,
            stacking: body.stacking,
            cancellation_policy: body.cancellation_policy,
            active: body.active,
            metadata: body.metadata,
        }
    }
}

impl ListingChanges {
    /// Validates and applies every change, returns a description of the
    /// first invalid one
    pub fn apply(self, listing: &mut Listing) -> Result<(), String> {
        if let Some(name) = self.name {
            listing.set_name(name).map_err(|e| e.to_string())?;
        }
        if let Some(kind) = self.kind {
            listing.set_kind(kind).map_err(|e| e.to_string())?;
        }
        if let Some(timezone) = self.timezone {
            listing.set_timezone(&timezone).map_err(|e| e.to_string())?;
        }
        if let Some(currency) = self.currency {
            listing.set_currency(&currency).map_err(|e| e.to_string())?;
        }
        if let Some(base_price) = self.base_price {
            listing.set_base_price(base_price).map_err(|e| e.to_string())?;
        }
        if let Some(weekend_price) = self.weekend_price {
            listing
                .set_weekend_price(weekend_price)
                .map_err(|e| e.to_string())?;
        }
        if let Some(cleaning_fee) = self.cleaning_fee {
            listing
                .set_cleaning_fee(cleaning_fee)
                .map_err(|e| e.to_string())?;
        }
        if let Some(rules) = self.rules {
            rules.validate().map_err(|e| e.to_string())?;
            listing.rules = rules;
        }
        if let Some(discounts) = self.discounts {
            for discount in &discounts {
                discount.validate().map_err(|e| e.to_string())?;
            }
            listing.discounts = discounts;
        }
        if let Some(stacking) = self.stacking {
            stacking.validate().map_err(|e| e.to_string())?;
            listing.stacking = stacking;
        }
        if let Some(cancellation_policy) = self.cancellation_policy {
            listing.cancellation_policy = cancellation_policy;
        }
        if let Some(active) = self.active {
            listing.active = active;
        }
        if let Some(metadata) = self.metadata {
            if !is_valid_metadata(&metadata) {
                return Err("Too many metadata entries or too long values".into());
            }
            listing.metadata = metadata;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct UpdateListingUseCase {
    pub listing: Listing,
    pub changes: ListingChanges,
}

#[derive(Debug)]
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
impl UseCase for UpdateListingUseCase {
    type Response = Listing;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateListing";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        let mut listing = self.listing.clone();
        std::mem::take(&mut self.changes)
            .apply(&mut listing)
            .map_err(UseCaseError::InvalidListing)?;
        listing.updated = ctx.sys.get_timestamp_millis();

        match ctx.repos.listings.save(&listing).await {
            Ok(_) => Ok(listing),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

impl PermissionBoundary for UpdateListingUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdateListing]
    }
}
