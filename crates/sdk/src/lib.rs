mod account;
mod availability;
mod base;
mod booking;
mod listing;
mod pricing;
mod review;
mod status;
mod user;

use account::AccountClient;
use availability::AvailabilityClient;
use base::Credentials;
use booking::BookingClient;
use listing::ListingClient;
use pricing::PricingClient;
use review::ReviewClient;
use status::StatusClient;
use std::sync::Arc;
use user::UserClient;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};

pub use availability::{CreateBlockInput, GetAvailabilityInput};
pub use booking::{BookingsQuery, CreateBookingInput};
pub use listing::{CreateListingInput, UpdateListingInput};
pub use pricing::CreateSeasonalRateInput;
pub use user::{CreateUserInput, UpdateUserInput};

pub use seaboo_api_structs::dtos::*;
pub use seaboo_domain::{
    BookingParty, BookingRules, BookingStatus, CancellationPolicy, CancelledBy, DayStatus,
    Discount, DiscountKind, DiscountStacking, ListingKind, Metadata, PriceQuote, PriceSource,
    RatingSummary, ID,
};

/// SeaBoo Server SDK
///
/// The SDK contains methods for interacting with the SeaBoo server API.
/// Admin requests are authenticated with the secret api key of the account,
/// user requests with a token signed by the account.
#[derive(Clone)]
pub struct SeabooSDK {
    pub account: AccountClient,
    pub availability: AvailabilityClient,
    pub booking: BookingClient,
    pub listing: ListingClient,
    pub pricing: PricingClient,
    pub review: ReviewClient,
    pub status: StatusClient,
    pub user: UserClient,
}

impl SeabooSDK {
    /// Sends requests as the admin of the account owning `api_key`
    pub fn new<T: Into<String>>(address: String, api_key: T) -> Self {
        let api_key = api_key.into();
        let credentials = if api_key.is_empty() {
            None
        } else {
            Some(Credentials::ApiKey(api_key))
        };
        Self::with_base(BaseClient::new(address, credentials))
    }

    /// Sends requests as the user identified by `token`
    pub fn new_user<T: Into<String>>(address: String, account_id: ID, token: T) -> Self {
        let credentials = Credentials::User {
            account_id: account_id.to_string(),
            token: token.into(),
        };
        Self::with_base(BaseClient::new(address, Some(credentials)))
    }

    /// Can only reach the public routes of the account
    pub fn new_public(address: String, account_id: ID) -> Self {
        let credentials = Credentials::Account(account_id.to_string());
        Self::with_base(BaseClient::new(address, Some(credentials)))
    }

    fn with_base(base: BaseClient) -> Self {
        let base = Arc::new(base);
        Self {
            account: AccountClient::new(base.clone()),
            availability: AvailabilityClient::new(base.clone()),
            booking: BookingClient::new(base.clone()),
            listing: ListingClient::new(base.clone()),
            pricing: PricingClient::new(base.clone()),
            review: ReviewClient::new(base.clone()),
            status: StatusClient::new(base.clone()),
            user: UserClient::new(base),
        }
    }
}
