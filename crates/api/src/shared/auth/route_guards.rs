use super::Policy;
use crate::error::SeabooError;
use actix_web::HttpRequest;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use seaboo_domain::{Account, Booking, Listing, User, ID};
use seaboo_infra::SeabooContext;
use serde::{Deserialize, Serialize};

pub const ACCOUNT_HEADER: &str = "seaboo-account";
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Expiration time (as UTC timestamp in seconds)
    pub exp: usize,
    /// Issued at (as UTC timestamp in seconds)
    pub iat: usize,
    /// The `User` the token was issued for
    pub user_id: ID,
    pub policy: Option<Policy>,
}

fn parse_authtoken_header(token_header_value: &str) -> String {
    token_header_value
        .trim_start_matches("Bearer")
        .trim_start_matches("bearer")
        .trim()
        .to_string()
}

fn decode_token(account: &Account, token: &str) -> anyhow::Result<Claims> {
    let public_key = match &account.public_jwt_key {
        Some(public_key) => public_key,
        None => return Err(anyhow::Error::msg("Account does not support user tokens")),
    };
    let decoding_key = DecodingKey::from_rsa_pem(public_key.as_bytes())?;
    let claims = decode::<Claims>(token, &decoding_key, &Validation::new(Algorithm::RS256))?.claims;

    Ok(claims)
}

async fn auth_user_req(
    req: &HttpRequest,
    account: &Account,
    ctx: &SeabooContext,
) -> Result<(User, Policy), SeabooError> {
    let token = match req.headers().get("authorization") {
        Some(token) => token,
        None => {
            return Err(SeabooError::Unauthorized(
                "Unable to find the bearer token in the authorization header".into(),
            ))
        }
    };
    let token = match token.to_str() {
        Ok(token) => parse_authtoken_header(token),
        Err(_) => {
            return Err(SeabooError::Unauthorized(
                "Malformed authorization header provided".into(),
            ))
        }
    };
    let claims = decode_token(account, &token).map_err(|e| {
        SeabooError::Unauthorized(format!("Unable to decode the provided token: {}", e))
    })?;

    match ctx
        .repos
        .users
        .find_by_account_id(&claims.user_id, &account.id)
        .await
    {
        Some(user) => Ok((user, claims.policy.unwrap_or_default())),
        None => Err(SeabooError::Unauthorized(format!(
            "The user with id: {}, specified in the token was not found",
            claims.user_id
        ))),
    }
}

/// Finds the `Account` given by the `seaboo-account` header
pub async fn get_client_account(
    req: &HttpRequest,
    ctx: &SeabooContext,
) -> Result<Account, SeabooError> {
    let account_id = match req.headers().get(ACCOUNT_HEADER) {
        Some(account_id) => account_id,
        None => {
            return Err(SeabooError::UnidentifiableClient(
                "Unable to find the account header".into(),
            ))
        }
    };
    let account_id = account_id
        .to_str()
        .ok()
        .and_then(|id| id.parse::<ID>().ok())
        .ok_or_else(|| {
            SeabooError::UnidentifiableClient(format!(
                "Malformed account header provided: {:?}",
                account_id
            ))
        })?;

    ctx.repos.accounts.find(&account_id).await.ok_or_else(|| {
        SeabooError::UnidentifiableClient(format!(
            "Unable to find the account with id: {}",
            account_id
        ))
    })
}

/// Authenticates a `User` by the json web token in the authorization header.
/// The token has to be signed by the private key of the `Account` given by
/// the `seaboo-account` header.
pub async fn protect_route(
    req: &HttpRequest,
    ctx: &SeabooContext,
) -> Result<(User, Policy), SeabooError> {
    let account = get_client_account(req, ctx).await?;
    auth_user_req(req, &account, ctx).await
}

/// Authenticates an `Account` admin by the secret api key in the `x-api-key` header
pub async fn protect_account_route(
    req: &HttpRequest,
    ctx: &SeabooContext,
) -> Result<Account, SeabooError> {
    let api_key = match req.headers().get(API_KEY_HEADER) {
        Some(api_key) => match api_key.to_str() {
            Ok(api_key) => api_key,
            Err(_) => {
                return Err(SeabooError::Unauthorized(
                    "Malformed api key provided".to_string(),
                ))
            }
        },
        None => {
            return Err(SeabooError::Unauthorized(
                "Unable to find api-key in x-api-key header".to_string(),
            ))
        }
    };

    match ctx.repos.accounts.find_by_apikey(api_key).await {
        Some(account) => Ok(account),
        None => Err(SeabooError::Unauthorized(
            "Invalid api-key provided in x-api-key header".to_string(),
        )),
    }
}

/// Identifies the `Account` of a public route, e.g. browsing listings.
/// The api key is used if given, otherwise the `seaboo-account` header.
pub async fn protect_public_account_route(
    req: &HttpRequest,
    ctx: &SeabooContext,
) -> Result<Account, SeabooError> {
    if req.headers().contains_key(API_KEY_HEADER) {
        protect_account_route(req, ctx).await
    } else {
        get_client_account(req, ctx).await
    }
}

/// Only allow modifications to `User`s that belong to the admin `Account`
pub async fn account_can_modify_user(
    account: &Account,
    user_id: &ID,
    ctx: &SeabooContext,
) -> Result<User, SeabooError> {
    match ctx.repos.users.find_by_account_id(user_id, &account.id).await {
        Some(user) => Ok(user),
        None => Err(SeabooError::NotFound(format!(
            "The user with id: {}, was not found.",
            user_id
        ))),
    }
}

/// Only allow modifications to `Listing`s that belong to the admin `Account`
pub async fn account_can_modify_listing(
    account: &Account,
    listing_id: &ID,
    ctx: &SeabooContext,
) -> Result<Listing, SeabooError> {
    match ctx.repos.listings.find(listing_id).await {
        Some(listing) if listing.account_id == account.id => Ok(listing),
        _ => Err(SeabooError::NotFound(format!(
            "The listing with id: {}, was not found.",
            listing_id
        ))),
    }
}

/// Only the owner can modify a `Listing`
pub async fn user_can_modify_listing(
    user: &User,
    listing_id: &ID,
    ctx: &SeabooContext,
) -> Result<Listing, SeabooError> {
    match ctx.repos.listings.find(listing_id).await {
        Some(listing) if listing.account_id == user.account_id && listing.is_owned_by(&user.id) => {
            Ok(listing)
        }
        _ => Err(SeabooError::NotFound(format!(
            "The listing with id: {}, was not found.",
            listing_id
        ))),
    }
}

/// Only allow modifications to `Booking`s that belong to the admin `Account`
pub async fn account_can_modify_booking(
    account: &Account,
    booking_id: &ID,
    ctx: &SeabooContext,
) -> Result<Booking, SeabooError> {
    match ctx.repos.bookings.find(booking_id).await {
        Some(booking) if booking.account_id == account.id => Ok(booking),
        _ => Err(SeabooError::NotFound(format!(
            "The booking with id: {}, was not found.",
            booking_id
        ))),
    }
}
