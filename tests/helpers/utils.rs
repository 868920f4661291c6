use chrono::{Duration, NaiveDate, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use seaboo_sdk::{CreateListingInput, ListingKind, ID};
use serde::Serialize;

pub const PUBLIC_KEY_PATH: &str = "./crates/api/config/test_public_rsa_key.crt";
const PRIVATE_KEY_PATH: &str = "./crates/api/config/test_private_rsa_key.pem";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Claims {
    exp: usize,
    iat: usize,
    user_id: String,
    policy: serde_json::Value,
}

/// Token for `user_id` allowed to do anything
pub fn create_token(user_id: &ID) -> String {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        exp: now + 60 * 60,
        iat: now,
        user_id: user_id.to_string(),
        policy: serde_json::json!({ "allow": ["*"] }),
    };
    let private_key = std::fs::read(PRIVATE_KEY_PATH).expect("Expected to read private key");
    let enc_key = EncodingKey::from_rsa_pem(&private_key).expect("Expected a valid RSA key");
    encode(&Header::new(Algorithm::RS256), &claims, &enc_key).expect("Expected to sign token")
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%F").to_string()
}

/// The date `days` from today (UTC), formatted as `YYYY-MM-DD`
pub fn days_from_today(days: i64) -> String {
    format_date(&(Utc::now().date_naive() + Duration::days(days)))
}

pub fn boat_listing(name: &str, base_price: i64) -> CreateListingInput {
    CreateListingInput {
        name: name.into(),
        kind: ListingKind::Boat { max_guests: 6 },
        base_price,
        currency: "EUR".into(),
        timezone: None,
        weekend_price: None,
        cleaning_fee: None,
        rules: None,
        discounts: None,
        stacking: None,
        cancellation_policy: None,
        metadata: None,
    }
}
