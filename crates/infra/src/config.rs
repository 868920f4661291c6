use seaboo_utils::create_random_secret;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret code used to create new `Account`s
    pub create_account_secret_code: String,
    /// Port for the application to run on
    pub port: usize,
    /// How long in millis a `Booking` request waits for the owner before it expires
    pub pending_booking_ttl: i64,
    /// Maximum number of nights that can be queried for availability at once.
    /// Keeps clients from asking for the calendar of the next decade.
    pub availability_query_limit_nights: i64,
    /// How often confirmed stays that are over get marked as completed
    pub complete_bookings_interval_secs: u64,
}

const DEFAULT_PORT: usize = 5000;
const DEFAULT_PENDING_BOOKING_TTL_MINUTES: i64 = 60 * 24;
const DEFAULT_COMPLETE_BOOKINGS_INTERVAL_SECS: u64 = 60 * 60;

impl Config {
    pub fn new() -> Self {
        let create_account_secret_code = match std::env::var("CREATE_ACCOUNT_SECRET_CODE") {
            Ok(code) => code,
            Err(_) => {
                info!("Did not find CREATE_ACCOUNT_SECRET_CODE environment variable. Going to create one.");
                let code = create_random_secret(16);
                info!(
                    "Secret code for creating accounts was generated and set to: {}",
                    code
                );
                code
            }
        };
        let port = parse_env_or("PORT", DEFAULT_PORT, |port| *port > 0);
        let pending_booking_ttl_minutes = parse_env_or(
            "PENDING_BOOKING_TTL_MINUTES",
            DEFAULT_PENDING_BOOKING_TTL_MINUTES,
            |minutes| *minutes > 0,
        );
        let complete_bookings_interval_secs = parse_env_or(
            "COMPLETE_BOOKINGS_INTERVAL_SECS",
            DEFAULT_COMPLETE_BOOKINGS_INTERVAL_SECS,
            |secs| *secs > 0,
        );

        Self {
            create_account_secret_code,
            port,
            pending_booking_ttl: pending_booking_ttl_minutes * 60 * 1000,
            availability_query_limit_nights: 366,
            complete_bookings_interval_secs,
        }
    }
}

/// Reads and parses an environment variable, falling back to `default` when it is
/// missing or invalid
fn parse_env_or<T, F>(key: &str, default: T, is_valid: F) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    F: Fn(&T) -> bool,
{
    let value = match std::env::var(key) {
        Ok(value) => value,
        Err(_) => return default,
    };
    match value.parse::<T>() {
        Ok(parsed) if is_valid(&parsed) => parsed,
        _ => {
            warn!(
                "The given {}: {} is not valid, falling back to the default: {}.",
                key, value, default
            );
            default
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
