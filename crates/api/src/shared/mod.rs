pub mod auth;
pub mod usecase;

use crate::error::SeabooError;
use seaboo_domain::DateRange;

/// Parses check-in and check-out query or body values given as `YYYY-MM-DD`
pub fn parse_date_range(start_date: &str, end_date: &str) -> Result<DateRange, SeabooError> {
    DateRange::parse(start_date, end_date).map_err(|e| SeabooError::BadClientData(e.to_string()))
}
