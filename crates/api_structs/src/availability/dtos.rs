use seaboo_domain::{AvailabilityBlock, AvailabilityCalendar, CalendarDay, DateRange, NaiveDate, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityBlockDTO {
    pub id: ID,
    pub listing_id: ID,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub note: Option<String>,
    pub created: i64,
}

impl AvailabilityBlockDTO {
    pub fn new(block: AvailabilityBlock) -> Self {
        Self {
            id: block.id,
            listing_id: block.listing_id,
            start_date: block.range.start(),
            end_date: block.range.end(),
            note: block.note,
            created: block.created,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityCalendarDTO {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Whether every night in the range is available
    pub available: bool,
    pub days: Vec<CalendarDay>,
    pub free_ranges: Vec<DateRange>,
}

impl AvailabilityCalendarDTO {
    pub fn new(calendar: AvailabilityCalendar) -> Self {
        Self {
            start_date: calendar.range.start(),
            end_date: calendar.range.end(),
            available: calendar.is_available(),
            free_ranges: calendar.free_ranges(),
            days: calendar.days,
        }
    }
}
