use super::IBookingRepo;
use seaboo_domain::{
    find_conflict, AvailabilityBlock, Booking, BookingParty, BookingStatus, Cancellation,
    Conflict, DateRange, NaiveDate, ID,
};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};
use tracing::error;

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BookingRaw {
    booking_uid: Uuid,
    account_uid: Uuid,
    listing_uid: Uuid,
    owner_uid: Uuid,
    customer_uid: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    party: Json<BookingParty>,
    status: String,
    total_price: i64,
    currency: String,
    expires_at: Option<i64>,
    cancellation: Option<Json<Cancellation>>,
    created: i64,
    updated: i64,
}

impl TryFrom<BookingRaw> for Booking {
    type Error = anyhow::Error;

    fn try_from(raw: BookingRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.booking_uid.into(),
            account_id: raw.account_uid.into(),
            listing_id: raw.listing_uid.into(),
            owner_id: raw.owner_uid.into(),
            customer_id: raw.customer_uid.into(),
            range: DateRange::new(raw.start_date, raw.end_date)?,
            party: raw.party.0,
            status: raw.status.parse::<BookingStatus>()?,
            total_price: raw.total_price,
            currency: raw.currency,
            expires_at: raw.expires_at,
            cancellation: raw.cancellation.map(|c| c.0),
            created: raw.created,
            updated: raw.updated,
        })
    }
}

fn to_bookings(raws: Vec<BookingRaw>) -> Vec<Booking> {
    raws.into_iter()
        .filter_map(|raw| match Booking::try_from(raw) {
            Ok(booking) => Some(booking),
            Err(e) => {
                error!("Stored booking could not be read: {:?}", e);
                None
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl IBookingRepo for PostgresBookingRepo {
    async fn insert_if_available(
        &self,
        booking: &Booking,
        blocks: &[AvailabilityBlock],
    ) -> anyhow::Result<Option<Conflict>> {
        let mut tx = self.pool.begin().await?;

        // Serializes booking requests per listing until the transaction ends
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(booking.listing_id.as_string())
            .execute(&mut *tx)
            .await?;

        let holding = sqlx::query_as::<_, BookingRaw>(
            r#"
            SELECT * FROM bookings
            WHERE listing_uid = $1
            AND status IN ('pending', 'confirmed')
            AND start_date < $3 AND end_date > $2
            "#,
        )
        .bind(booking.listing_id.inner_ref())
        .bind(booking.range.start())
        .bind(booking.range.end())
        .fetch_all(&mut *tx)
        .await?;

        if let Some(conflict) = find_conflict(&booking.range, &to_bookings(holding), blocks) {
            tx.rollback().await?;
            return Ok(Some(conflict));
        }

        sqlx::query(
            r#"
            INSERT INTO bookings(
                booking_uid, account_uid, listing_uid, owner_uid, customer_uid, start_date,
                end_date, party, status, total_price, currency, expires_at, cancellation,
                created, updated
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(booking.id.inner_ref())
        .bind(booking.account_id.inner_ref())
        .bind(booking.listing_id.inner_ref())
        .bind(booking.owner_id.inner_ref())
        .bind(booking.customer_id.inner_ref())
        .bind(booking.range.start())
        .bind(booking.range.end())
        .bind(Json(&booking.party))
        .bind(booking.status.as_str())
        .bind(booking.total_price)
        .bind(&booking.currency)
        .bind(booking.expires_at)
        .bind(booking.cancellation.as_ref().map(Json))
        .bind(booking.created)
        .bind(booking.updated)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert booking: {:?}. DB returned error: {:?}",
                booking.id, e
            );
            e
        })?;

        tx.commit().await?;
        Ok(None)
    }

    async fn update_status(
        &self,
        booking: &Booking,
        from: BookingStatus,
    ) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            UPDATE bookings
            SET status = $2,
            expires_at = $3,
            cancellation = $4,
            updated = $5
            WHERE booking_uid = $1 AND status = $6
            "#,
        )
        .bind(booking.id.inner_ref())
        .bind(booking.status.as_str())
        .bind(booking.expires_at)
        .bind(booking.cancellation.as_ref().map(Json))
        .bind(booking.updated)
        .bind(from.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save booking: {:?}. DB returned error: {:?}",
                booking.id, e
            );
            e
        })?;
        Ok(res.rows_affected() == 1)
    }

    async fn find(&self, booking_id: &ID) -> Option<Booking> {
        let raw = sqlx::query_as::<_, BookingRaw>(
            r#"
            SELECT * FROM bookings
            WHERE booking_uid = $1
            "#,
        )
        .bind(booking_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Find booking: {:?} failed. DB returned error: {:?}", booking_id, e);
            None
        })?;
        to_bookings(vec![raw]).pop()
    }

    async fn find_by_listing(&self, listing_id: &ID, range: Option<&DateRange>) -> Vec<Booking> {
        let query = match range {
            Some(range) => sqlx::query_as::<_, BookingRaw>(
                r#"
                SELECT * FROM bookings
                WHERE listing_uid = $1 AND start_date < $3 AND end_date > $2
                ORDER BY start_date
                "#,
            )
            .bind(listing_id.inner_ref())
            .bind(range.start())
            .bind(range.end()),
            None => sqlx::query_as::<_, BookingRaw>(
                r#"
                SELECT * FROM bookings
                WHERE listing_uid = $1
                ORDER BY start_date
                "#,
            )
            .bind(listing_id.inner_ref()),
        };
        let raws = query.fetch_all(&self.pool).await.unwrap_or_else(|e| {
            error!(
                "Find bookings of listing: {:?} failed. DB returned error: {:?}",
                listing_id, e
            );
            vec![]
        });
        to_bookings(raws)
    }

    async fn find_by_customer(&self, customer_id: &ID) -> Vec<Booking> {
        let raws = sqlx::query_as::<_, BookingRaw>(
            r#"
            SELECT * FROM bookings
            WHERE customer_uid = $1
            ORDER BY start_date DESC
            "#,
        )
        .bind(customer_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!(
                "Find bookings of customer: {:?} failed. DB returned error: {:?}",
                customer_id, e
            );
            vec![]
        });
        to_bookings(raws)
    }

    async fn find_expired_pending(&self, now: i64) -> Vec<Booking> {
        let raws = sqlx::query_as::<_, BookingRaw>(
            r#"
            SELECT * FROM bookings
            WHERE status = 'pending' AND expires_at <= $1
            "#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Find expired bookings failed. DB returned error: {:?}", e);
            vec![]
        });
        to_bookings(raws)
    }

    async fn find_confirmed_ending_before(&self, date: NaiveDate) -> Vec<Booking> {
        let raws = sqlx::query_as::<_, BookingRaw>(
            r#"
            SELECT * FROM bookings
            WHERE status = 'confirmed' AND end_date < $1
            "#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Find ended bookings failed. DB returned error: {:?}", e);
            vec![]
        });
        to_bookings(raws)
    }
}
