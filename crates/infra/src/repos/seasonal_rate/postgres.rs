use super::ISeasonalRateRepo;
use seaboo_domain::{DateRange, NaiveDate, SeasonalRate, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresSeasonalRateRepo {
    pool: PgPool,
}

impl PostgresSeasonalRateRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SeasonalRateRaw {
    rate_uid: Uuid,
    account_uid: Uuid,
    listing_uid: Uuid,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    nightly_price: i64,
    created: i64,
}

impl TryFrom<SeasonalRateRaw> for SeasonalRate {
    type Error = anyhow::Error;

    fn try_from(raw: SeasonalRateRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.rate_uid.into(),
            account_id: raw.account_uid.into(),
            listing_id: raw.listing_uid.into(),
            name: raw.name,
            range: DateRange::new(raw.start_date, raw.end_date)?,
            nightly_price: raw.nightly_price,
            created: raw.created,
        })
    }
}

fn to_rates(raws: Vec<SeasonalRateRaw>) -> Vec<SeasonalRate> {
    raws.into_iter()
        .filter_map(|raw| match SeasonalRate::try_from(raw) {
            Ok(rate) => Some(rate),
            Err(e) => {
                error!("Stored seasonal rate could not be read: {:?}", e);
                None
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl ISeasonalRateRepo for PostgresSeasonalRateRepo {
    async fn insert(&self, rate: &SeasonalRate) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO seasonal_rates(rate_uid, account_uid, listing_uid, name, start_date, end_date, nightly_price, created)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(rate.id.inner_ref())
        .bind(rate.account_id.inner_ref())
        .bind(rate.listing_id.inner_ref())
        .bind(&rate.name)
        .bind(rate.range.start())
        .bind(rate.range.end())
        .bind(rate.nightly_price)
        .bind(rate.created)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert seasonal rate: {:?}. DB returned error: {:?}",
                rate.id, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, rate_id: &ID) -> Option<SeasonalRate> {
        let raw = sqlx::query_as::<_, SeasonalRateRaw>(
            r#"
            SELECT * FROM seasonal_rates
            WHERE rate_uid = $1
            "#,
        )
        .bind(rate_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Find seasonal rate: {:?} failed. DB returned error: {:?}", rate_id, e);
            None
        })?;
        to_rates(vec![raw]).pop()
    }

    async fn delete(&self, rate_id: &ID) -> Option<SeasonalRate> {
        let raw = sqlx::query_as::<_, SeasonalRateRaw>(
            r#"
            DELETE FROM seasonal_rates
            WHERE rate_uid = $1
            RETURNING *
            "#,
        )
        .bind(rate_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Delete seasonal rate: {:?} failed. DB returned error: {:?}", rate_id, e);
            None
        })?;
        to_rates(vec![raw]).pop()
    }

    async fn find_by_listing(&self, listing_id: &ID) -> Vec<SeasonalRate> {
        let raws = sqlx::query_as::<_, SeasonalRateRaw>(
            r#"
            SELECT * FROM seasonal_rates
            WHERE listing_uid = $1
            ORDER BY start_date
            "#,
        )
        .bind(listing_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!(
                "Find seasonal rates of listing: {:?} failed. DB returned error: {:?}",
                listing_id, e
            );
            vec![]
        });
        to_rates(raws)
    }

    async fn delete_by_listing(&self, listing_id: &ID) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            DELETE FROM seasonal_rates
            WHERE listing_uid = $1
            "#,
        )
        .bind(listing_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected())
    }
}
