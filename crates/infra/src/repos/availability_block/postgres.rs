use super::IAvailabilityBlockRepo;
use seaboo_domain::{AvailabilityBlock, DateRange, NaiveDate, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresAvailabilityBlockRepo {
    pool: PgPool,
}

impl PostgresAvailabilityBlockRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AvailabilityBlockRaw {
    block_uid: Uuid,
    account_uid: Uuid,
    listing_uid: Uuid,
    start_date: NaiveDate,
    end_date: NaiveDate,
    note: Option<String>,
    created: i64,
}

impl TryFrom<AvailabilityBlockRaw> for AvailabilityBlock {
    type Error = anyhow::Error;

    fn try_from(raw: AvailabilityBlockRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.block_uid.into(),
            account_id: raw.account_uid.into(),
            listing_id: raw.listing_uid.into(),
            range: DateRange::new(raw.start_date, raw.end_date)?,
            note: raw.note,
            created: raw.created,
        })
    }
}

fn to_blocks(raws: Vec<AvailabilityBlockRaw>) -> Vec<AvailabilityBlock> {
    raws.into_iter()
        .filter_map(|raw| match AvailabilityBlock::try_from(raw) {
            Ok(block) => Some(block),
            Err(e) => {
                error!("Stored availability block could not be read: {:?}", e);
                None
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl IAvailabilityBlockRepo for PostgresAvailabilityBlockRepo {
    async fn insert(&self, block: &AvailabilityBlock) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO availability_blocks(block_uid, account_uid, listing_uid, start_date, end_date, note, created)
            VALUES($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(block.id.inner_ref())
        .bind(block.account_id.inner_ref())
        .bind(block.listing_id.inner_ref())
        .bind(block.range.start())
        .bind(block.range.end())
        .bind(&block.note)
        .bind(block.created)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert availability block: {:?}. DB returned error: {:?}",
                block.id, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, block_id: &ID) -> Option<AvailabilityBlock> {
        let raw = sqlx::query_as::<_, AvailabilityBlockRaw>(
            r#"
            SELECT * FROM availability_blocks
            WHERE block_uid = $1
            "#,
        )
        .bind(block_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Find availability block: {:?} failed. DB returned error: {:?}", block_id, e);
            None
        })?;
        to_blocks(vec![raw]).pop()
    }

    async fn delete(&self, block_id: &ID) -> Option<AvailabilityBlock> {
        let raw = sqlx::query_as::<_, AvailabilityBlockRaw>(
            r#"
            DELETE FROM availability_blocks
            WHERE block_uid = $1
            RETURNING *
            "#,
        )
        .bind(block_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Delete availability block: {:?} failed. DB returned error: {:?}", block_id, e);
            None
        })?;
        to_blocks(vec![raw]).pop()
    }

    async fn find_by_listing(
        &self,
        listing_id: &ID,
        range: Option<&DateRange>,
    ) -> Vec<AvailabilityBlock> {
        let query = match range {
            Some(range) => sqlx::query_as::<_, AvailabilityBlockRaw>(
                r#"
                SELECT * FROM availability_blocks
                WHERE listing_uid = $1 AND start_date < $3 AND end_date > $2
                ORDER BY start_date
                "#,
            )
            .bind(listing_id.inner_ref())
            .bind(range.start())
            .bind(range.end()),
            None => sqlx::query_as::<_, AvailabilityBlockRaw>(
                r#"
                SELECT * FROM availability_blocks
                WHERE listing_uid = $1
                ORDER BY start_date
                "#,
            )
            .bind(listing_id.inner_ref()),
        };
        let raws = query.fetch_all(&self.pool).await.unwrap_or_else(|e| {
            error!(
                "Find availability blocks of listing: {:?} failed. DB returned error: {:?}",
                listing_id, e
            );
            vec![]
        });
        to_blocks(raws)
    }

    async fn delete_by_listing(&self, listing_id: &ID) -> anyhow::Result<u64> {
        let res = sqlx::query(
            r#"
            DELETE FROM availability_blocks
            WHERE listing_uid = $1
            "#,
        )
        .bind(listing_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected())
    }
}
