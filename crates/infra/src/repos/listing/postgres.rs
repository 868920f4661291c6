use super::IListingRepo;
use seaboo_domain::{
    BookingRules, CancellationPolicy, Discount, DiscountStacking, Listing, ListingKind, Metadata,
    Tz, ID,
};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};
use tracing::error;

pub struct PostgresListingRepo {
    pool: PgPool,
}

impl PostgresListingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ListingRaw {
    listing_uid: Uuid,
    account_uid: Uuid,
    owner_uid: Uuid,
    name: String,
    kind: Json<ListingKind>,
    timezone: String,
    currency: String,
    base_price: i64,
    weekend_price: Option<i64>,
    cleaning_fee: i64,
    rules: Json<BookingRules>,
    discounts: Json<Vec<Discount>>,
    stacking: Json<DiscountStacking>,
    cancellation_policy: Json<CancellationPolicy>,
    active: bool,
    metadata: Json<Metadata>,
    created: i64,
    updated: i64,
}

impl TryFrom<ListingRaw> for Listing {
    type Error = anyhow::Error;

    fn try_from(raw: ListingRaw) -> anyhow::Result<Self> {
        let timezone = raw
            .timezone
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("Invalid stored timezone {}: {}", raw.timezone, e))?;
        Ok(Self {
            id: raw.listing_uid.into(),
            account_id: raw.account_uid.into(),
            owner_id: raw.owner_uid.into(),
            name: raw.name,
            kind: raw.kind.0,
            timezone,
            currency: raw.currency,
            base_price: raw.base_price,
            weekend_price: raw.weekend_price,
            cleaning_fee: raw.cleaning_fee,
            rules: raw.rules.0,
            discounts: raw.discounts.0,
            stacking: raw.stacking.0,
            cancellation_policy: raw.cancellation_policy.0,
            active: raw.active,
            metadata: raw.metadata.0,
            created: raw.created,
            updated: raw.updated,
        })
    }
}

fn to_listings(raws: Vec<ListingRaw>) -> Vec<Listing> {
    raws.into_iter()
        .filter_map(|raw| match Listing::try_from(raw) {
            Ok(listing) => Some(listing),
            Err(e) => {
                error!("Stored listing could not be read: {:?}", e);
                None
            }
        })
        .collect()
}

#[async_trait::async_trait]
impl IListingRepo for PostgresListingRepo {
    async fn insert(&self, listing: &Listing) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO listings(
                listing_uid, account_uid, owner_uid, name, kind, timezone, currency,
                base_price, weekend_price, cleaning_fee, rules, discounts, stacking,
                cancellation_policy, active, metadata, created, updated
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            "#,
        )
        .bind(listing.id.inner_ref())
        .bind(listing.account_id.inner_ref())
        .bind(listing.owner_id.inner_ref())
        .bind(&listing.name)
        .bind(Json(&listing.kind))
        .bind(listing.timezone.name())
        .bind(&listing.currency)
        .bind(listing.base_price)
        .bind(listing.weekend_price)
        .bind(listing.cleaning_fee)
        .bind(Json(&listing.rules))
        .bind(Json(&listing.discounts))
        .bind(Json(&listing.stacking))
        .bind(Json(&listing.cancellation_policy))
        .bind(listing.active)
        .bind(Json(&listing.metadata))
        .bind(listing.created)
        .bind(listing.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert listing: {:?}. DB returned error: {:?}",
                listing.id, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, listing: &Listing) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE listings
            SET name = $2,
            kind = $3,
            timezone = $4,
            currency = $5,
            base_price = $6,
            weekend_price = $7,
            cleaning_fee = $8,
            rules = $9,
            discounts = $10,
            stacking = $11,
            cancellation_policy = $12,
            active = $13,
            metadata = $14,
            updated = $15
            WHERE listing_uid = $1
            "#,
        )
        .bind(listing.id.inner_ref())
        .bind(&listing.name)
        .bind(Json(&listing.kind))
        .bind(listing.timezone.name())
        .bind(&listing.currency)
        .bind(listing.base_price)
        .bind(listing.weekend_price)
        .bind(listing.cleaning_fee)
        .bind(Json(&listing.rules))
        .bind(Json(&listing.discounts))
        .bind(Json(&listing.stacking))
        .bind(Json(&listing.cancellation_policy))
        .bind(listing.active)
        .bind(Json(&listing.metadata))
        .bind(listing.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save listing: {:?}. DB returned error: {:?}",
                listing.id, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, listing_id: &ID) -> Option<Listing> {
        let raw = sqlx::query_as::<_, ListingRaw>(
            r#"
            SELECT * FROM listings
            WHERE listing_uid = $1
            "#,
        )
        .bind(listing_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Find listing: {:?} failed. DB returned error: {:?}", listing_id, e);
            None
        })?;
        to_listings(vec![raw]).pop()
    }

    async fn find_by_owner(&self, owner_id: &ID) -> Vec<Listing> {
        let raws = sqlx::query_as::<_, ListingRaw>(
            r#"
            SELECT * FROM listings
            WHERE owner_uid = $1
            ORDER BY created
            "#,
        )
        .bind(owner_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!(
                "Find listings of owner: {:?} failed. DB returned error: {:?}",
                owner_id, e
            );
            vec![]
        });
        to_listings(raws)
    }

    async fn delete(&self, listing_id: &ID) -> Option<Listing> {
        let raw = sqlx::query_as::<_, ListingRaw>(
            r#"
            DELETE FROM listings
            WHERE listing_uid = $1
            RETURNING *
            "#,
        )
        .bind(listing_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Delete listing: {:?} failed. DB returned error: {:?}", listing_id, e);
            None
        })?;
        to_listings(vec![raw]).pop()
    }
}
