use super::IReviewRepo;
use seaboo_domain::{Review, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresReviewRepo {
    pool: PgPool,
}

impl PostgresReviewRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReviewRaw {
    review_uid: Uuid,
    account_uid: Uuid,
    booking_uid: Uuid,
    listing_uid: Uuid,
    author_uid: Uuid,
    rating: i16,
    comment: Option<String>,
    created: i64,
}

impl From<ReviewRaw> for Review {
    fn from(raw: ReviewRaw) -> Self {
        Self {
            id: raw.review_uid.into(),
            account_id: raw.account_uid.into(),
            booking_id: raw.booking_uid.into(),
            listing_id: raw.listing_uid.into(),
            author_id: raw.author_uid.into(),
            // Guarded by a check constraint
            rating: raw.rating.clamp(1, 5) as u8,
            comment: raw.comment,
            created: raw.created,
        }
    }
}

#[async_trait::async_trait]
impl IReviewRepo for PostgresReviewRepo {
    async fn insert(&self, review: &Review) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"
            INSERT INTO reviews(review_uid, account_uid, booking_uid, listing_uid, author_uid, rating, comment, created)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (booking_uid) DO NOTHING
            "#,
        )
        .bind(review.id.inner_ref())
        .bind(review.account_id.inner_ref())
        .bind(review.booking_id.inner_ref())
        .bind(review.listing_id.inner_ref())
        .bind(review.author_id.inner_ref())
        .bind(review.rating as i16)
        .bind(&review.comment)
        .bind(review.created)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert review: {:?}. DB returned error: {:?}",
                review.id, e
            );
            e
        })?;
        Ok(res.rows_affected() == 1)
    }

    async fn find_by_booking(&self, booking_id: &ID) -> Option<Review> {
        sqlx::query_as::<_, ReviewRaw>(
            r#"
            SELECT * FROM reviews
            WHERE booking_uid = $1
            "#,
        )
        .bind(booking_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!(
                "Find review of booking: {:?} failed. DB returned error: {:?}",
                booking_id, e
            );
            None
        })
        .map(|raw| raw.into())
    }

    async fn find_by_listing(&self, listing_id: &ID) -> Vec<Review> {
        sqlx::query_as::<_, ReviewRaw>(
            r#"
            SELECT * FROM reviews
            WHERE listing_uid = $1
            ORDER BY created DESC
            "#,
        )
        .bind(listing_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!(
                "Find reviews of listing: {:?} failed. DB returned error: {:?}",
                listing_id, e
            );
            vec![]
        })
        .into_iter()
        .map(|raw| raw.into())
        .collect()
    }
}
