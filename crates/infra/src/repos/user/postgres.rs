use super::IUserRepo;
use seaboo_domain::{Metadata, User, ID};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};
use tracing::error;

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: Uuid,
    account_uid: Uuid,
    metadata: Json<Metadata>,
}

impl From<UserRaw> for User {
    fn from(raw: UserRaw) -> Self {
        Self {
            id: raw.user_uid.into(),
            account_id: raw.account_uid.into(),
            metadata: raw.metadata.0,
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users(user_uid, account_uid, metadata)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(user.account_id.inner_ref())
        .bind(Json(&user.metadata))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to insert user: {:?}. DB returned error: {:?}", user.id, e);
            e
        })?;
        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET metadata = $2
            WHERE user_uid = $1
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(Json(&user.metadata))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Unable to save user: {:?}. DB returned error: {:?}", user.id, e);
            e
        })?;
        Ok(())
    }

    async fn delete(&self, user_id: &ID) -> Option<User> {
        sqlx::query_as::<_, UserRaw>(
            r#"
            DELETE FROM users
            WHERE user_uid = $1
            RETURNING *
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Delete user: {:?} failed. DB returned error: {:?}", user_id, e);
            None
        })
        .map(|raw| raw.into())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Find user: {:?} failed. DB returned error: {:?}", user_id, e);
            None
        })
        .map(|raw| raw.into())
    }

    async fn find_by_account_id(&self, user_id: &ID, account_id: &ID) -> Option<User> {
        sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users
            WHERE user_uid = $1 AND account_uid = $2
            "#,
        )
        .bind(user_id.inner_ref())
        .bind(account_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Find user: {:?} failed. DB returned error: {:?}", user_id, e);
            None
        })
        .map(|raw| raw.into())
    }
}
