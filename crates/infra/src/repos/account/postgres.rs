use super::IAccountRepo;
use seaboo_domain::{Account, AccountSettings, PEMKey, ID};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};
use tracing::error;

pub struct PostgresAccountRepo {
    pool: PgPool,
}

impl PostgresAccountRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AccountRaw {
    account_uid: Uuid,
    secret_api_key: String,
    public_jwt_key: Option<String>,
    settings: Json<AccountSettings>,
}

impl TryFrom<AccountRaw> for Account {
    type Error = anyhow::Error;

    fn try_from(raw: AccountRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: raw.account_uid.into(),
            secret_api_key: raw.secret_api_key,
            public_jwt_key: raw.public_jwt_key.map(PEMKey::new).transpose()?,
            settings: raw.settings.0,
        })
    }
}

fn to_account(raw: Option<AccountRaw>) -> Option<Account> {
    match Account::try_from(raw?) {
        Ok(account) => Some(account),
        Err(e) => {
            error!("Stored account could not be read: {:?}", e);
            None
        }
    }
}

#[async_trait::async_trait]
impl IAccountRepo for PostgresAccountRepo {
    async fn insert(&self, account: &Account) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts(account_uid, secret_api_key, public_jwt_key, settings)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(account.id.inner_ref())
        .bind(&account.secret_api_key)
        .bind(account.public_jwt_key.clone().map(|key| key.inner()))
        .bind(Json(&account.settings))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert account: {:?}. DB returned error: {:?}",
                account.id, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, account: &Account) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE accounts
            SET secret_api_key = $2,
            public_jwt_key = $3,
            settings = $4
            WHERE account_uid = $1
            "#,
        )
        .bind(account.id.inner_ref())
        .bind(&account.secret_api_key)
        .bind(account.public_jwt_key.clone().map(|key| key.inner()))
        .bind(Json(&account.settings))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save account: {:?}. DB returned error: {:?}",
                account.id, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, account_id: &ID) -> Option<Account> {
        let raw = sqlx::query_as::<_, AccountRaw>(
            r#"
            SELECT * FROM accounts
            WHERE account_uid = $1
            "#,
        )
        .bind(account_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Find account: {:?} failed. DB returned error: {:?}", account_id, e);
            None
        });
        to_account(raw)
    }

    async fn delete(&self, account_id: &ID) -> Option<Account> {
        let raw = sqlx::query_as::<_, AccountRaw>(
            r#"
            DELETE FROM accounts
            WHERE account_uid = $1
            RETURNING *
            "#,
        )
        .bind(account_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Delete account: {:?} failed. DB returned error: {:?}", account_id, e);
            None
        });
        to_account(raw)
    }

    async fn find_by_apikey(&self, api_key: &str) -> Option<Account> {
        let raw = sqlx::query_as::<_, AccountRaw>(
            r#"
            SELECT * FROM accounts
            WHERE secret_api_key = $1
            "#,
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!("Find account by api key failed. DB returned error: {:?}", e);
            None
        });
        to_account(raw)
    }
}
