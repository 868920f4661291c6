mod inmemory;
mod postgres;

pub use inmemory::InMemoryAccountRepo;
pub use postgres::PostgresAccountRepo;
use seaboo_domain::{Account, ID};

#[async_trait::async_trait]
pub trait IAccountRepo: Send + Sync {
    async fn insert(&self, account: &Account) -> anyhow::Result<()>;
    async fn save(&self, account: &Account) -> anyhow::Result<()>;
    async fn find(&self, account_id: &ID) -> Option<Account>;
    async fn delete(&self, account_id: &ID) -> Option<Account>;
    async fn find_by_apikey(&self, api_key: &str) -> Option<Account>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, SeabooContext};
    use seaboo_domain::{Account, PEMKey};

    /// Creates an inmemory context and the context given by the environment,
    /// which is postgres when DATABASE_URL is set and inmemory otherwise
    async fn create_contexts() -> Vec<SeabooContext> {
        vec![SeabooContext::create_inmemory(), setup_context().await]
    }

    #[tokio::test]
    async fn create_and_delete() {
        for ctx in create_contexts().await {
            let account = Account::default();

            assert!(ctx.repos.accounts.insert(&account).await.is_ok());

            let res = ctx.repos.accounts.find(&account.id).await.unwrap();
            assert_eq!(res, account);
            let res = ctx
                .repos
                .accounts
                .find_by_apikey(&account.secret_api_key)
                .await
                .unwrap();
            assert_eq!(res, account);
            assert!(ctx.repos.accounts.find_by_apikey("sk_nope").await.is_none());

            let res = ctx.repos.accounts.delete(&account.id).await;
            assert_eq!(res, Some(account.clone()));
            assert!(ctx.repos.accounts.find(&account.id).await.is_none());
        }
    }

    #[tokio::test]
    async fn update() {
        for ctx in create_contexts().await {
            let mut account = Account::default();
            assert!(ctx.repos.accounts.insert(&account).await.is_ok());

            let pubkey = std::fs::read_to_string("../api/config/test_public_rsa_key.crt").unwrap();
            account.set_public_jwt_key(Some(PEMKey::new(pubkey).unwrap()));
            assert!(account
                .settings
                .set_webhook_url(Some("https://marina.example.com/hooks".into())));

            assert!(ctx.repos.accounts.save(&account).await.is_ok());
            assert_eq!(ctx.repos.accounts.find(&account.id).await, Some(account));
        }
    }
}
