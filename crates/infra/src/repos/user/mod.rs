mod inmemory;
mod postgres;

pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;
use seaboo_domain::{User, ID};

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn save(&self, user: &User) -> anyhow::Result<()>;
    async fn delete(&self, user_id: &ID) -> Option<User>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    /// Finds the `User` only when it belongs to the given `Account`
    async fn find_by_account_id(&self, user_id: &ID, account_id: &ID) -> Option<User>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, SeabooContext};
    use seaboo_domain::{Account, User};

    async fn create_contexts() -> Vec<SeabooContext> {
        vec![SeabooContext::create_inmemory(), setup_context().await]
    }

    #[tokio::test]
    async fn crud() {
        for ctx in create_contexts().await {
            let account = Account::default();
            ctx.repos.accounts.insert(&account).await.unwrap();
            let other_account = Account::default();
            ctx.repos.accounts.insert(&other_account).await.unwrap();

            let mut user = User::new(account.id.clone());
            ctx.repos.users.insert(&user).await.unwrap();

            assert_eq!(ctx.repos.users.find(&user.id).await, Some(user.clone()));
            assert_eq!(
                ctx.repos
                    .users
                    .find_by_account_id(&user.id, &account.id)
                    .await,
                Some(user.clone())
            );
            assert!(ctx
                .repos
                .users
                .find_by_account_id(&user.id, &other_account.id)
                .await
                .is_none());

            user.metadata.insert("skipper".into(), "yes".into());
            ctx.repos.users.save(&user).await.unwrap();
            let found = ctx.repos.users.find(&user.id).await.unwrap();
            assert_eq!(found.metadata.get("skipper"), Some(&"yes".to_string()));

            assert_eq!(ctx.repos.users.delete(&user.id).await, Some(user.clone()));
            assert!(ctx.repos.users.find(&user.id).await.is_none());
        }
    }
}
