mod account;
mod availability_block;
mod booking;
mod listing;
mod review;
mod seasonal_rate;
mod shared;
mod user;

pub use account::IAccountRepo;
use account::{InMemoryAccountRepo, PostgresAccountRepo};
pub use availability_block::IAvailabilityBlockRepo;
use availability_block::{InMemoryAvailabilityBlockRepo, PostgresAvailabilityBlockRepo};
pub use booking::IBookingRepo;
use booking::{InMemoryBookingRepo, PostgresBookingRepo};
pub use listing::IListingRepo;
use listing::{InMemoryListingRepo, PostgresListingRepo};
pub use review::IReviewRepo;
use review::{InMemoryReviewRepo, PostgresReviewRepo};
pub use seasonal_rate::ISeasonalRateRepo;
use seasonal_rate::{InMemorySeasonalRateRepo, PostgresSeasonalRateRepo};
use sqlx::{migrate::MigrateError, postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use tracing::info;
pub use user::IUserRepo;
use user::{InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub accounts: Arc<dyn IAccountRepo>,
    pub users: Arc<dyn IUserRepo>,
    pub listings: Arc<dyn IListingRepo>,
    pub blocks: Arc<dyn IAvailabilityBlockRepo>,
    pub rates: Arc<dyn ISeasonalRateRepo>,
    pub bookings: Arc<dyn IBookingRepo>,
    pub reviews: Arc<dyn IReviewRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");
        run_migration(&pool).await?;

        Ok(Self {
            accounts: Arc::new(PostgresAccountRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            listings: Arc::new(PostgresListingRepo::new(pool.clone())),
            blocks: Arc::new(PostgresAvailabilityBlockRepo::new(pool.clone())),
            rates: Arc::new(PostgresSeasonalRateRepo::new(pool.clone())),
            bookings: Arc::new(PostgresBookingRepo::new(pool.clone())),
            reviews: Arc::new(PostgresReviewRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            accounts: Arc::new(InMemoryAccountRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
            listings: Arc::new(InMemoryListingRepo::new()),
            blocks: Arc::new(InMemoryAvailabilityBlockRepo::new()),
            rates: Arc::new(InMemorySeasonalRateRepo::new()),
            bookings: Arc::new(InMemoryBookingRepo::new()),
            reviews: Arc::new(InMemoryReviewRepo::new()),
        }
    }
}

async fn run_migration(pool: &PgPool) -> Result<(), MigrateError> {
    info!("DB MIGRATIONS ...");
    sqlx::migrate!().run(pool).await?;
    info!("DB MIGRATIONS ... [done]");
    Ok(())
}
