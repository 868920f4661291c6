mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{
    IAccountRepo, IAvailabilityBlockRepo, IBookingRepo, IListingRepo, IReviewRepo,
    ISeasonalRateRepo, IUserRepo, Repos,
};
pub use services::*;
use std::sync::Arc;
pub use system::{FixedSys, ISys, RealSys};
use tracing::info;

#[derive(Clone)]
pub struct SeabooContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub webhooks: Arc<dyn IWebhookSender>,
}

impl SeabooContext {
    async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let repos = Repos::create_postgres(connection_string).await?;
        Ok(Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            webhooks: Arc::new(HttpWebhookSender::new()),
        })
    }

    /// Context backed by inmemory repositories. Webhooks are recorded instead
    /// of sent.
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            webhooks: Arc::new(RecordingWebhookSender::new()),
        }
    }
}

/// Will setup the infrastructure context given the environment.
/// Postgres is used when DATABASE_URL is set, otherwise everything is kept in memory.
pub async fn setup_context() -> SeabooContext {
    match std::env::var("DATABASE_URL") {
        Ok(connection_string) => match SeabooContext::create_postgres(&connection_string).await {
            Ok(ctx) => ctx,
            Err(e) => panic!("Unable to connect to postgres given by DATABASE_URL: {:?}", e),
        },
        Err(_) => {
            info!("DATABASE_URL is not set, falling back to inmemory repositories");
            SeabooContext::create_inmemory()
        }
    }
}
