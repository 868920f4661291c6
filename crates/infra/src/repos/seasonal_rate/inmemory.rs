use super::ISeasonalRateRepo;
use crate::repos::shared::inmemory_repo::*;
use seaboo_domain::{SeasonalRate, ID};

pub struct InMemorySeasonalRateRepo {
    rates: std::sync::Mutex<Vec<SeasonalRate>>,
}

impl InMemorySeasonalRateRepo {
    pub fn new() -> Self {
        Self {
            rates: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ISeasonalRateRepo for InMemorySeasonalRateRepo {
    async fn insert(&self, rate: &SeasonalRate) -> anyhow::Result<()> {
        insert(rate, &self.rates);
        Ok(())
    }

    async fn find(&self, rate_id: &ID) -> Option<SeasonalRate> {
        find(rate_id, &self.rates)
    }

    async fn delete(&self, rate_id: &ID) -> Option<SeasonalRate> {
        delete(rate_id, &self.rates)
    }

    async fn find_by_listing(&self, listing_id: &ID) -> Vec<SeasonalRate> {
        let mut rates = find_by(&self.rates, |r| r.listing_id == *listing_id);
        rates.sort_by_key(|r| r.range.start());
        rates
    }

    async fn delete_by_listing(&self, listing_id: &ID) -> anyhow::Result<u64> {
        Ok(delete_by(&self.rates, |r| r.listing_id == *listing_id))
    }
}
