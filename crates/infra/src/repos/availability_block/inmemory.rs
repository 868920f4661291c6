use super::IAvailabilityBlockRepo;
use crate::repos::shared::inmemory_repo::*;
use seaboo_domain::{AvailabilityBlock, DateRange, ID};

pub struct InMemoryAvailabilityBlockRepo {
    blocks: std::sync::Mutex<Vec<AvailabilityBlock>>,
}

impl InMemoryAvailabilityBlockRepo {
    pub fn new() -> Self {
        Self {
            blocks: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IAvailabilityBlockRepo for InMemoryAvailabilityBlockRepo {
    async fn insert(&self, block: &AvailabilityBlock) -> anyhow::Result<()> {
        insert(block, &self.blocks);
        Ok(())
    }

    async fn find(&self, block_id: &ID) -> Option<AvailabilityBlock> {
        find(block_id, &self.blocks)
    }

    async fn delete(&self, block_id: &ID) -> Option<AvailabilityBlock> {
        delete(block_id, &self.blocks)
    }

    async fn find_by_listing(
        &self,
        listing_id: &ID,
        range: Option<&DateRange>,
    ) -> Vec<AvailabilityBlock> {
        let mut blocks = find_by(&self.blocks, |b| {
            b.listing_id == *listing_id && range.map(|r| r.overlaps(&b.range)).unwrap_or(true)
        });
        blocks.sort_by_key(|b| b.range.start());
        blocks
    }

    async fn delete_by_listing(&self, listing_id: &ID) -> anyhow::Result<u64> {
        Ok(delete_by(&self.blocks, |b| b.listing_id == *listing_id))
    }
}
