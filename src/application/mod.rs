use crate::domain::errors::CrawlerError;

pub mod block_range;
pub mod crawler;
pub mod mint_filter;

/// The `Crawler` trait defines a single discovery pass over the ledger.
///
/// A run scans every confirmed slot from `start_slot` to the current tip and
/// emits one record per discovered NFT mint. Discovery is read-only: the only
/// state carried between runs is the next start slot, held by the caller, so
/// a run can be re-issued from the same start slot and will reproduce the
/// same output.
#[async_trait::async_trait]
pub trait Crawler {
    async fn run(&self, start_slot: u64) -> Result<(), CrawlerError>;
}
