use super::block_range::fetch_block_range;
use super::mint_filter::extract_candidates;
use super::Crawler;
use crate::domain::{
    errors::CrawlerError,
    metadata::{decode_metadata, MetadataAccount},
    models::{MintRecord, RecordSink},
};
use crate::infrastructure::bc_client::BcClient;
use crate::infrastructure::metaplex::derive_metadata_address;
use std::collections::HashSet;
use typed_builder::TypedBuilder;

pub const DEFAULT_PAGE_SIZE: u64 = 100_000;

/// Immutable crawl configuration, fixed at construction.
#[derive(Clone, Debug)]
pub struct CrawlerConfig {
    /// Maximum number of slots per ledger range query
    pub page_size: u64,
    /// Optional minter-program allow-list; empty means no scoping
    pub minter_programs: HashSet<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            minter_programs: HashSet::new(),
        }
    }
}

#[derive(Clone, TypedBuilder)]
pub struct SolanaCrawler<C, S> {
    bc_client: C,
    sink: S,
    config: CrawlerConfig,
}

#[async_trait::async_trait]
impl<C, S> Crawler for SolanaCrawler<C, S>
where
    C: BcClient + Send + Sync,
    S: RecordSink + Send + Sync,
{
    async fn run(&self, start_slot: u64) -> Result<(), CrawlerError> {
        let slots = fetch_block_range(&self.bc_client, start_slot, self.config.page_size).await?;
        tracing::info!(
            "Crawling {} confirmed slots starting at {}",
            slots.len(),
            start_slot
        );

        for slot in slots {
            self.process_block(slot).await?;
        }

        Ok(())
    }
}

impl<C, S> SolanaCrawler<C, S>
where
    C: BcClient + Send + Sync,
    S: RecordSink + Send + Sync,
{
    /// Emits one record per candidate mint, in transaction then candidate
    /// order within the block.
    async fn process_block(&self, slot: u64) -> Result<(), CrawlerError> {
        let block = self.bc_client.get_block(slot).await?;

        for tx in &block.transactions {
            for mint in extract_candidates(tx, &self.config.minter_programs) {
                let content = self.fetch_metadata(&mint).await?;
                self.sink
                    .emit(MintRecord {
                        token_id: mint,
                        block_number: slot,
                        content,
                    })
                    .await?;
            }
        }

        Ok(())
    }

    /// Fetches and decodes the metadata account of a mint. A missing account
    /// or a failed decode yields `None`; only transport errors propagate.
    async fn fetch_metadata(&self, mint: &str) -> Result<Option<MetadataAccount>, CrawlerError> {
        let metadata_address = match derive_metadata_address(mint) {
            Ok(address) => address,
            Err(e) => {
                tracing::warn!("Skipping mint {} with invalid key: {}", mint, e);
                return Ok(None);
            }
        };

        let Some(data) = self.bc_client.get_account_data(&metadata_address).await? else {
            return Ok(None);
        };

        match decode_metadata(&data) {
            Ok(metadata) => Ok(Some(metadata)),
            Err(e) => {
                tracing::error!("Failed to decode metadata for mint {}: {}", mint, e);
                Ok(None)
            }
        }
    }
}
