use crate::domain::errors::BcClientError;
use crate::domain::models::Block;
use solana_sdk::pubkey::Pubkey;

/// A trait representing a blockchain client for interacting with the Solana network.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait BcClient {
    /// Retrieves the current slot number from the Solana network.
    ///
    /// # Returns
    ///
    /// * `Result<u64, BcClientError>` - The current slot number if successful, or an error if the operation fails.
    async fn get_current_slot(&self) -> Result<u64, BcClientError>;

    /// Retrieves the confirmed slot numbers within `[start_slot, end_slot)`.
    ///
    /// The result is ascending and unique, and may be shorter than the span
    /// when slots in the range were skipped.
    ///
    /// # Arguments
    ///
    /// * `start_slot` - The starting slot number of the range, inclusive.
    /// * `end_slot` - The ending slot number of the range, exclusive.
    ///
    /// # Returns
    ///
    /// * `Result<Vec<u64>, BcClientError>` - A vector of slot numbers if successful, or an error if the operation fails.
    async fn get_blocks(&self, start_slot: u64, end_slot: u64) -> Result<Vec<u64>, BcClientError>;

    /// Retrieves a confirmed block, reduced to its token-relevant view.
    ///
    /// A skipped or unavailable slot yields a block with no transactions
    /// rather than an error.
    ///
    /// # Arguments
    ///
    /// * `slot` - The slot number of the block to retrieve.
    ///
    /// # Returns
    ///
    /// * `Result<Block, BcClientError>` - The block information if successful, or an error if the operation fails.
    async fn get_block(&self, slot: u64) -> Result<Block, BcClientError>;

    /// Retrieves the raw data of an account, or `None` when the account does
    /// not exist.
    ///
    /// # Arguments
    ///
    /// * `address` - The public key of the account to retrieve.
    ///
    /// # Returns
    ///
    /// * `Result<Option<Vec<u8>>, BcClientError>` - The account data if present, or an error if the operation fails.
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, BcClientError>;
}
