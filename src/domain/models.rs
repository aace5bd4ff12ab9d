use super::errors::SinkError;
use super::metadata::MetadataAccount;
use serde::{Deserialize, Serialize};

/// A confirmed block, reduced to the fields the crawler inspects.
#[derive(Clone, Debug)]
pub struct Block {
    /// Slot the block was confirmed in
    pub slot: u64,
    /// Transactions in block order
    pub transactions: Vec<TokenTransaction>,
}

impl Block {
    /// Block for a skipped or unavailable slot.
    pub fn empty(slot: u64) -> Self {
        Self {
            slot,
            transactions: Vec::new(),
        }
    }
}

/// A transaction's token-relevant view: the accounts it touches and its
/// token-balance snapshots before and after execution.
#[derive(Clone, Debug, Default)]
pub struct TokenTransaction {
    /// Base58 keys of every account referenced by the transaction
    pub account_keys: Vec<String>,
    /// Token balances before execution
    pub pre_token_balances: Vec<TokenBalance>,
    /// Token balances after execution
    pub post_token_balances: Vec<TokenBalance>,
}

/// One entry of a pre/post token-balance snapshot.
#[derive(Clone, Debug)]
pub struct TokenBalance {
    /// Base58 key of the token mint
    pub mint: String,
    /// Number of decimals configured for the mint
    pub decimals: u8,
    /// Raw token amount as a decimal string
    pub amount: String,
}

/// One discovered mint, as handed to the output sink.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct MintRecord {
    /// Base58 key of the minted token
    pub token_id: String,
    /// Slot of the block the mint was discovered in
    pub block_number: u64,
    /// Decoded metadata, absent when the account is missing or undecodable
    pub content: Option<MetadataAccount>,
}

/// Trait for emitting discovered mint records.
#[async_trait::async_trait]
pub trait RecordSink {
    /// Emits a single record. Called in slot, transaction, candidate order.
    async fn emit(&self, record: MintRecord) -> Result<(), SinkError>;
}
