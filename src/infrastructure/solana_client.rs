use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::rpc_request::RpcError;
use solana_client::{nonblocking::rpc_client::RpcClient, rpc_config::RpcBlockConfig};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_transaction_status::{
    EncodedTransactionWithStatusMeta, TransactionDetails, UiConfirmedBlock,
    UiTransactionEncoding, UiTransactionTokenBalance,
};
use std::sync::Arc;
use tokio_retry::{
    strategy::{jitter, ExponentialBackoff},
    Retry,
};

use crate::domain::errors::BcClientError;
use crate::domain::models::{Block, TokenBalance, TokenTransaction};

use super::bc_client::BcClient;

// RPC error codes for slots without a retrievable block.
const BLOCK_NOT_AVAILABLE: i64 = -32004;
const SLOT_SKIPPED: i64 = -32007;
const LONG_TERM_STORAGE_SLOT_SKIPPED: i64 = -32009;

/// A client for interacting with the Solana blockchain.
#[derive(Clone)]
pub struct SolanaClient {
    rpc_client: Arc<RpcClient>,
}

impl SolanaClient {
    /// Creates a new `SolanaClient` instance from the given RPC URL.
    ///
    /// # Arguments
    ///
    /// * `rpc_url` - The URL of the Solana RPC endpoint.
    ///
    /// # Returns
    ///
    /// A new `SolanaClient` instance.
    pub fn from_url(rpc_url: &str) -> Self {
        Self {
            rpc_client: Arc::new(RpcClient::new_with_commitment(
                rpc_url.to_string(),
                CommitmentConfig::confirmed(),
            )),
        }
    }
}

#[async_trait::async_trait]
impl BcClient for SolanaClient {
    /// Retrieves the current slot number from the Solana blockchain.
    ///
    /// # Returns
    ///
    /// The current slot number as a `u64`, or a `BcClientError` if the operation fails.
    async fn get_current_slot(&self) -> Result<u64, BcClientError> {
        let retry_strategy = ExponentialBackoff::from_millis(500).map(jitter).take(3);

        let result = Retry::spawn(retry_strategy, || self.rpc_client.get_slot())
            .await
            .map_err(|e| BcClientError::FailedToGetCurrentSlot(e.to_string()))?;
        Ok(result)
    }

    /// Retrieves the confirmed slot numbers within `[start_slot, end_slot)`
    /// from the Solana blockchain.
    ///
    /// # Arguments
    ///
    /// * `start_slot` - The starting slot number, inclusive.
    /// * `end_slot` - The ending slot number, exclusive.
    ///
    /// # Returns
    ///
    /// A vector of confirmed slot numbers within the specified range, or a
    /// `BcClientError` if the operation fails.
    async fn get_blocks(&self, start_slot: u64, end_slot: u64) -> Result<Vec<u64>, BcClientError> {
        if end_slot <= start_slot {
            return Ok(Vec::new());
        }

        let retry_strategy = ExponentialBackoff::from_millis(500).map(jitter).take(3);

        // The RPC range is end-inclusive.
        let result = Retry::spawn(retry_strategy, || {
            self.rpc_client.get_blocks_with_commitment(
                start_slot,
                Some(end_slot - 1),
                CommitmentConfig::confirmed(),
            )
        })
        .await
        .map_err(|e| BcClientError::FailedToGetBlocks(e.to_string()))?;
        Ok(result)
    }

    /// Retrieves a confirmed block from the Solana blockchain, reduced to the
    /// transaction fields the crawler inspects.
    ///
    /// # Arguments
    ///
    /// * `slot` - The slot number of the block to retrieve.
    ///
    /// # Returns
    ///
    /// The block's token-relevant view; a skipped or unavailable slot yields
    /// an empty block. Any other failure is a `BcClientError`.
    async fn get_block(&self, slot: u64) -> Result<Block, BcClientError> {
        let retry_strategy = ExponentialBackoff::from_millis(500).map(jitter).take(3);

        let result = Retry::spawn(retry_strategy, || {
            self.rpc_client.get_block_with_config(
                slot,
                RpcBlockConfig {
                    transaction_details: Some(TransactionDetails::Full),
                    encoding: Some(UiTransactionEncoding::Base64),
                    rewards: Some(false),
                    commitment: Some(CommitmentConfig::confirmed()),
                    max_supported_transaction_version: Some(0),
                },
            )
        })
        .await;

        match result {
            Ok(block) => Ok(into_block(slot, block)),
            Err(ref e) if is_slot_without_block(e) => Ok(Block::empty(slot)),
            Err(e) => Err(BcClientError::FailedToGetBlock(slot, e.to_string())),
        }
    }

    /// Retrieves the raw data of an account from the Solana blockchain.
    ///
    /// # Arguments
    ///
    /// * `address` - The public key of the account to retrieve.
    ///
    /// # Returns
    ///
    /// The account data if the account exists, `None` otherwise, or a
    /// `BcClientError` if the operation fails.
    async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, BcClientError> {
        let retry_strategy = ExponentialBackoff::from_millis(500).map(jitter).take(3);

        let result = Retry::spawn(retry_strategy, || {
            self.rpc_client
                .get_account_with_commitment(address, CommitmentConfig::confirmed())
        })
        .await
        .map_err(|e| BcClientError::FailedToGetAccountInfo(e.to_string()))?;
        Ok(result.value.map(|account| account.data))
    }
}

fn is_slot_without_block(error: &ClientError) -> bool {
    matches!(
        error.kind(),
        ClientErrorKind::RpcError(RpcError::RpcResponseError { code, .. })
            if matches!(
                *code,
                BLOCK_NOT_AVAILABLE | SLOT_SKIPPED | LONG_TERM_STORAGE_SLOT_SKIPPED
            )
    )
}

fn into_block(slot: u64, block: UiConfirmedBlock) -> Block {
    let transactions = block
        .transactions
        .unwrap_or_default()
        .into_iter()
        .filter_map(into_token_transaction)
        .collect();
    Block { slot, transactions }
}

fn into_token_transaction(tx: EncodedTransactionWithStatusMeta) -> Option<TokenTransaction> {
    let meta = tx.meta?;
    let decoded = tx.transaction.decode()?;
    let account_keys = decoded
        .message
        .static_account_keys()
        .iter()
        .map(ToString::to_string)
        .collect();
    Some(TokenTransaction {
        account_keys,
        pre_token_balances: into_token_balances(meta.pre_token_balances.into()),
        post_token_balances: into_token_balances(meta.post_token_balances.into()),
    })
}

fn into_token_balances(balances: Option<Vec<UiTransactionTokenBalance>>) -> Vec<TokenBalance> {
    balances
        .unwrap_or_default()
        .into_iter()
        .map(|balance| TokenBalance {
            mint: balance.mint,
            decimals: balance.ui_token_amount.decimals,
            amount: balance.ui_token_amount.amount,
        })
        .collect()
}
