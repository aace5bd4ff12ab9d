use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlerError {
    #[error("Invalid range: start slot {start_slot} is not below the current tip {latest_slot}")]
    InvalidRange { start_slot: u64, latest_slot: u64 },
    #[error("Failed blockchain client")]
    FailedBcClient(#[from] BcClientError),
    #[error("Failed to emit record")]
    FailedToEmitRecord(#[from] SinkError),
}

#[derive(Error, Debug)]
pub enum BcClientError {
    #[error("Failed to get current slot: {0}")]
    FailedToGetCurrentSlot(String),
    #[error("Failed to get blocks: {0}")]
    FailedToGetBlocks(String),
    #[error("Failed to get block {0}: {1}")]
    FailedToGetBlock(u64, String),
    #[error("Failed to get account info: {0}")]
    FailedToGetAccountInfo(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum MetadataError {
    #[error("Unsupported metadata schema version {0}")]
    UnsupportedSchemaVersion(u8),
    #[error("Metadata buffer truncated: {needed} bytes needed at offset {offset}")]
    TruncatedBuffer { offset: usize, needed: usize },
    #[error("Metadata field is not valid UTF-8")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to serialize record")]
    FailedToSerializeRecord(#[from] serde_json::Error),
}
