use crate::domain::{
    errors::SinkError,
    models::{MintRecord, RecordSink},
};

/// Sink writing one JSON object per record to stdout.
#[derive(Clone, Copy, Default)]
pub struct JsonLineSink;

#[async_trait::async_trait]
impl RecordSink for JsonLineSink {
    async fn emit(&self, record: MintRecord) -> Result<(), SinkError> {
        let line = serde_json::to_string(&record)?;
        println!("{line}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn emits_null_content_for_missing_metadata() {
        let record = MintRecord {
            token_id: "FxVES5ZfUB7M6NM5GN7TDA31cjAhoUV9xaZcE6Wj35cU".to_string(),
            block_number: 42,
            content: None,
        };
        let line = serde_json::to_string(&record).unwrap();
        assert_eq!(
            line,
            r#"{"token_id":"FxVES5ZfUB7M6NM5GN7TDA31cjAhoUV9xaZcE6Wj35cU","block_number":42,"content":null}"#
        );

        assert!(JsonLineSink.emit(record).await.is_ok());
    }
}
