use crate::domain::errors::CrawlerError;
use crate::infrastructure::bc_client::BcClient;

/// Collects every confirmed slot in `[start_slot, tip)`.
///
/// The range is partitioned into disjoint windows of at most `page_size`
/// slots, computed by window index. Every window is queried: a window
/// returning fewer slots than its span only means slots in it were skipped,
/// never that the range is exhausted. The concatenation in window order is
/// therefore ascending and duplicate-free.
///
/// # Errors
///
/// `CrawlerError::InvalidRange` when `start_slot` is not below the current
/// tip, raised before any range query. Transport errors on any window
/// propagate verbatim.
pub async fn fetch_block_range<C>(
    bc_client: &C,
    start_slot: u64,
    page_size: u64,
) -> Result<Vec<u64>, CrawlerError>
where
    C: BcClient + Sync,
{
    let latest_slot = bc_client.get_current_slot().await?;
    if start_slot >= latest_slot {
        return Err(CrawlerError::InvalidRange {
            start_slot,
            latest_slot,
        });
    }

    let windows = (latest_slot - start_slot).div_ceil(page_size);
    let mut slots = Vec::new();

    for window in 0..windows {
        let window_start = start_slot + window * page_size;
        let window_end = latest_slot.min(window_start + page_size);
        let confirmed = bc_client.get_blocks(window_start, window_end).await?;
        tracing::debug!(
            "Window [{}, {}) returned {} confirmed slots",
            window_start,
            window_end,
            confirmed.len()
        );
        slots.extend(confirmed);
    }

    Ok(slots)
}
