use crate::core::scanner::scan_region;
use crate::domain::model::{Grid, RegionKind, ValidationOutcome};
use crate::domain::ports::ReportSink;
use crate::utils::error::{AuditError, Result};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Fans the 27 regions out over a pool of scan tasks and folds the results
/// into one outcome.
///
/// The grid is shared read-only, so workers need no locking; only the fold
/// is a shared accumulator, and it runs solely on the dispatching task as
/// workers are joined. Rows, columns, and subgrids all go through the same
/// pool; there is no dedicated per-pass worker.
pub struct ValidationDispatcher {
    workers: usize,
}

impl ValidationDispatcher {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    /// Scans every region of the grid and aggregates their validity.
    ///
    /// Each completed scan is streamed to `sink` as it lands (completion
    /// order); the returned outcome is in canonical region order, so two
    /// runs over the same grid compare equal regardless of scheduling.
    /// An invalid region never aborts sibling scans.
    pub async fn validate_all(
        &self,
        grid: Arc<Grid>,
        sink: &dyn ReportSink,
    ) -> Result<ValidationOutcome> {
        let regions = RegionKind::all();
        let chunk_size = regions.len().div_ceil(self.workers);

        tracing::debug!(
            "dispatching {} regions across up to {} workers",
            regions.len(),
            self.workers
        );

        let mut tasks = JoinSet::new();
        for chunk in regions.chunks(chunk_size) {
            let grid = Arc::clone(&grid);
            let chunk = chunk.to_vec();
            tasks.spawn(async move {
                chunk
                    .into_iter()
                    .map(|kind| scan_region(&grid, kind))
                    .collect::<Vec<_>>()
            });
        }

        let mut results = Vec::with_capacity(regions.len());
        while let Some(joined) = tasks.join_next().await {
            let batch = joined.map_err(|err| AuditError::Worker {
                message: err.to_string(),
            })?;
            for result in batch {
                sink.report(&result);
                results.push(result);
            }
        }

        Ok(ValidationOutcome::new(results))
    }
}
