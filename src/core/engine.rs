use crate::core::dispatcher::ValidationDispatcher;
use crate::domain::model::ValidationOutcome;
use crate::domain::ports::{GridSource, ReportSink};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::sync::Arc;

/// Orchestrates one validation run: load the grid, fan out the region
/// scans, then hand pass summaries and the final verdict to the sink.
pub struct AuditEngine<S: GridSource, R: ReportSink> {
    source: S,
    sink: R,
    dispatcher: ValidationDispatcher,
    monitor: SystemMonitor,
}

impl<S: GridSource, R: ReportSink> AuditEngine<S, R> {
    pub fn new(source: S, sink: R, workers: usize) -> Self {
        Self::new_with_monitoring(source, sink, workers, false)
    }

    pub fn new_with_monitoring(source: S, sink: R, workers: usize, monitor_enabled: bool) -> Self {
        Self {
            source,
            sink,
            dispatcher: ValidationDispatcher::new(workers),
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// The sink the engine reports into, mostly useful for inspecting a
    /// recording sink in tests.
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Runs load -> validate -> report and returns the outcome. A grid that
    /// fails validation is a normal outcome, not an error; only load and
    /// worker failures propagate as `Err`.
    pub async fn run(&self) -> Result<ValidationOutcome> {
        tracing::info!("Loading grid...");
        let grid = self.source.read_grid().await?;
        self.monitor.log_stats("load");

        tracing::info!("Scanning regions...");
        let outcome = self.dispatcher.validate_all(Arc::new(grid), &self.sink).await?;
        self.monitor.log_stats("scan");

        self.sink.report_pass("rows", outcome.invalid_rows());
        self.sink.report_pass("columns", outcome.invalid_columns());
        self.sink.report_pass("subgrids", outcome.invalid_subgrids());
        self.sink.report_final(&outcome);
        self.monitor.log_final_stats();

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Grid, RegionResult, GRID_SIZE};
    use crate::utils::error::AuditError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StaticSource(Grid);

    #[async_trait]
    impl GridSource for StaticSource {
        async fn read_grid(&self) -> Result<Grid> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl GridSource for FailingSource {
        async fn read_grid(&self) -> Result<Grid> {
            Err(AuditError::MalformedInput {
                reason: "too short".into(),
            })
        }
    }

    /// Records every sink call so tests can assert on the report stream.
    #[derive(Default)]
    struct RecordingSink {
        regions: Mutex<Vec<RegionResult>>,
        passes: Mutex<Vec<(String, usize)>>,
        finals: Mutex<Vec<bool>>,
    }

    impl ReportSink for RecordingSink {
        fn report(&self, result: &RegionResult) {
            self.regions.lock().unwrap().push(result.clone());
        }

        fn report_pass(&self, pass: &str, invalid: usize) {
            self.passes.lock().unwrap().push((pass.to_string(), invalid));
        }

        fn report_final(&self, outcome: &ValidationOutcome) {
            self.finals.lock().unwrap().push(outcome.is_valid());
        }
    }

    #[tokio::test]
    async fn engine_streams_all_regions_and_one_final_verdict() {
        let grid = Grid::from_cells([[0u8; GRID_SIZE]; GRID_SIZE]);
        let engine = AuditEngine::new(StaticSource(grid), RecordingSink::default(), 4);

        let outcome = engine.run().await.unwrap();
        assert!(outcome.is_valid());

        let sink = &engine.sink;
        assert_eq!(sink.regions.lock().unwrap().len(), 27);
        assert_eq!(
            *sink.passes.lock().unwrap(),
            vec![
                ("rows".to_string(), 0),
                ("columns".to_string(), 0),
                ("subgrids".to_string(), 0)
            ]
        );
        assert_eq!(*sink.finals.lock().unwrap(), vec![true]);
    }

    #[tokio::test]
    async fn load_failure_aborts_before_any_scan() {
        let engine = AuditEngine::new(FailingSource, RecordingSink::default(), 4);

        let err = engine.run().await.unwrap_err();
        assert!(matches!(err, AuditError::MalformedInput { .. }));
        assert!(engine.sink.regions.lock().unwrap().is_empty());
        assert!(engine.sink.finals.lock().unwrap().is_empty());
    }
}
