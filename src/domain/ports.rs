use crate::domain::model::{Grid, RegionResult, ValidationOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the grid comes from. The source owns the underlying resource and
/// releases it before returning, on success and error paths alike.
#[async_trait]
pub trait GridSource: Send + Sync {
    async fn read_grid(&self) -> Result<Grid>;
}

/// Where findings go. The dispatcher calls `report` once per region as
/// scans complete (completion order, not canonical order); the engine calls
/// `report_pass` once per pass and `report_final` once per run.
pub trait ReportSink: Send + Sync {
    fn report(&self, result: &RegionResult);
    fn report_pass(&self, pass: &str, invalid: usize);
    fn report_final(&self, outcome: &ValidationOutcome);
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn workers(&self) -> usize;
}
