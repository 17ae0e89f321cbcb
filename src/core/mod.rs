pub mod dispatcher;
pub mod engine;
pub mod scanner;

pub use crate::domain::model::{Grid, RegionKind, RegionResult, ValidationOutcome};
pub use crate::domain::ports::{ConfigProvider, GridSource, ReportSink};
pub use crate::utils::error::Result;
