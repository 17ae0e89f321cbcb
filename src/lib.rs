pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ConsoleSink, FileGridSource};
pub use crate::core::{dispatcher::ValidationDispatcher, engine::AuditEngine};
pub use domain::model::{Grid, RegionKind, RegionResult, ValidationOutcome};
pub use domain::ports::{ConfigProvider, GridSource, ReportSink};
pub use utils::error::{AuditError, Result};
