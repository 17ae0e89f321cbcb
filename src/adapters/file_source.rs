use crate::core::{Grid, GridSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the grid from an on-disk file of 81 digit characters. The file
/// handle lives only for the duration of the read, so it is released on
/// error paths too.
#[derive(Debug, Clone)]
pub struct FileGridSource {
    path: PathBuf,
}

impl FileGridSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl GridSource for FileGridSource {
    async fn read_grid(&self) -> Result<Grid> {
        tracing::debug!("reading grid from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await?;
        Grid::parse(&bytes)
    }
}
