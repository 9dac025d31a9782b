use std::io::ErrorKind;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::Opportunity;

use super::rows::parse_csv;

/// A CSV file on local disk, re-read on every call.
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A missing file means no listings yet, not a failure.
    pub async fn read_all(&self) -> Result<Vec<Opportunity>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("{} not found, listing nothing", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if let Ok(modified) = tokio::fs::metadata(&self.path).await.and_then(|m| m.modified()) {
            let modified: DateTime<Utc> = modified.into();
            tracing::debug!(
                "Reading {} (modified {})",
                self.path.display(),
                modified.to_rfc3339()
            );
        }

        parse_csv(&bytes)
    }
}
