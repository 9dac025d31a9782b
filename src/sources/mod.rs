mod csv_file;
mod rows;
mod sheet;

use std::time::Duration;

pub use csv_file::CsvFileSource;
pub use rows::parse_csv;
pub use sheet::SheetSource;

use crate::config::SourceConfig;
use crate::db::Repository;
use crate::error::Result;
use crate::filter::retain_type;
use crate::models::{Opportunity, OpportunityType};

/// Where listings come from. Every backend is read fresh per request.
pub enum RecordSource {
    Database(Repository),
    CsvFile(CsvFileSource),
    Sheet(SheetSource),
}

impl RecordSource {
    pub async fn from_config(config: &SourceConfig) -> Result<Self> {
        let source = match config {
            SourceConfig::Sqlite { db_path, seed } => {
                let repository = Repository::new(db_path).await?;
                if *seed {
                    repository.seed_if_empty().await?;
                }
                tracing::info!("Serving opportunities from {}", db_path);
                RecordSource::Database(repository)
            }
            SourceConfig::CsvFile { path } => {
                tracing::info!("Serving opportunities from {}", path.display());
                RecordSource::CsvFile(CsvFileSource::new(path.clone()))
            }
            SourceConfig::Sheet { url, timeout_secs } => {
                tracing::info!("Serving opportunities from {}", url);
                RecordSource::Sheet(SheetSource::new(url, Duration::from_secs(*timeout_secs))?)
            }
        };
        Ok(source)
    }

    /// Newest first where creation times are known.
    pub async fn fetch(&self, filter: Option<OpportunityType>) -> Result<Vec<Opportunity>> {
        let opportunities = match self {
            RecordSource::Database(repository) => return repository.list(filter).await,
            RecordSource::CsvFile(file) => file.read_all().await?,
            RecordSource::Sheet(sheet) => sheet.fetch_all().await?,
        };

        Ok(match filter {
            Some(opportunity_type) => retain_type(opportunities, opportunity_type),
            None => opportunities,
        })
    }
}
