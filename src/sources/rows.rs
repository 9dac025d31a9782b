use chrono::NaiveDate;
use serde::Deserialize;

use crate::db::parse_datetime;
use crate::error::{AppError, Result};
use crate::models::{Opportunity, OpportunityType};

// Two-digit years are tried before four so "4/15/26" is not read as year 26.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%B %d, %Y"];

/// One CSV row as published. Every column is optional text until
/// `into_opportunity` validates it.
#[derive(Debug, Default, Deserialize)]
pub struct CsvRow {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub opportunity_type: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub paid: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_term: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub active: Option<String>,
    #[serde(default)]
    pub archived: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl CsvRow {
    /// `line` is the 1-based line in the source, used in errors.
    pub fn into_opportunity(self, line: usize) -> Result<Opportunity> {
        let title = required(self.title, "title", line)?;
        let raw_type = required(self.opportunity_type, "opportunity_type", line)?;
        let opportunity_type =
            raw_type
                .parse::<OpportunityType>()
                .map_err(|_| AppError::InvalidRecord {
                    line,
                    field: "opportunity_type",
                    reason: format!("{:?} is not internship, job or research", raw_type),
                })?;
        let link = required(self.link, "link", line)?;

        Ok(Opportunity {
            id: None,
            title,
            opportunity_type,
            field: non_empty(self.field).unwrap_or_default(),
            institution: non_empty(self.institution),
            description: non_empty(self.description),
            link,
            paid: parse_flag(self.paid.as_deref(), false),
            location: non_empty(self.location),
            start_term: non_empty(self.start_term),
            deadline: non_empty(self.deadline).and_then(|d| parse_date(&d)),
            active: parse_flag(self.active.as_deref(), true),
            archived: parse_flag(self.archived.as_deref(), false),
            created_at: non_empty(self.created_at).and_then(|s| parse_datetime(&s)),
        })
    }
}

/// Parses a whole CSV document. Rows that fail validation are skipped with
/// a warning; a broken header fails the read. Dated rows come first,
/// newest to oldest, followed by undated rows in file order.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<Opportunity>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(bytes);

    // Normalise header case so "Opportunity_Type" still lines up.
    let headers: csv::StringRecord = reader
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect();
    reader.set_headers(headers);

    let mut opportunities = Vec::new();
    for (index, record) in reader.deserialize::<CsvRow>().enumerate() {
        let line = index + 2;
        let parsed = record
            .map_err(AppError::from)
            .and_then(|row| row.into_opportunity(line));
        match parsed {
            Ok(opportunity) => opportunities.push(opportunity),
            Err(e) => tracing::warn!("Skipping CSV row: {}", e),
        }
    }

    opportunities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(opportunities)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| parse_datetime(s).map(|dt| dt.date_naive()))
}

/// Spreadsheet-style booleans. Blank or unrecognised values fall back to
/// `default`.
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_lowercase()).as_deref() {
        Some("true" | "yes" | "y" | "1" | "x" | "paid") => true,
        Some("false" | "no" | "n" | "0" | "unpaid") => false,
        _ => default,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required(value: Option<String>, field: &'static str, line: usize) -> Result<String> {
    non_empty(value).ok_or_else(|| AppError::InvalidRecord {
        line,
        field,
        reason: "missing".to_string(),
    })
}
