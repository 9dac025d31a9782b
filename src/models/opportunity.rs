use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpportunityType {
    Internship,
    Job,
    Research,
}

impl OpportunityType {
    pub const ALL: [OpportunityType; 3] = [
        OpportunityType::Internship,
        OpportunityType::Job,
        OpportunityType::Research,
    ];

    /// Lower-case slug, as used in URLs and comparisons.
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityType::Internship => "internship",
            OpportunityType::Job => "job",
            OpportunityType::Research => "research",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OpportunityType::Internship => "Internship",
            OpportunityType::Job => "Job",
            OpportunityType::Research => "Research",
        }
    }

    pub fn plural_label(&self) -> &'static str {
        match self {
            OpportunityType::Internship => "Internships",
            OpportunityType::Job => "Jobs",
            OpportunityType::Research => "Research Positions",
        }
    }
}

impl FromStr for OpportunityType {
    type Err = AppError;

    /// Case-insensitive. Surrounding whitespace is not ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        OpportunityType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| AppError::InvalidOpportunityType(s.to_string()))
    }
}

impl ToSql for OpportunityType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for OpportunityType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        text.parse().map_err(|_| FromSqlError::InvalidType)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Opportunity {
    /// Only present for rows read from the relational store.
    pub id: Option<i64>,
    pub title: String,
    pub opportunity_type: OpportunityType,
    pub field: String,
    pub institution: Option<String>,
    pub description: Option<String>,
    pub link: String,
    pub paid: bool,
    pub location: Option<String>,
    pub start_term: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub active: bool,
    pub archived: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Opportunity {
    pub fn deadline_label(&self) -> Option<String> {
        self.deadline.map(|d| d.format("%B %-d, %Y").to_string())
    }

    pub fn is_listed(&self) -> bool {
        self.active && !self.archived
    }
}

#[derive(Debug, Clone)]
pub struct NewOpportunity {
    pub title: String,
    pub opportunity_type: OpportunityType,
    pub field: String,
    pub institution: Option<String>,
    pub description: Option<String>,
    pub link: String,
    pub paid: bool,
    pub location: Option<String>,
    pub start_term: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub active: bool,
    pub archived: bool,
    /// Stamped with the insert time when absent.
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Opportunity> for NewOpportunity {
    fn from(o: Opportunity) -> Self {
        NewOpportunity {
            title: o.title,
            opportunity_type: o.opportunity_type,
            field: o.field,
            institution: o.institution,
            description: o.description,
            link: o.link,
            paid: o.paid,
            location: o.location,
            start_term: o.start_term,
            deadline: o.deadline,
            active: o.active,
            archived: o.archived,
            created_at: o.created_at,
        }
    }
}
