use chrono::NaiveDate;

use crate::models::{NewOpportunity, OpportunityType};

/// Example listings written on first start against an empty store.
pub fn example_opportunities() -> Vec<NewOpportunity> {
    vec![
        NewOpportunity {
            title: "Summer Research Internship".to_string(),
            opportunity_type: OpportunityType::Internship,
            field: "Biology".to_string(),
            institution: Some("State University".to_string()),
            description: Some("A 10-week research internship in molecular biology.".to_string()),
            link: "https://example.com/biology-internship".to_string(),
            paid: true,
            location: Some("Denver, CO".to_string()),
            start_term: Some("Summer 2026".to_string()),
            deadline: NaiveDate::from_ymd_opt(2026, 4, 15),
            active: true,
            archived: false,
            created_at: None,
        },
        NewOpportunity {
            title: "Data Science Job".to_string(),
            opportunity_type: OpportunityType::Job,
            field: "Computer Science".to_string(),
            institution: Some("TechCorp".to_string()),
            description: Some(
                "Entry-level data analyst position focusing on Python and SQL.".to_string(),
            ),
            link: "https://example.com/data-job".to_string(),
            paid: true,
            location: Some("Remote".to_string()),
            start_term: Some("Immediate".to_string()),
            deadline: NaiveDate::from_ymd_opt(2026, 3, 1),
            active: true,
            archived: false,
            created_at: None,
        },
        NewOpportunity {
            title: "Marine Biology Research".to_string(),
            opportunity_type: OpportunityType::Research,
            field: "Environmental Science".to_string(),
            institution: Some("Oceanic Institute".to_string()),
            description: Some("Assist with field research on coastal ecosystems.".to_string()),
            link: "https://example.com/marine-research".to_string(),
            paid: false,
            location: Some("Bar Harbor, ME".to_string()),
            start_term: Some("Fall 2026".to_string()),
            deadline: NaiveDate::from_ymd_opt(2026, 8, 31),
            active: true,
            archived: false,
            created_at: None,
        },
    ]
}
