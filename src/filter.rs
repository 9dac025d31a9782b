use crate::error::Result;
use crate::models::{Opportunity, OpportunityType};

/// Normalises a type taken from a URL. Unknown categories are an error,
/// not an empty listing.
pub fn parse_type(raw: &str) -> Result<OpportunityType> {
    raw.parse()
}

/// Keeps records of one type, preserving their order.
pub fn retain_type(
    mut opportunities: Vec<Opportunity>,
    opportunity_type: OpportunityType,
) -> Vec<Opportunity> {
    opportunities.retain(|o| o.opportunity_type == opportunity_type);
    opportunities
}
