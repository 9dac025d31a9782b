mod opportunity;

pub use opportunity::{NewOpportunity, Opportunity, OpportunityType};
