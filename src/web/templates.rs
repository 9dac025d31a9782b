use askama::Template;

use crate::models::{Opportunity, OpportunityType};

#[derive(Template)]
#[template(path = "landing.html")]
pub struct Landing {
    pub types: [OpportunityType; 3],
}

#[derive(Template)]
#[template(path = "opportunities.html")]
pub struct Listing<'a> {
    pub opportunities: &'a [Opportunity],
    pub opp_type: Option<OpportunityType>,
    pub types: [OpportunityType; 3],
}

impl Listing<'_> {
    pub fn heading(&self) -> &'static str {
        match self.opp_type {
            Some(t) => t.plural_label(),
            None => "All Opportunities",
        }
    }
}

#[derive(Template)]
#[template(path = "map.html")]
pub struct InternshipMap<'a> {
    pub internships: &'a [Opportunity],
}

#[derive(Template)]
#[template(path = "guides.html")]
pub struct Guides {}
