use crate::domain::team::TeamMember;

/// Data required to render the sales-team screen.
#[derive(Debug, Clone)]
pub struct TeamPageData {
    pub members: Vec<TeamMember>,
}
