use serde::{Deserialize, Serialize};

/// A collaborator on a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamMember {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

pub type TeamMembers = Vec<TeamMember>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamMemberFormData {
    pub email: String,
}
