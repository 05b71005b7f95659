use serde::{Deserialize, Serialize};

use super::User;

/// A comment left on a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    #[serde(rename = "createdBy")]
    pub created_by: User,
    /// Id of the task the note belongs to.
    pub task: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoteFormData {
    pub content: String,
}
