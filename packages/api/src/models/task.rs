//! Task records as returned by the project endpoints.

use serde::{Deserialize, Serialize};

use super::{Note, User};

/// Workflow state of a task. Serialized in camelCase (`onHold`, `inProgress`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    Pending,
    OnHold,
    InProgress,
    UnderReview,
    Completed,
}

/// One entry of a task's status history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusChange {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: User,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Id of the owning project.
    pub project: String,
    pub status: TaskStatus,
    #[serde(rename = "completedBy")]
    pub completed_by: Vec<StatusChange>,
    pub notes: Vec<Note>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// Task summary embedded in a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskProject {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskFormData {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_from_backend_json() {
        let json = r#"{
            "_id": "t1",
            "name": "Wireframes",
            "description": "Landing page",
            "project": "p1",
            "status": "inProgress",
            "completedBy": [
                {"_id": "h1", "user": {"_id": "u1", "name": "Ana", "email": "ana@example.com"}, "status": "onHold"}
            ],
            "notes": [
                {"_id": "n1", "content": "Looks good", "createdBy": {"_id": "u1", "name": "Ana", "email": "ana@example.com"}, "task": "t1", "createdAt": "2024-03-01T10:00:00.000Z"}
            ],
            "createdAt": "2024-03-01T09:00:00.000Z",
            "updatedAt": "2024-03-02T09:00:00.000Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.completed_by[0].status, TaskStatus::OnHold);
        assert_eq!(task.notes[0].created_by.name, "Ana");
    }

    #[test]
    fn test_status_wire_names() {
        let all = [
            TaskStatus::Pending,
            TaskStatus::OnHold,
            TaskStatus::InProgress,
            TaskStatus::UnderReview,
            TaskStatus::Completed,
        ];
        let names: Vec<String> = all
            .iter()
            .map(|s| serde_json::to_value(s).unwrap().as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            ["pending", "onHold", "inProgress", "underReview", "completed"]
        );
    }
}
