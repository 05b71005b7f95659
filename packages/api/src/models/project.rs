use serde::{Deserialize, Serialize};

use super::TaskProject;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub description: String,
    /// Id of the managing user.
    pub manager: String,
    pub tasks: Vec<TaskProject>,
    /// Ids of the collaborators.
    pub team: Vec<String>,
}

/// Project as listed on the dashboard (no tasks or team).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardProject {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub description: String,
    pub manager: String,
}

pub type DashboardProjects = Vec<DashboardProject>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectFormData {
    #[serde(rename = "projectName")]
    pub project_name: String,
    #[serde(rename = "clientName")]
    pub client_name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    #[test]
    fn test_project_from_backend_json() {
        let json = r#"{
            "_id": "p1",
            "projectName": "Website",
            "clientName": "ACME",
            "description": "Relaunch",
            "manager": "u1",
            "tasks": [{"_id": "t1", "name": "Wireframes", "description": "", "status": "pending"}],
            "team": ["u2", "u3"]
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.manager, "u1");
        assert_eq!(project.client_name, "ACME");
        assert_eq!(project.team, ["u2", "u3"]);
        assert_eq!(project.tasks[0].status, TaskStatus::Pending);
    }

    #[test]
    fn test_dashboard_ignores_extra_fields() {
        let json = r#"[{"_id": "p1", "projectName": "Website", "clientName": "ACME",
            "description": "Relaunch", "manager": "u1", "tasks": [], "team": []}]"#;
        let projects: DashboardProjects = serde_json::from_str(json).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].project_name, "Website");
    }
}
