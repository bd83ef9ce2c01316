//! Projects API client.
//!
//! Backend: GET/POST /projects, GET/PATCH/DELETE /projects/:id, member
//! management under /projects/:id/members. All calls are scoped to the
//! organization active in the tenant store.

use crate::client::{ApiClient, RequestBody};
use crate::error::ApiError;
use crate::page::{ListQuery, Paginated};
use crate::types::{AccessControl, MachineConfiguration, UserLight};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Project list item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLight {
    /// Project id.
    pub id: String,

    /// Project name.
    pub name: String,

    /// Optional description.
    pub description: Option<String>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Full project details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project id.
    pub id: String,

    /// Project name.
    pub name: String,

    /// Optional description.
    pub description: Option<String>,

    /// Owning organization.
    pub organization_id: String,

    /// User who created the project.
    pub created_by: Option<UserLight>,

    /// Machine resources.
    pub machine_configuration: MachineConfiguration,

    /// Team members with access.
    pub team_members: Vec<UserLight>,

    /// Access control flags.
    pub access_control: AccessControl,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectInput {
    /// Project name.
    pub name: String,

    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Machine resources.
    pub machine_configuration: MachineConfiguration,

    /// User ids to add as team members.
    pub team_member_ids: Vec<String>,

    /// Access control flags.
    pub access_control: AccessControl,
}

/// Input for updating a project. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectInput {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New machine resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_configuration: Option<MachineConfiguration>,

    /// Replacement team member ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_member_ids: Option<Vec<String>>,

    /// New access control flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_control: Option<AccessControl>,
}

/// Typed call sites for the projects endpoints.
#[derive(Debug, Clone)]
pub struct ProjectsClient {
    api: ApiClient,
}

impl ProjectsClient {
    /// Client over an existing API client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List projects for the current organization, paginated.
    #[instrument(skip(self, query))]
    pub async fn list(&self, query: &ListQuery) -> Result<Paginated<ProjectLight>, ApiError> {
        self.api.list("/projects", query).await
    }

    /// Get a project by id.
    #[instrument(skip(self), fields(project_id = project_id))]
    pub async fn get(&self, project_id: &str) -> Result<Project, ApiError> {
        self.api
            .json(Method::GET, &format!("/projects/{}", project_id), None, None)
            .await
    }

    /// Create a project (admin).
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: &CreateProjectInput) -> Result<ProjectLight, ApiError> {
        self.api
            .json(
                Method::POST,
                "/projects",
                Some(RequestBody::json(input)?),
                None,
            )
            .await
    }

    /// Update a project (admin).
    #[instrument(skip(self, input), fields(project_id = project_id))]
    pub async fn update(
        &self,
        project_id: &str,
        input: &UpdateProjectInput,
    ) -> Result<Project, ApiError> {
        self.api
            .json(
                Method::PATCH,
                &format!("/projects/{}", project_id),
                Some(RequestBody::json(input)?),
                None,
            )
            .await
    }

    /// Delete a project (admin).
    #[instrument(skip(self), fields(project_id = project_id))]
    pub async fn delete(&self, project_id: &str) -> Result<(), ApiError> {
        self.api
            .empty(Method::DELETE, &format!("/projects/{}", project_id), None)
            .await
    }

    /// Add team members to a project (admin).
    #[instrument(skip(self, user_ids), fields(project_id = project_id))]
    pub async fn add_members(
        &self,
        project_id: &str,
        user_ids: &[String],
    ) -> Result<Project, ApiError> {
        self.api
            .json(
                Method::POST,
                &format!("/projects/{}/members", project_id),
                Some(RequestBody::Json(serde_json::json!({ "userIds": user_ids }))),
                None,
            )
            .await
    }

    /// Remove a team member from a project (admin).
    #[instrument(skip(self), fields(project_id = project_id, user_id = user_id))]
    pub async fn remove_member(
        &self,
        project_id: &str,
        user_id: &str,
    ) -> Result<Project, ApiError> {
        self.api
            .json(
                Method::DELETE,
                &format!("/projects/{}/members/{}", project_id, user_id),
                None,
                None,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_input_omits_absent_description() {
        let input = CreateProjectInput {
            name: "api".to_string(),
            description: None,
            machine_configuration: MachineConfiguration {
                cpu_cores: 4,
                ram: 16,
                storage: 100,
            },
            team_member_ids: vec![],
            access_control: AccessControl {
                require_email_auth: false,
                public_access: false,
                restrict_to_team_members: true,
            },
        };

        let value = serde_json::to_value(&input).unwrap();
        assert!(value.get("description").is_none());
        assert_eq!(value["machineConfiguration"]["cpuCores"], 4);
        assert_eq!(value["teamMemberIds"], serde_json::json!([]));
    }

    #[test]
    fn test_update_input_is_sparse() {
        let input = UpdateProjectInput {
            name: Some("renamed".to_string()),
            ..UpdateProjectInput::default()
        };

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value, serde_json::json!({ "name": "renamed" }));
    }

    #[test]
    fn test_project_deserializes_wire_shape() {
        let json = serde_json::json!({
            "id": "p-1",
            "name": "api",
            "description": null,
            "organizationId": "org-1",
            "createdBy": { "id": "u-1", "name": "Ada", "avatarUrl": null },
            "machineConfiguration": { "cpuCores": 4, "ram": 16, "storage": 100 },
            "teamMembers": [],
            "accessControl": {
                "requireEmailAuth": false,
                "publicAccess": true,
                "restrictToTeamMembers": false
            },
            "createdAt": "2026-01-15T10:00:00Z",
            "updatedAt": "2026-02-01T09:30:00Z"
        });

        let project: Project = serde_json::from_value(json).unwrap();
        assert_eq!(project.organization_id, "org-1");
        assert_eq!(project.created_by.unwrap().name.as_deref(), Some("Ada"));
        assert!(project.access_control.public_access);
    }
}
