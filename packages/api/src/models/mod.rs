//! Schemas for the entities exchanged with the backend.
//!
//! `User` and the auth form payloads are read and written by this workspace.
//! Task, project, note and team records are read-only projections that only
//! need to decode from backend JSON.

mod auth;
mod note;
mod project;
mod task;
mod team;
mod user;

pub use auth::{
    CheckPasswordFormData, ConfirmTokenFormData, ForgotPasswordFormData, LoginFormData,
    NewPasswordFormData, NewPasswordRequest, RegisterFormData, RequestConfirmationFormData,
    UpdateCurrentPasswordFormData,
};
pub use note::{Note, NoteFormData};
pub use project::{DashboardProject, DashboardProjects, Project, ProjectFormData};
pub use task::{StatusChange, Task, TaskFormData, TaskProject, TaskStatus};
pub use team::{TeamMember, TeamMemberFormData, TeamMembers};
pub use user::{User, UserProfileFormData};
