//! Users API client.
//!
//! Backend: POST /users/account, PATCH /users/me (multipart/form-data).

use crate::client::{ApiClient, RequestBody};
use crate::error::ApiError;
use crate::types::FileUpload;
use reqwest::multipart::Form;
use reqwest::Method;
use tracing::instrument;

/// Input for updating the current user's account (multipart).
#[derive(Debug, Clone)]
pub struct UpdateAccountInput {
    /// First name.
    pub first_name: String,

    /// Last name.
    pub last_name: String,

    /// Optional profile picture.
    pub profile_picture_file: Option<FileUpload>,
}

impl UpdateAccountInput {
    fn into_form(self) -> Form {
        let mut form = Form::new()
            .text("firstName", self.first_name)
            .text("lastName", self.last_name);
        if let Some(picture) = self.profile_picture_file {
            form = form.part("profilePictureFile", picture.into_part());
        }
        form
    }
}

/// Typed call sites for the users endpoints.
#[derive(Debug, Clone)]
pub struct UsersClient {
    api: ApiClient,
}

impl UsersClient {
    /// Client over an existing API client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Create the account for the current user (e.g. after first sign-in).
    ///
    /// The backend shape is unstable; the raw JSON value is returned.
    #[instrument(skip(self))]
    pub async fn create_account(&self) -> Result<serde_json::Value, ApiError> {
        self.api
            .json(Method::POST, "/users/account", None, None)
            .await
    }

    /// Update the current user's account.
    #[instrument(skip(self, input))]
    pub async fn update_account(&self, input: UpdateAccountInput) -> Result<(), ApiError> {
        self.api
            .empty(
                Method::PATCH,
                "/users/me",
                Some(RequestBody::Multipart(input.into_form())),
            )
            .await
    }
}
