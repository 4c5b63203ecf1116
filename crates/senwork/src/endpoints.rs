//! Portfolio API endpoints
//!
//! One method per backend resource. Each marks its path busy in the client's
//! [`LoadingTracker`](crate::loading::LoadingTracker) for the duration of the
//! call and returns the server's envelope unchanged.

use crate::client::{Client, RequestOptions};
use crate::error::Result;
use crate::types::{AboutInfo, ApiResponse, ContactForm, Experience, Project, Service, Skill};

/// Path of the profile endpoint.
pub const ABOUT: &str = "/about";
/// Path of the skills endpoint.
pub const SKILLS: &str = "/skills";
/// Path of the services endpoint.
pub const SERVICES: &str = "/services";
/// Path of the work-history endpoint.
pub const EXPERIENCE: &str = "/experience";
/// Path of the projects endpoint.
pub const PROJECTS: &str = "/projects";
/// Path of the contact endpoint.
pub const CONTACT: &str = "/contact";

impl Client {
    /// Fetch the profile.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch_api`].
    pub async fn get_about(&self) -> Result<ApiResponse<AboutInfo>> {
        let _guard = self.loading().track(ABOUT);
        self.fetch_api(ABOUT, RequestOptions::get()).await
    }

    /// Fetch the skill list.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch_api`].
    pub async fn get_skills(&self) -> Result<ApiResponse<Vec<Skill>>> {
        let _guard = self.loading().track(SKILLS);
        self.fetch_api(SKILLS, RequestOptions::get()).await
    }

    /// Fetch the services offered.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch_api`].
    pub async fn get_services(&self) -> Result<ApiResponse<Vec<Service>>> {
        let _guard = self.loading().track(SERVICES);
        self.fetch_api(SERVICES, RequestOptions::get()).await
    }

    /// Fetch the work history.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch_api`].
    pub async fn get_experience(&self) -> Result<ApiResponse<Vec<Experience>>> {
        let _guard = self.loading().track(EXPERIENCE);
        self.fetch_api(EXPERIENCE, RequestOptions::get()).await
    }

    /// Fetch the project showcase.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch_api`].
    pub async fn get_projects(&self) -> Result<ApiResponse<Vec<Project>>> {
        let _guard = self.loading().track(PROJECTS);
        self.fetch_api(PROJECTS, RequestOptions::get()).await
    }

    /// POST a contact form as JSON.
    ///
    /// The form is sent as given; call [`ContactForm::validate`] first to
    /// reject it locally. The reply envelope carries a confirmation in
    /// `message` and no `data`.
    ///
    /// # Errors
    ///
    /// See [`Client::fetch_api`]. A form the server rejects comes back as an
    /// `Error::Api` with status 400.
    pub async fn submit_contact(&self, form: &ContactForm) -> Result<ApiResponse<()>> {
        let _guard = self.loading().track(CONTACT);
        let options = RequestOptions::post_json(form)?;
        self.fetch_api(CONTACT, options).await
    }
}
