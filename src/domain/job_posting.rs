use serde::{Deserialize, Serialize};

use super::job_type::deserialize_optional_job_type;
use super::{JobType, LocalKey, PostingOrigin};

/// Label given to postings created on the client.
pub const JUST_POSTED: &str = "Just now";

/// One job listing. Field names on the wire match the `job` table columns,
/// including the `experiance` spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(
        rename = "jobtype",
        default,
        deserialize_with = "deserialize_optional_job_type"
    )]
    pub job_type: Option<JobType>,
    #[serde(rename = "salarymin", default)]
    pub salary_min: Option<f64>,
    #[serde(rename = "salarymax", default)]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub posted: Option<String>,
    #[serde(default)]
    pub experiance: Option<String>,
    #[serde(skip)]
    pub origin: PostingOrigin,
}

impl JobPosting {
    /// A posting that only exists in client state.
    pub fn pending(id: i64, title: String) -> Self {
        Self {
            id,
            title,
            company: String::new(),
            location: String::new(),
            job_type: None,
            salary_min: None,
            salary_max: None,
            description: None,
            logo: None,
            posted: Some(JUST_POSTED.to_string()),
            experiance: None,
            origin: PostingOrigin::Pending(LocalKey::new()),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.origin.is_pending()
    }
}
