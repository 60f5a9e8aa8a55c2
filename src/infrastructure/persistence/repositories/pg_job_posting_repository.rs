use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use crate::application::ports::{JobPostingRepository, RepositoryError};
use crate::domain::{JobPosting, JobType, PostingOrigin};

// The table is owned elsewhere; widen columns so narrower integer or
// numeric types still decode.
const LIST_NEWEST_FIRST: &str = r#"
    SELECT id::BIGINT AS id,
           title::TEXT AS title,
           company::TEXT AS company,
           location::TEXT AS location,
           jobtype::TEXT AS jobtype,
           salarymin::DOUBLE PRECISION AS salarymin,
           salarymax::DOUBLE PRECISION AS salarymax,
           description::TEXT AS description,
           logo::TEXT AS logo,
           posted::TEXT AS posted,
           experiance::TEXT AS experiance
    FROM job
    ORDER BY id DESC
"#;

pub struct PgJobPostingRepository {
    pool: PgPool,
}

impl PgJobPostingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct JobRow {
    id: i64,
    title: String,
    company: Option<String>,
    location: Option<String>,
    jobtype: Option<String>,
    salarymin: Option<f64>,
    salarymax: Option<f64>,
    description: Option<String>,
    logo: Option<String>,
    posted: Option<String>,
    experiance: Option<String>,
}

impl From<JobRow> for JobPosting {
    fn from(r: JobRow) -> Self {
        let job_type = JobType::from_label(r.jobtype.as_deref());
        if job_type.is_none() {
            if let Some(label) = r.jobtype.as_deref().filter(|l| !l.is_empty()) {
                tracing::warn!(job_id = r.id, label, "Unknown job type, treating as unset");
            }
        }

        JobPosting {
            id: r.id,
            title: r.title,
            company: r.company.unwrap_or_default(),
            location: r.location.unwrap_or_default(),
            job_type,
            salary_min: r.salarymin,
            salary_max: r.salarymax,
            description: r.description,
            logo: r.logo,
            posted: r.posted,
            experiance: r.experiance,
            origin: PostingOrigin::Persisted,
        }
    }
}

#[async_trait]
impl JobPostingRepository for PgJobPostingRepository {
    #[instrument(skip(self))]
    async fn list_newest_first(&self) -> Result<Vec<JobPosting>, RepositoryError> {
        let rows = sqlx::query_as::<_, JobRow>(LIST_NEWEST_FIRST)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(rows.into_iter().map(JobPosting::from).collect())
    }
}
