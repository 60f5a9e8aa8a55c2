use chrono::NaiveDate;

use crate::domain::{JobPosting, JobType};

/// Raw input collected by the create-job form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: Option<JobType>,
    pub salary_min: String,
    pub salary_max: String,
    pub description: String,
    /// Collected but not carried onto the posting.
    pub application_deadline: Option<NaiveDate>,
}

impl JobDraft {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::TitleRequired);
        }
        Ok(())
    }

    /// Builds a client-only posting. Salary text that is not a finite number
    /// is dropped.
    pub fn into_posting(self, id: i64) -> JobPosting {
        let mut posting = JobPosting::pending(id, self.title);
        posting.company = self.company;
        posting.location = self.location;
        posting.job_type = self.job_type;
        posting.salary_min = parse_salary(&self.salary_min);
        posting.salary_max = parse_salary(&self.salary_max);
        posting.description = Some(self.description).filter(|d| !d.is_empty());
        posting
    }
}

fn parse_salary(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("form is not open")]
    NotOpen,
    #[error("title is required")]
    TitleRequired,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CreateJobForm {
    #[default]
    Closed,
    Editing(JobDraft),
}

impl CreateJobForm {
    pub fn is_open(&self) -> bool {
        matches!(self, CreateJobForm::Editing(_))
    }

    /// Opens with an empty draft. An open form keeps its draft.
    pub fn open(&mut self) {
        if !self.is_open() {
            *self = CreateJobForm::Editing(JobDraft::default());
        }
    }

    pub fn draft(&self) -> Option<&JobDraft> {
        match self {
            CreateJobForm::Editing(draft) => Some(draft),
            CreateJobForm::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut JobDraft> {
        match self {
            CreateJobForm::Editing(draft) => Some(draft),
            CreateJobForm::Closed => None,
        }
    }

    /// Closes and discards the draft.
    pub fn cancel(&mut self) {
        *self = CreateJobForm::Closed;
    }

    /// Hands back the validated draft and closes. On error the form stays
    /// as it was.
    pub fn submit(&mut self) -> Result<JobDraft, FormError> {
        let draft = self.draft().ok_or(FormError::NotOpen)?;
        draft.validate()?;
        match std::mem::take(self) {
            CreateJobForm::Editing(draft) => Ok(draft),
            CreateJobForm::Closed => Err(FormError::NotOpen),
        }
    }
}
