use crate::domain::{JobPosting, JobType};

pub const DEFAULT_SALARY_FLOOR: f64 = 0.0;
pub const DEFAULT_SALARY_CEILING: f64 = 500_000.0;

/// Salary range the filter slider spans. A filter range equal to these
/// bounds does not narrow anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryBounds {
    pub floor: f64,
    pub ceiling: f64,
}

impl SalaryBounds {
    pub fn new(floor: f64, ceiling: f64) -> Self {
        Self { floor, ceiling }
    }
}

impl Default for SalaryBounds {
    fn default() -> Self {
        Self {
            floor: DEFAULT_SALARY_FLOOR,
            ceiling: DEFAULT_SALARY_CEILING,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostingFilters {
    pub title: String,
    pub location: String,
    pub job_type: Option<JobType>,
    pub salary: (f64, f64),
    bounds: SalaryBounds,
}

impl PostingFilters {
    /// Filters that let every posting through.
    pub fn new(bounds: SalaryBounds) -> Self {
        Self {
            title: String::new(),
            location: String::new(),
            job_type: None,
            salary: (bounds.floor, bounds.ceiling),
            bounds,
        }
    }

    pub fn bounds(&self) -> SalaryBounds {
        self.bounds
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_job_type(mut self, job_type: Option<JobType>) -> Self {
        self.job_type = job_type;
        self
    }

    pub fn with_salary(mut self, min: f64, max: f64) -> Self {
        self.salary = (min, max);
        self
    }

    pub fn is_noop(&self) -> bool {
        self.title.is_empty()
            && self.location.is_empty()
            && self.job_type.is_none()
            && self.salary == (self.bounds.floor, self.bounds.ceiling)
    }

    pub fn matches(&self, posting: &JobPosting) -> bool {
        if !contains_ignoring_case(&posting.title, &self.title) {
            return false;
        }
        if !contains_ignoring_case(&posting.location, &self.location) {
            return false;
        }
        if let Some(wanted) = self.job_type {
            if posting.job_type != Some(wanted) {
                return false;
            }
        }
        self.salary_overlaps(posting)
    }

    /// Postings that pass every filter, in their original order.
    pub fn apply<'a>(&self, postings: &'a [JobPosting]) -> Vec<&'a JobPosting> {
        postings.iter().filter(|p| self.matches(p)).collect()
    }

    // A missing salary bound never excludes a posting.
    fn salary_overlaps(&self, posting: &JobPosting) -> bool {
        let (min, max) = self.salary;
        if min > self.bounds.floor {
            if let Some(salary_max) = posting.salary_max {
                if salary_max < min {
                    return false;
                }
            }
        }
        if max < self.bounds.ceiling {
            if let Some(salary_min) = posting.salary_min {
                if salary_min > max {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for PostingFilters {
    fn default() -> Self {
        Self::new(SalaryBounds::default())
    }
}

fn contains_ignoring_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
