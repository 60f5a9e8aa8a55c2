use jobboard::domain::{JobPosting, JobType, PostingOrigin};

pub fn posting(
    id: i64,
    title: &str,
    location: &str,
    job_type: Option<JobType>,
    salary: (Option<f64>, Option<f64>),
) -> JobPosting {
    JobPosting {
        id,
        title: title.to_string(),
        company: "Acme".to_string(),
        location: location.to_string(),
        job_type,
        salary_min: salary.0,
        salary_max: salary.1,
        description: Some(format!("{title} at Acme")),
        logo: None,
        posted: Some("2 days ago".to_string()),
        experiance: Some("1-2 yrs".to_string()),
        origin: PostingOrigin::Persisted,
    }
}

/// Newest first, as the listing service returns them.
pub fn sample_postings() -> Vec<JobPosting> {
    vec![
        posting(
            4,
            "Backend Engineer",
            "Remote",
            Some(JobType::FullTime),
            (Some(600_000.0), Some(900_000.0)),
        ),
        posting(
            3,
            "Product Designer",
            "Berlin",
            Some(JobType::Contract),
            (Some(50_000.0), Some(80_000.0)),
        ),
        posting(
            2,
            "Data Intern",
            "Remote, EU",
            Some(JobType::Internship),
            (None, None),
        ),
        posting(
            1,
            "Support Engineer",
            "Lisbon",
            Some(JobType::PartTime),
            (Some(20_000.0), Some(30_000.0)),
        ),
    ]
}
