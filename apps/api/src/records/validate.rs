//! Pure payload validation for the CRUD surface. Kept free of database
//! handles so the required-field rules are unit-testable.

use crate::forms::FormError;
use crate::records::models::{
    BenchResourceInsert, JobPostingInsert, NewBenchResource, NewJobPosting, NewSubscriber,
    SubscriberInsert,
};

/// Bench resources without a negotiated rate list as "On Request",
/// as the original site renders them.
const DEFAULT_MONTHLY_RATE: &str = "On Request";

pub fn validate_job_posting(raw: NewJobPosting) -> Result<JobPostingInsert, FormError> {
    Ok(JobPostingInsert {
        job_title: require_text(raw.job_title, "job_title")?,
        company_name: require_text(raw.company_name, "company_name")?,
        location: require_text(raw.location, "location")?,
        job_description: require_text(raw.job_description, "job_description")?,
        notify_on_resume_submission: raw.notify_on_resume_submission,
    })
}

pub fn validate_bench_resource(raw: NewBenchResource) -> Result<BenchResourceInsert, FormError> {
    Ok(BenchResourceInsert {
        name: require_text(raw.name, "name")?,
        title: require_text(raw.title, "title")?,
        experience: require_text(raw.experience, "experience")?,
        skills: raw
            .skills
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        monthly_rate: optional_text(raw.monthly_rate)
            .unwrap_or_else(|| DEFAULT_MONTHLY_RATE.to_string()),
        resume_link: optional_text(raw.resume_link),
        market_rate: optional_text(raw.market_rate),
    })
}

pub fn validate_subscriber(raw: NewSubscriber) -> Result<SubscriberInsert, FormError> {
    let email = require_text(raw.email, "email")?;
    // The widgets accept anything with an '@'; anything stricter belongs
    // to the mail provider.
    if !email.contains('@') {
        return Err(FormError::invalid(
            "email",
            "must be a valid email address",
        ));
    }
    Ok(SubscriberInsert {
        email,
        source_tool: optional_text(raw.source_tool),
    })
}

fn require_text(value: Option<String>, field: &'static str) -> Result<String, FormError> {
    match value {
        Some(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Err(FormError::MissingField(field))
            } else {
                Ok(trimmed.to_string())
            }
        }
        None => Err(FormError::MissingField(field)),
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
