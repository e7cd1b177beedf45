use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobPostingRow {
    pub id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    pub job_description: String,
    pub notify_on_resume_submission: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BenchResourceRow {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub monthly_rate: String,
    pub resume_link: Option<String>,
    pub market_rate: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SubscriberRow {
    pub id: Uuid,
    pub email: String,
    pub source_tool: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Raw request payloads. Everything is optional at the wire level so
// validation, not deserialization, reports which field is missing.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewJobPosting {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub job_description: Option<String>,
    #[serde(default)]
    pub notify_on_resume_submission: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBenchResource {
    pub name: Option<String>,
    pub title: Option<String>,
    pub experience: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub monthly_rate: Option<String>,
    pub resume_link: Option<String>,
    pub market_rate: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewSubscriber {
    pub email: Option<String>,
    pub source_tool: Option<String>,
}

// Validated insert payloads produced by `records::validate`.

#[derive(Debug, Clone, PartialEq)]
pub struct JobPostingInsert {
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    pub job_description: String,
    pub notify_on_resume_submission: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchResourceInsert {
    pub name: String,
    pub title: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub monthly_rate: String,
    pub resume_link: Option<String>,
    pub market_rate: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriberInsert {
    pub email: String,
    pub source_tool: Option<String>,
}
