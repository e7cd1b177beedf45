use axum::{extract::State, http::StatusCode, Json};

use crate::errors::AppError;
use crate::records::models::{
    BenchResourceRow, JobPostingRow, NewBenchResource, NewJobPosting, NewSubscriber, SubscriberRow,
};
use crate::records::validate::{validate_bench_resource, validate_job_posting, validate_subscriber};
use crate::state::AppState;

/// POST /api/v1/job-postings
pub async fn create_job_posting(
    State(state): State<AppState>,
    Json(req): Json<NewJobPosting>,
) -> Result<(StatusCode, Json<JobPostingRow>), AppError> {
    let insert = validate_job_posting(req)?;
    let row: JobPostingRow = sqlx::query_as(
        r#"
        INSERT INTO job_postings
            (job_title, company_name, location, job_description, notify_on_resume_submission)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(&insert.job_title)
    .bind(&insert.company_name)
    .bind(&insert.location)
    .bind(&insert.job_description)
    .bind(insert.notify_on_resume_submission)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/job-postings
pub async fn list_job_postings(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPostingRow>>, AppError> {
    let rows: Vec<JobPostingRow> =
        sqlx::query_as("SELECT * FROM job_postings ORDER BY created_at DESC")
            .fetch_all(&state.db)
            .await?;
    Ok(Json(rows))
}

/// POST /api/v1/bench-resources
pub async fn create_bench_resource(
    State(state): State<AppState>,
    Json(req): Json<NewBenchResource>,
) -> Result<(StatusCode, Json<BenchResourceRow>), AppError> {
    let insert = validate_bench_resource(req)?;
    let row: BenchResourceRow = sqlx::query_as(
        r#"
        INSERT INTO bench_resources
            (name, title, experience, skills, monthly_rate, resume_link, market_rate)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(&insert.name)
    .bind(&insert.title)
    .bind(&insert.experience)
    .bind(&insert.skills)
    .bind(&insert.monthly_rate)
    .bind(&insert.resume_link)
    .bind(&insert.market_rate)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/bench-resources
pub async fn list_bench_resources(
    State(state): State<AppState>,
) -> Result<Json<Vec<BenchResourceRow>>, AppError> {
    let rows: Vec<BenchResourceRow> =
        sqlx::query_as("SELECT * FROM bench_resources ORDER BY created_at DESC")
            .fetch_all(&state.db)
            .await?;
    Ok(Json(rows))
}

/// POST /api/v1/subscribers
pub async fn create_subscriber(
    State(state): State<AppState>,
    Json(req): Json<NewSubscriber>,
) -> Result<(StatusCode, Json<SubscriberRow>), AppError> {
    let insert = validate_subscriber(req)?;
    let row: SubscriberRow = sqlx::query_as(
        r#"
        INSERT INTO subscribers (email, source_tool)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(&insert.email)
    .bind(&insert.source_tool)
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/subscribers
pub async fn list_subscribers(
    State(state): State<AppState>,
) -> Result<Json<Vec<SubscriberRow>>, AppError> {
    let rows: Vec<SubscriberRow> =
        sqlx::query_as("SELECT * FROM subscribers ORDER BY created_at DESC")
            .fetch_all(&state.db)
            .await?;
    Ok(Json(rows))
}
