//! Conventional CRUD surface layered over the tool pages: job postings,
//! bench resources, and mailing-list subscribers, backed by Postgres.

pub mod handlers;
pub mod models;
pub mod validate;
