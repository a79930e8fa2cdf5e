//! CRM Core
//!
//! Layered like the dashboard itself:
//! - domain: records and their fixed enumerations
//! - forms: raw form input to records, lenient or strict
//! - collection: immutable record lists with monotonic ids
//! - pipeline: deal aggregation (stage buckets, totals, weighted value)
//! - query: contact search, task filters and counts
//! - seed / export: demo data and JSON output

pub mod domain;
pub mod forms;
pub mod collection;
pub mod pipeline;
pub mod query;
pub mod seed;
pub mod export;

pub use domain::*;
pub use forms::{ContactDraft, DealDraft, Draft, FormError, FormPolicy, TaskDraft, MAX_AMOUNT};
pub use collection::{Collection, DealBook, IdAllocator, SubmitError};
pub use pipeline::{
    active_deal_count, bucket_by_stage, bucket_by_stage_id, pipeline_summary, stage_total, total_pipeline_value,
    weighted_pipeline_value, PipelineSummary, StageSummary,
};
pub use query::{contact_stats, filter_tasks, search_contacts, task_stats, upcoming_tasks, ContactStats, TaskStats};
pub use export::export_json;
