mod get;
mod list;
mod search;
mod service;
mod stats;

pub use list::{DEFAULT_RELATED_LIMIT, DEFAULT_TRENDING_LIMIT};
pub use service::PostQueryService;
