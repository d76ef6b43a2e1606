//! Extractors that validate their payload before the handler runs.
//!
//! Rejections are rendered through [`crate::AppError`], so every failure shares
//! the standard error envelope.

pub mod validated_json;
pub mod validated_query;

pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
