//! recommender - turns a free-form model reply into a structured record
//!
//! The completion endpoint is prompted to emit JSON but may emit prose,
//! malformed JSON, or JSON wrapped in commentary. `normalize` runs an
//! ordered cascade of strategies, each strictly more lenient than the last,
//! so a request always produces *some* usable record instead of surfacing a
//! parse failure to the end user.

pub mod constants;
pub mod error;
pub mod normalize;
pub mod prompt;
pub mod service;

pub use error::RecommenderError;
pub use service::RecommendationService;
