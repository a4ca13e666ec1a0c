//! Application layer: exercises built on the catalog queries
//!
//! This layer owns randomness and learner-facing checks; the catalog itself stays read-only.

pub mod error;
pub mod exercise;
pub mod facts;
pub mod matcher;
pub mod ordering;
pub mod position;
pub mod quiz;
pub mod sampler;

pub use error::{ApplicationError, ApplicationResult};
pub use exercise::{
    chronology_challenge, default_placement_targets, placement_challenge, Difficulty,
};
pub use matcher::{classify_placement, matches, Placement};
pub use ordering::{canonical_order, is_chronological, validate_order_ids};
pub use position::TimelineScale;
pub use quiz::{generate_question, random_question, QuestionKind, QuizQuestion};
pub use sampler::Sampler;
