//! Geologic time scale trainer.
//!
//! The [`domain`] layer holds the immutable catalog of time divisions and its
//! structural queries; [`application`] builds the learner-facing checks on top
//! of it (sampling, chronological order, parent placement, timeline mapping,
//! quizzes); [`cli`] exposes both through the `geotime` binary.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{
    canonical_order, is_chronological, matches, ApplicationError, ApplicationResult, Sampler,
    TimelineScale,
};
pub use domain::{catalog, Catalog, DomainError, Interval, Rank, TimeDivision};
