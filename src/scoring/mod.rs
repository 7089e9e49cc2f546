//! Scoring and recommendation pipeline
//!
//! Raw step inputs flow one way: answers, free text, and skill maps are
//! reduced into three independent profiles, fanned in by the career matcher,
//! and finished with a gap lookup. Every function here is a pure computation
//! over a snapshot of its input.

pub mod aptitude;
pub mod engine;
pub mod gaps;
pub mod interests;
pub mod recommender;
pub mod skills;
